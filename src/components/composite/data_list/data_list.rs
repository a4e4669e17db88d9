//! DataList
//!
//! Header, rows and footer of a responsive list, resolved to a per-breakpoint
//! layout. Rows carry content only; width, visibility and alignment come from
//! the header's [`ColumnRegistry`] unless a cell overrides them.

use super::accordion::AccordionState;
use super::breakpoint::{Breakpoint, Responsive};
use super::column::{CellLayout, CellOverrides};
use super::registry::ColumnRegistry;

/// Content of a single cell
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellContent {
    #[default]
    Empty,
    /// A single line of text
    Text(String),
    /// Stacked lines (primary line first)
    Lines(Vec<String>),
    /// A wrap of small badges
    Badges(Vec<String>),
    /// Trigger of a row menu, keyed by the menu's owner id
    Menu(String),
}

impl CellContent {
    /// Plain-text rendering, lines joined by " / "
    pub fn to_plain_text(&self) -> String {
        match self {
            CellContent::Empty => String::new(),
            CellContent::Text(text) => text.clone(),
            CellContent::Lines(lines) => lines.join(" / "),
            CellContent::Badges(badges) => badges
                .iter()
                .map(|b| format!("[{b}]"))
                .collect::<Vec<_>>()
                .join(" "),
            CellContent::Menu(_) => "...".to_string(),
        }
    }
}

impl From<&str> for CellContent {
    fn from(text: &str) -> Self {
        CellContent::Text(text.to_string())
    }
}

impl From<String> for CellContent {
    fn from(text: String) -> Self {
        CellContent::Text(text)
    }
}

/// A cell tagged with the column it belongs to
#[derive(Debug, Clone, PartialEq)]
pub struct DataListCell {
    pub col_name: String,
    pub content: CellContent,
    pub overrides: CellOverrides,
    /// Navigation target when the whole cell is a link
    pub href: Option<String>,
}

impl DataListCell {
    pub fn new(col_name: impl Into<String>, content: impl Into<CellContent>) -> Self {
        Self {
            col_name: col_name.into(),
            content: content.into(),
            overrides: CellOverrides::default(),
            href: None,
        }
    }

    pub fn overrides(mut self, overrides: CellOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }
}

/// A data row
#[derive(Debug, Clone, PartialEq)]
pub struct DataListRow {
    pub id: String,
    pub cells: Vec<DataListCell>,
    /// Panel revealed when the row is expanded
    pub panel: Option<CellContent>,
}

impl DataListRow {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            cells: Vec::new(),
            panel: None,
        }
    }

    pub fn cell(mut self, cell: DataListCell) -> Self {
        self.cells.push(cell);
        self
    }

    /// Make the row expandable with the given panel
    pub fn panel(mut self, panel: impl Into<CellContent>) -> Self {
        self.panel = Some(panel.into());
        self
    }
}

/// Header row: the column declarations plus the header's own visibility
#[derive(Debug, Clone, Default)]
pub struct DataListHeader {
    pub columns: ColumnRegistry,
    pub visibility: Responsive<bool>,
}

impl DataListHeader {
    pub fn new(columns: ColumnRegistry) -> Self {
        Self {
            columns,
            visibility: Responsive::new(),
        }
    }

    pub fn visibility(mut self, visibility: Responsive<bool>) -> Self {
        self.visibility = visibility;
        self
    }
}

/// Footer slot spanning every column
#[derive(Debug, Clone, PartialEq)]
pub struct DataListFooter<F> {
    pub content: F,
}

/// A cell after layout resolution
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCell<'a> {
    pub col_name: &'a str,
    pub layout: CellLayout,
    pub content: &'a CellContent,
    pub href: Option<&'a str>,
}

/// A row after layout resolution
#[derive(Debug, Clone, PartialEq)]
pub struct RowLayout<'a> {
    pub id: &'a str,
    pub cells: Vec<ResolvedCell<'a>>,
    /// Present when the row is expanded
    pub panel: Option<&'a CellContent>,
}

impl<'a> RowLayout<'a> {
    /// Cells visible at the resolved breakpoint
    pub fn visible_cells(&self) -> impl Iterator<Item = &ResolvedCell<'a>> {
        self.cells.iter().filter(|cell| cell.layout.visible)
    }
}

/// Footer after layout resolution
#[derive(Debug, Clone, PartialEq)]
pub struct FooterLayout<'a, F> {
    /// Number of visible columns the footer spans
    pub span: usize,
    pub content: &'a F,
}

/// Whole list resolved at one breakpoint
#[derive(Debug, Clone, PartialEq)]
pub struct DataListLayout<'a, F> {
    pub breakpoint: Breakpoint,
    pub header: Option<RowLayout<'a>>,
    pub rows: Vec<RowLayout<'a>>,
    pub footer: Option<FooterLayout<'a, F>>,
}

/// A responsive list with an optional footer of type `F`
#[derive(Debug, Clone)]
pub struct DataList<F = ()> {
    pub header: DataListHeader,
    header_cells: Vec<DataListCell>,
    pub rows: Vec<DataListRow>,
    pub footer: Option<DataListFooter<F>>,
    pub accordion: AccordionState,
}

impl<F> DataList<F> {
    /// Create a list from its header
    pub fn new(header: DataListHeader) -> Self {
        let header_cells = header
            .columns
            .iter()
            .map(|column| DataListCell::new(column.name.clone(), column.label.clone()))
            .collect();
        Self {
            header,
            header_cells,
            rows: Vec::new(),
            footer: None,
            accordion: AccordionState::multiple(),
        }
    }

    /// Keep at most one row expanded at a time
    pub fn single_expand(mut self) -> Self {
        self.accordion = AccordionState::single();
        self
    }

    pub fn set_rows(&mut self, rows: Vec<DataListRow>) {
        self.rows = rows;
    }

    pub fn set_footer(&mut self, content: F) {
        self.footer = Some(DataListFooter { content });
    }

    /// Toggle an expandable row; rows without a panel are ignored
    pub fn toggle_row(&mut self, row_id: &str) -> bool {
        let expandable = self
            .rows
            .iter()
            .any(|row| row.id == row_id && row.panel.is_some());
        if !expandable {
            tracing::debug!(row = row_id, "Ignoring toggle on non-expandable row");
            return false;
        }
        self.accordion.toggle(row_id)
    }

    /// Resolve one cell against the header declarations
    fn resolve_cell<'a>(&'a self, cell: &'a DataListCell, bp: Breakpoint) -> ResolvedCell<'a> {
        ResolvedCell {
            col_name: &cell.col_name,
            layout: self
                .header
                .columns
                .resolve_cell_layout(&cell.col_name, bp, Some(&cell.overrides)),
            content: &cell.content,
            href: cell.href.as_deref(),
        }
    }

    /// Resolve the whole list at a breakpoint
    pub fn layout(&self, bp: Breakpoint) -> DataListLayout<'_, F> {
        let header_visible = self.header.visibility.resolve(bp).copied().unwrap_or(true);
        let header = header_visible.then(|| RowLayout {
            id: "header",
            cells: self
                .header_cells
                .iter()
                .map(|cell| self.resolve_cell(cell, bp))
                .collect(),
            panel: None,
        });

        let rows = self
            .rows
            .iter()
            .map(|row| RowLayout {
                id: &row.id,
                cells: row.cells.iter().map(|cell| self.resolve_cell(cell, bp)).collect(),
                panel: row
                    .panel
                    .as_ref()
                    .filter(|_| self.accordion.is_expanded(&row.id)),
            })
            .collect();

        let footer = self.footer.as_ref().map(|footer| FooterLayout {
            span: self.header.columns.visible_count(bp),
            content: &footer.content,
        });

        DataListLayout {
            breakpoint: bp,
            header,
            rows,
            footer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::composite::data_list::{ColumnSpec, ColumnWidth};

    fn list() -> DataList<&'static str> {
        let columns = ColumnRegistry::from_columns([
            ColumnSpec::new("name", "Name").flex_width(2.0),
            ColumnSpec::new("email", "Email").visibility(Responsive::from_breakpoint(Breakpoint::Md)),
            ColumnSpec::new("actions", "").rem_width(4.0),
        ])
        .expect("unique columns");
        let mut list = DataList::new(
            DataListHeader::new(columns).visibility(Responsive::from_breakpoint(Breakpoint::Md)),
        );
        list.set_rows(vec![
            DataListRow::new("1")
                .cell(DataListCell::new("name", "Ada"))
                .cell(DataListCell::new("email", "ada@example.com"))
                .cell(DataListCell::new("actions", CellContent::Empty))
                .panel("details"),
            DataListRow::new("2")
                .cell(DataListCell::new("name", "Grace"))
                .cell(DataListCell::new("note", "no header")),
        ]);
        list.set_footer("pagination");
        list
    }

    #[test]
    fn test_header_hidden_on_small_screens() {
        let list = list();
        assert!(list.layout(Breakpoint::Base).header.is_none());
        let header = list.layout(Breakpoint::Md).header.expect("header visible from md");
        assert_eq!(header.cells.len(), 3);
        assert_eq!(header.cells[0].content, &CellContent::Text("Name".to_string()));
    }

    #[test]
    fn test_rows_inherit_header_layout() {
        let list = list();
        let layout = list.layout(Breakpoint::Sm);
        let first = &layout.rows[0];
        let visible: Vec<_> = first.visible_cells().map(|c| c.col_name).collect();
        assert_eq!(visible, ["name", "actions"]);
        assert_eq!(first.cells[0].layout.width, ColumnWidth::Flex(2.0));
        assert_eq!(first.cells[2].layout.width, ColumnWidth::Rem(4.0));
    }

    #[test]
    fn test_cell_without_header_column_is_visible() {
        let list = list();
        let layout = list.layout(Breakpoint::Base);
        let note = &layout.rows[1].cells[1];
        assert_eq!(note.col_name, "note");
        assert!(note.layout.visible);
    }

    #[test]
    fn test_footer_spans_visible_columns() {
        let list = list();
        let small = list.layout(Breakpoint::Base).footer.expect("footer");
        assert_eq!(small.span, 2);
        assert_eq!(small.content, &"pagination");
        assert_eq!(list.layout(Breakpoint::Lg).footer.expect("footer").span, 3);
    }

    #[test]
    fn test_expandable_rows() {
        let mut list = list();
        assert!(list.layout(Breakpoint::Lg).rows[0].panel.is_none());
        assert!(list.toggle_row("1"));
        assert_eq!(
            list.layout(Breakpoint::Lg).rows[0].panel,
            Some(&CellContent::Text("details".to_string()))
        );
        assert!(!list.toggle_row("2"));
        assert!(list.layout(Breakpoint::Lg).rows[1].panel.is_none());
    }

    fn two_panel_list() -> DataList {
        let columns = ColumnRegistry::from_columns([ColumnSpec::new("name", "Name")]).expect("unique columns");
        let mut list = DataList::new(DataListHeader::new(columns));
        list.set_rows(vec![
            DataListRow::new("1").cell(DataListCell::new("name", "Ada")).panel("first"),
            DataListRow::new("2").cell(DataListCell::new("name", "Grace")).panel("second"),
        ]);
        list
    }

    #[test]
    fn test_rows_toggle_independently() {
        let mut list = two_panel_list();
        assert!(list.toggle_row("1"));
        assert!(list.toggle_row("2"));
        let layout = list.layout(Breakpoint::Base);
        assert!(layout.rows[0].panel.is_some());
        assert!(layout.rows[1].panel.is_some());

        assert!(!list.toggle_row("1"));
        let layout = list.layout(Breakpoint::Base);
        assert!(layout.rows[0].panel.is_none());
        assert!(layout.rows[1].panel.is_some());
    }

    #[test]
    fn test_single_expand_is_opt_in() {
        let mut list = two_panel_list().single_expand();
        list.toggle_row("1");
        list.toggle_row("2");
        let layout = list.layout(Breakpoint::Base);
        assert!(layout.rows[0].panel.is_none());
        assert!(layout.rows[1].panel.is_some());
    }
}
