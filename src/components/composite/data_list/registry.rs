//! Column Registry
//!
//! Order-preserving lookup of the header's column declarations. Row cells
//! resolve their layout through it by column name.

use hashlink::LinkedHashMap;

use super::breakpoint::Breakpoint;
use super::column::{CellLayout, CellOverrides, ColumnSpec};
use crate::error::{Error, Result};

/// Columns declared by a list header, in header order
#[derive(Debug, Clone, Default)]
pub struct ColumnRegistry {
    columns: LinkedHashMap<String, ColumnSpec>,
}

impl ColumnRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from columns in header order
    pub fn from_columns(columns: impl IntoIterator<Item = ColumnSpec>) -> Result<Self> {
        let mut registry = Self::new();
        for column in columns {
            registry.register(column)?;
        }
        Ok(registry)
    }

    /// Append a column; names must be unique within the list
    pub fn register(&mut self, column: ColumnSpec) -> Result<()> {
        if self.columns.contains_key(&column.name) {
            return Err(Error::Invalid {
                message: format!("duplicate column name: {}", column.name),
            });
        }
        self.columns.insert(column.name.clone(), column);
        Ok(())
    }

    /// Look up a column by name
    pub fn get(&self, name: &str) -> Option<&ColumnSpec> {
        self.columns.get(name)
    }

    /// Columns in header order
    pub fn iter(&self) -> impl Iterator<Item = &ColumnSpec> {
        self.columns.values()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Number of columns visible at `bp`
    pub fn visible_count(&self, bp: Breakpoint) -> usize {
        self.iter()
            .filter(|column| self.resolve_cell_layout(&column.name, bp, None).visible)
            .count()
    }

    /// Resolve a cell's layout at a breakpoint.
    ///
    /// Overrides win field by field; a field the override leaves undeclared
    /// at `bp` falls back to the header. Names with no header entry resolve
    /// to the defaults: visible everywhere, flex width, start alignment.
    pub fn resolve_cell_layout(
        &self,
        column_name: &str,
        bp: Breakpoint,
        overrides: Option<&CellOverrides>,
    ) -> CellLayout {
        let defaults = CellLayout::default();
        let column = self.get(column_name);
        if column.is_none() {
            tracing::trace!(column = column_name, "Cell references unregistered column");
        }

        let visible = overrides
            .and_then(|o| o.visibility.as_ref())
            .and_then(|v| v.resolve(bp))
            .or_else(|| column.and_then(|c| c.visibility.resolve(bp)))
            .copied()
            .unwrap_or(defaults.visible);

        let width = overrides
            .and_then(|o| o.width.as_ref())
            .and_then(|w| w.resolve(bp))
            .or_else(|| column.and_then(|c| c.width.resolve(bp)))
            .copied()
            .unwrap_or(defaults.width);

        let align = overrides
            .and_then(|o| o.align)
            .or_else(|| column.map(|c| c.align))
            .unwrap_or(defaults.align);

        CellLayout {
            visible,
            width,
            align,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::composite::data_list::{Align, ColumnWidth, Responsive};

    fn registry() -> ColumnRegistry {
        ColumnRegistry::from_columns([
            ColumnSpec::new("login", "Login").flex_width(2.0),
            ColumnSpec::new("id", "ID")
                .rem_width(4.0)
                .visibility(Responsive::from_breakpoint(Breakpoint::Lg)),
            ColumnSpec::new("status", "Status")
                .responsive_width(
                    Responsive::all(ColumnWidth::Rem(2.0)).at(Breakpoint::Md, ColumnWidth::Flex(0.5)),
                )
                .visibility(Responsive::all(false).at(Breakpoint::Sm, true))
                .align(Align::Center),
        ])
        .expect("unique columns")
    }

    #[test]
    fn test_row_cell_inherits_header_visibility() {
        let registry = registry();
        let header = registry.get("status").expect("status column");
        for bp in Breakpoint::ALL {
            let layout = registry.resolve_cell_layout("status", bp, None);
            assert_eq!(Some(&layout.visible), header.visibility.resolve(bp));
            assert_eq!(layout.align, Align::Center);
        }
    }

    #[test]
    fn test_unregistered_column_fails_open() {
        let registry = registry();
        for bp in Breakpoint::ALL {
            let layout = registry.resolve_cell_layout("unregistered", bp, None);
            assert!(layout.visible);
            assert_eq!(layout.width, ColumnWidth::Flex(1.0));
            assert_eq!(layout.align, Align::Start);
        }
    }

    #[test]
    fn test_responsive_width() {
        let registry = registry();
        assert_eq!(
            registry.resolve_cell_layout("status", Breakpoint::Base, None).width,
            ColumnWidth::Rem(2.0)
        );
        assert_eq!(
            registry.resolve_cell_layout("status", Breakpoint::Xl, None).width,
            ColumnWidth::Flex(0.5)
        );
    }

    #[test]
    fn test_overrides_win_field_by_field() {
        let registry = registry();
        let overrides = CellOverrides::default()
            .visibility(Responsive::all(true))
            .align(Align::End);
        let layout = registry.resolve_cell_layout("id", Breakpoint::Base, Some(&overrides));
        assert!(layout.visible);
        assert_eq!(layout.align, Align::End);
        // width not overridden: header value
        assert_eq!(layout.width, ColumnWidth::Rem(4.0));
    }

    #[test]
    fn test_override_undeclared_at_breakpoint_falls_back_to_header() {
        let registry = registry();
        let overrides = CellOverrides::default().visibility(Responsive::new().at(Breakpoint::Xl, false));
        assert!(registry.resolve_cell_layout("id", Breakpoint::Lg, Some(&overrides)).visible);
        assert!(!registry.resolve_cell_layout("id", Breakpoint::Xl, Some(&overrides)).visible);
    }

    #[test]
    fn test_duplicate_column_is_rejected() {
        let mut registry = registry();
        let result = registry.register(ColumnSpec::new("login", "Again"));
        assert!(matches!(result, Err(Error::Invalid { .. })));
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_visible_count_and_order() {
        let registry = registry();
        assert_eq!(registry.visible_count(Breakpoint::Base), 1);
        assert_eq!(registry.visible_count(Breakpoint::Md), 2);
        assert_eq!(registry.visible_count(Breakpoint::Lg), 3);
        let names: Vec<_> = registry.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["login", "id", "status"]);
    }
}
