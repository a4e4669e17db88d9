//! Column Definition
//!
//! Defines list columns with their responsive visibility, width and alignment.

use super::breakpoint::Responsive;

/// Column width specification
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnWidth {
    /// Share of the remaining space, relative to other flexible columns
    Flex(f32),
    /// Fixed width in rem
    Rem(f32),
    /// Fixed width in pixels
    Px(f32),
}

impl Default for ColumnWidth {
    fn default() -> Self {
        ColumnWidth::Flex(1.0)
    }
}

impl std::fmt::Display for ColumnWidth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnWidth::Flex(grow) => write!(f, "{grow}fr"),
            ColumnWidth::Rem(rem) => write!(f, "{rem}rem"),
            ColumnWidth::Px(px) => write!(f, "{px}px"),
        }
    }
}

/// Horizontal alignment of a cell's content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Start,
    Center,
    End,
}

/// Column declaration owned by the list header
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSpec {
    /// Column identifier, unique within a list
    pub name: String,
    /// Header label
    pub label: String,
    /// Visibility per breakpoint (empty means visible everywhere)
    pub visibility: Responsive<bool>,
    /// Width per breakpoint (empty means the default flex width)
    pub width: Responsive<ColumnWidth>,
    pub align: Align,
}

impl ColumnSpec {
    /// Create a new column visible everywhere with the default width
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            visibility: Responsive::new(),
            width: Responsive::new(),
            align: Align::default(),
        }
    }

    /// Set flexible width
    pub fn flex_width(mut self, grow: f32) -> Self {
        self.width = Responsive::all(ColumnWidth::Flex(grow));
        self
    }

    /// Set fixed width in rem
    pub fn rem_width(mut self, rem: f32) -> Self {
        self.width = Responsive::all(ColumnWidth::Rem(rem));
        self
    }

    /// Set a width that changes across breakpoints
    pub fn responsive_width(mut self, width: Responsive<ColumnWidth>) -> Self {
        self.width = width;
        self
    }

    /// Set visibility per breakpoint
    pub fn visibility(mut self, visibility: Responsive<bool>) -> Self {
        self.visibility = visibility;
        self
    }

    /// Set alignment
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }
}

/// Per-cell settings that take precedence over the header declaration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellOverrides {
    pub visibility: Option<Responsive<bool>>,
    pub width: Option<Responsive<ColumnWidth>>,
    pub align: Option<Align>,
}

impl CellOverrides {
    pub fn visibility(mut self, visibility: Responsive<bool>) -> Self {
        self.visibility = Some(visibility);
        self
    }

    pub fn width(mut self, width: Responsive<ColumnWidth>) -> Self {
        self.width = Some(width);
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }
}

/// Resolved layout of one cell at one breakpoint
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellLayout {
    pub visible: bool,
    pub width: ColumnWidth,
    pub align: Align,
}

impl Default for CellLayout {
    fn default() -> Self {
        Self {
            visible: true,
            width: ColumnWidth::default(),
            align: Align::default(),
        }
    }
}
