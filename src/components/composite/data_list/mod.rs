//! DataList Component
//!
//! A responsive list layout: a header declares the columns once, rows
//! reference them by name, and a footer slot spans the whole column set.

pub mod accordion;
pub mod breakpoint;
pub mod column;
pub mod data_list;
pub mod registry;

pub use accordion::AccordionState;
pub use breakpoint::{Breakpoint, Responsive};
pub use column::{Align, CellLayout, CellOverrides, ColumnSpec, ColumnWidth};
pub use data_list::{
    CellContent, DataList, DataListCell, DataListFooter, DataListHeader, DataListLayout,
    DataListRow, FooterLayout, ResolvedCell, RowLayout,
};
pub use registry::ColumnRegistry;
