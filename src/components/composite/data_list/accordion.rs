//! Accordion rows
//!
//! Expansion state for list rows that reveal an extra panel.

use ahash::AHashSet;

/// Tracks which rows are expanded
#[derive(Debug, Clone, Default)]
pub struct AccordionState {
    expanded: AHashSet<String>,
    allow_multiple: bool,
}

impl AccordionState {
    /// Only one row expanded at a time
    pub fn single() -> Self {
        Self::default()
    }

    /// Any number of rows expanded at once
    pub fn multiple() -> Self {
        Self {
            expanded: AHashSet::new(),
            allow_multiple: true,
        }
    }

    /// Toggle a row, returning whether it is now expanded
    pub fn toggle(&mut self, row_id: &str) -> bool {
        if self.expanded.remove(row_id) {
            return false;
        }
        if !self.allow_multiple {
            self.expanded.clear();
        }
        self.expanded.insert(row_id.to_string());
        true
    }

    pub fn is_expanded(&self, row_id: &str) -> bool {
        self.expanded.contains(row_id)
    }

    /// Collapse every row
    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_mode_collapses_previous_row() {
        let mut accordion = AccordionState::single();
        assert!(accordion.toggle("a"));
        assert!(accordion.toggle("b"));
        assert!(!accordion.is_expanded("a"));
        assert!(accordion.is_expanded("b"));
        assert!(!accordion.toggle("b"));
        assert!(!accordion.is_expanded("b"));
    }

    #[test]
    fn test_multiple_mode_keeps_rows_open() {
        let mut accordion = AccordionState::multiple();
        accordion.toggle("a");
        accordion.toggle("b");
        assert!(accordion.is_expanded("a"));
        assert!(accordion.is_expanded("b"));
        accordion.collapse_all();
        assert!(!accordion.is_expanded("a"));
    }
}
