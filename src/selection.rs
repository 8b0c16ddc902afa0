//! Keyboard and pointer selection over the visible result rows.

/// Index of the highlighted row. Always 0 right after a result refresh.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    index: usize,
}

impl Selection {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Move down one row, wrapping from the last row to the first.
    pub fn next(&mut self, len: usize) {
        if len > 0 {
            self.index = (self.index + 1) % len;
        }
    }

    /// Move up one row, wrapping from the first row to the last.
    pub fn previous(&mut self, len: usize) {
        if len > 0 {
            self.index = (self.index + len - 1) % len;
        }
    }

    /// Jump straight to a row, as on mouse hover. Out-of-range indices are
    /// ignored rather than clamped.
    pub fn hover(&mut self, index: usize, len: usize) {
        if index < len {
            self.index = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps_to_first() {
        let mut selection = Selection::default();
        for _ in 0..4 {
            selection.next(5);
        }
        assert_eq!(selection.index(), 4);
        selection.next(5);
        assert_eq!(selection.index(), 0);
    }

    #[test]
    fn test_previous_wraps_to_last() {
        let mut selection = Selection::default();
        assert_eq!(selection.index(), 0);
        selection.previous(5);
        assert_eq!(selection.index(), 4);
        selection.previous(5);
        assert_eq!(selection.index(), 3);
    }

    #[test]
    fn test_single_row_stays_put() {
        let mut selection = Selection::default();
        selection.next(1);
        assert_eq!(selection.index(), 0);
        selection.previous(1);
        assert_eq!(selection.index(), 0);
    }

    #[test]
    fn test_empty_list_is_a_noop() {
        let mut selection = Selection::default();
        selection.next(0);
        selection.previous(0);
        assert_eq!(selection.index(), 0);
    }

    #[test]
    fn test_hover_within_bounds_moves() {
        let mut selection = Selection::default();
        selection.hover(3, 5);
        assert_eq!(selection.index(), 3);
    }

    #[test]
    fn test_hover_out_of_bounds_is_ignored() {
        let mut selection = Selection::default();
        selection.hover(2, 5);
        selection.hover(9, 5);
        assert_eq!(selection.index(), 2);
    }

    #[test]
    fn test_reset_returns_to_first() {
        let mut selection = Selection::default();
        selection.hover(4, 5);
        selection.reset();
        assert_eq!(selection.index(), 0);
    }
}
