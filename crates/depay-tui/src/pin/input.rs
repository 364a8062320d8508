/*
[INPUT]:  Digit keystrokes and focus movement keys
[OUTPUT]: Four-cell PIN state with an explicit focus index
[POS]:    PIN domain logic - entry widget state
[UPDATE]: When keystroke semantics change
*/

/// Number of PIN cells
pub const PIN_LEN: usize = 4;

/// State of a four-cell PIN entry widget
///
/// Focus is plain data: the renderer highlights `focus()` and the key
/// handler mutates it, so the whole widget is testable without a
/// terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinEntry {
    digits: [Option<char>; PIN_LEN],
    focus: usize,
}

impl PinEntry {
    /// Create an empty entry focused on the first cell
    pub fn new() -> Self {
        Self {
            digits: [None; PIN_LEN],
            focus: 0,
        }
    }

    /// Cells in display order
    pub fn digits(&self) -> &[Option<char>; PIN_LEN] {
        &self.digits
    }

    /// Index of the focused cell
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// True once every cell holds a digit
    pub fn is_complete(&self) -> bool {
        self.digits.iter().all(Option::is_some)
    }

    /// Digits joined in order, skipping empty cells
    pub fn code(&self) -> String {
        self.digits.iter().flatten().collect()
    }

    /// Type a digit into the focused cell
    ///
    /// Non-digits are ignored, as is typing into a cell that already
    /// holds one. Filling a cell moves focus right, except at the last
    /// cell where focus stays put.
    pub fn push_digit(&mut self, c: char) {
        if !c.is_ascii_digit() || self.digits[self.focus].is_some() {
            return;
        }

        self.digits[self.focus] = Some(c);
        if self.focus < PIN_LEN - 1 {
            self.focus += 1;
        }
    }

    /// Backspace: clear the focused cell, or step left if it is empty
    pub fn backspace(&mut self) {
        if self.digits[self.focus].is_none() {
            if self.focus > 0 {
                self.focus -= 1;
            }
        } else {
            self.digits[self.focus] = None;
        }
    }

    /// Move focus one cell left
    pub fn move_left(&mut self) {
        if self.focus > 0 {
            self.focus -= 1;
        }
    }

    /// Move focus one cell right
    pub fn move_right(&mut self) {
        if self.focus < PIN_LEN - 1 {
            self.focus += 1;
        }
    }

    /// Clear every cell and refocus the first
    pub fn clear(&mut self) {
        self.digits = [None; PIN_LEN];
        self.focus = 0;
    }
}

impl Default for PinEntry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(code: &str) -> PinEntry {
        let mut entry = PinEntry::new();
        for c in code.chars() {
            entry.push_digit(c);
        }
        entry
    }

    #[test]
    fn test_digits_advance_focus() {
        let mut entry = PinEntry::new();
        entry.push_digit('1');
        assert_eq!(entry.focus(), 1);
        entry.push_digit('2');
        entry.push_digit('3');
        assert_eq!(entry.focus(), 3);
        assert!(!entry.is_complete());
    }

    #[test]
    fn test_last_digit_does_not_focus_past_end() {
        let entry = filled("1234");
        assert!(entry.is_complete());
        assert_eq!(entry.focus(), PIN_LEN - 1);
        assert_eq!(entry.code(), "1234");
    }

    #[test]
    fn test_non_digit_ignored() {
        let mut entry = PinEntry::new();
        entry.push_digit('x');
        entry.push_digit(' ');
        assert_eq!(entry.code(), "");
        assert_eq!(entry.focus(), 0);
    }

    #[test]
    fn test_typing_into_filled_cell_ignored() {
        let mut entry = filled("1234");
        entry.push_digit('9');
        assert_eq!(entry.code(), "1234");
    }

    #[test]
    fn test_backspace_clears_in_place() {
        let mut entry = filled("12");
        // focus sits on the empty third cell; first backspace steps left
        entry.backspace();
        assert_eq!(entry.focus(), 1);
        assert_eq!(entry.code(), "12");

        entry.backspace();
        assert_eq!(entry.code(), "1");
        assert_eq!(entry.focus(), 1);
    }

    #[test]
    fn test_backspace_on_first_empty_cell_is_noop() {
        let mut entry = PinEntry::new();
        entry.backspace();
        assert_eq!(entry.focus(), 0);
        assert_eq!(entry.code(), "");
    }

    #[test]
    fn test_arrow_movement_bounds() {
        let mut entry = PinEntry::new();
        entry.move_left();
        assert_eq!(entry.focus(), 0);

        entry.move_right();
        entry.move_right();
        entry.move_right();
        entry.move_right();
        assert_eq!(entry.focus(), PIN_LEN - 1);
    }

    #[test]
    fn test_clear_resets_focus() {
        let mut entry = filled("1234");
        entry.clear();
        assert_eq!(entry.focus(), 0);
        assert!(!entry.is_complete());
        assert_eq!(entry.digits(), &[None; PIN_LEN]);
    }
}
