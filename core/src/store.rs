use alloc::string::String;

use crate::*;

/// Client-held view of the session.
///
/// Mutated only by the [`Controller`] completion paths and the manual cell
/// edit path.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionStore {
    board: Board,
    status: Option<MoveStatus>,
    suggestion: Option<Suggestion>,
    error: Option<String>,
    in_flight: bool,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn set_board(&mut self, board: Board) {
        self.board = board;
    }

    /// Replaces a single cell, leaving every other cell untouched.
    pub fn set_cell(&mut self, row: usize, col: usize, value: u32) -> Result<()> {
        self.board = self
            .board
            .with_cell(row, col, value)
            .ok_or(GameError::InvalidCoords)?;
        Ok(())
    }

    /// Manual edit from a text field. Anything that is not a non-negative
    /// integer is stored as `0`.
    pub fn edit_cell(&mut self, row: usize, col: usize, text: &str) -> Result<u32> {
        let value = parse_cell(text);
        self.set_cell(row, col, value)?;
        Ok(value)
    }

    pub fn status(&self) -> Option<MoveStatus> {
        self.status
    }

    pub fn set_status(&mut self, status: Option<MoveStatus>) {
        self.status = status;
    }

    pub fn suggestion(&self) -> Option<&Suggestion> {
        self.suggestion.as_ref()
    }

    pub fn set_suggestion(&mut self, suggestion: Option<Suggestion>) {
        self.suggestion = suggestion;
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn set_in_flight(&mut self, in_flight: bool) {
        self.in_flight = in_flight;
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_some_and(MoveStatus::is_terminal)
    }

    /// Reset performed before every remote call.
    pub fn begin_operation(&mut self) {
        self.in_flight = true;
        self.error = None;
        self.status = None;
        self.suggestion = None;
    }
}

pub(crate) fn parse_cell(text: &str) -> u32 {
    text.trim().parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const B1: Board = Board::from_rows([[0, 0, 0, 2], [0, 4, 0, 0], [0, 0, 8, 0], [2048, 0, 0, 0]]);

    #[test]
    fn new_store_is_blank() {
        let store = SessionStore::new();

        assert_eq!(*store.board(), Board::EMPTY);
        assert_eq!(store.status(), None);
        assert_eq!(store.suggestion(), None);
        assert_eq!(store.error(), None);
        assert!(!store.in_flight());
        assert!(!store.is_terminal());
    }

    #[test]
    fn set_board_round_trips() {
        let mut store = SessionStore::new();

        store.set_board(B1);

        assert_eq!(*store.board(), B1);
    }

    #[test]
    fn edit_cell_changes_only_that_cell() {
        let mut store = SessionStore::new();
        store.set_board(B1);

        assert_eq!(store.edit_cell(1, 2, "16"), Ok(16));

        for row in 0..SIZE {
            for col in 0..SIZE {
                let expected = if (row, col) == (1, 2) { 16 } else { B1.get(row, col).unwrap() };
                assert_eq!(store.board().get(row, col), Some(expected));
            }
        }
    }

    #[test]
    fn edit_cell_coerces_garbage_to_zero() {
        let mut store = SessionStore::new();
        store.set_board(B1);

        assert_eq!(store.edit_cell(0, 3, "abc"), Ok(0));
        assert_eq!(store.edit_cell(1, 1, ""), Ok(0));
        assert_eq!(store.edit_cell(2, 2, "-4"), Ok(0));
        assert_eq!(store.edit_cell(3, 0, " 7 "), Ok(7));
        assert_eq!(*store.board(), Board::from_rows([[0; 4], [0; 4], [0; 4], [7, 0, 0, 0]]));
    }

    #[test]
    fn edit_cell_keeps_non_power_of_two_values() {
        let mut store = SessionStore::new();

        assert_eq!(store.edit_cell(0, 0, "3"), Ok(3));
        assert_eq!(store.board().get(0, 0), Some(3));
    }

    #[test]
    fn edit_cell_out_of_range() {
        let mut store = SessionStore::new();

        assert_eq!(store.edit_cell(4, 0, "2"), Err(GameError::InvalidCoords));
        assert_eq!(*store.board(), Board::EMPTY);
    }

    #[test]
    fn terminal_only_for_win_or_lose() {
        let mut store = SessionStore::new();

        store.set_status(Some(MoveStatus::Noop));
        assert!(!store.is_terminal());
        store.set_status(Some(MoveStatus::Win));
        assert!(store.is_terminal());
        store.set_status(Some(MoveStatus::Lose));
        assert!(store.is_terminal());
        store.set_status(None);
        assert!(!store.is_terminal());
    }

    #[test]
    fn begin_operation_clears_transient_fields_but_not_board() {
        let mut store = SessionStore::new();
        store.set_board(B1);
        store.set_status(Some(MoveStatus::Lose));
        store.set_error(Some("boom".into()));
        store.set_suggestion(Some(Suggestion(serde_json::json!({"move": "UP"}))));

        store.begin_operation();

        assert!(store.in_flight());
        assert_eq!(store.status(), None);
        assert_eq!(store.error(), None);
        assert_eq!(store.suggestion(), None);
        assert_eq!(*store.board(), B1);
    }
}
