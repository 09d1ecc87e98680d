use alloc::string::String;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StatusBanner {
    Won,
    Lost,
    NoEffect,
}

impl StatusBanner {
    pub const fn from_status(status: MoveStatus) -> Self {
        match status {
            MoveStatus::Win => Self::Won,
            MoveStatus::Lose => Self::Lost,
            MoveStatus::Noop => Self::NoEffect,
        }
    }

    pub const fn badge_class(self) -> &'static str {
        match self {
            Self::Won => "win",
            Self::Lost => "lose",
            Self::NoEffect => "info",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Won => MoveStatus::Win.as_str(),
            Self::Lost => MoveStatus::Lose.as_str(),
            Self::NoEffect => MoveStatus::Noop.as_str(),
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            Self::Won => "Congratulations, you won!",
            Self::Lost => "Game over, try again.",
            Self::NoEffect => "Invalid move, try a different move.",
        }
    }
}

/// Snapshot of everything the page renders.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionView {
    pub board: Board,
    pub status: Option<StatusBanner>,
    pub suggestion: Option<String>,
    pub error: Option<String>,
    pub busy: bool,
    /// Moves and suggestions would currently be admitted.
    pub accepts_moves: bool,
}

impl SessionView {
    pub fn from_store(store: &SessionStore) -> Self {
        Self {
            board: *store.board(),
            status: store.status().map(StatusBanner::from_status),
            suggestion: store.suggestion().map(Suggestion::to_pretty),
            error: store.error().map(String::from),
            busy: store.in_flight(),
            accepts_moves: !store.in_flight() && !store.is_terminal(),
        }
    }
}

/// Text shown in a board cell; empty cells stay blank.
pub fn tile_label(value: u32) -> String {
    use alloc::string::ToString;
    match value {
        0 => String::new(),
        value => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_of_blank_store_accepts_moves() {
        let view = SessionView::from_store(&SessionStore::new());

        assert_eq!(view.board, Board::EMPTY);
        assert_eq!(view.status, None);
        assert_eq!(view.suggestion, None);
        assert_eq!(view.error, None);
        assert!(!view.busy);
        assert!(view.accepts_moves);
    }

    #[test]
    fn terminal_status_blocks_moves_in_view() {
        let mut store = SessionStore::new();
        store.set_status(Some(MoveStatus::Lose));

        let view = SessionView::from_store(&store);

        assert_eq!(view.status, Some(StatusBanner::Lost));
        assert_eq!(view.status.unwrap().badge_class(), "lose");
        assert!(!view.accepts_moves);
    }

    #[test]
    fn noop_status_is_informational() {
        let mut store = SessionStore::new();
        store.set_status(Some(MoveStatus::Noop));

        let view = SessionView::from_store(&store);

        assert_eq!(view.status, Some(StatusBanner::NoEffect));
        assert_eq!(StatusBanner::NoEffect.label(), "NOOP");
        assert_eq!(StatusBanner::NoEffect.badge_class(), "info");
        assert!(view.accepts_moves);
    }

    #[test]
    fn busy_store_blocks_moves_in_view() {
        let mut store = SessionStore::new();
        store.begin_operation();

        let view = SessionView::from_store(&store);

        assert!(view.busy);
        assert!(!view.accepts_moves);
    }

    #[test]
    fn suggestion_is_pretty_printed() {
        let mut store = SessionStore::new();
        store.set_suggestion(Some(Suggestion(serde_json::json!({"game_analysis": "ok"}))));

        let view = SessionView::from_store(&store);

        assert_eq!(view.suggestion.as_deref(), Some("{\n  \"game_analysis\": \"ok\"\n}"));
    }

    #[test]
    fn empty_tiles_have_no_label() {
        assert_eq!(tile_label(0), "");
        assert_eq!(tile_label(2048), "2048");
    }
}
