use crate::Direction;

/// Maps a `KeyboardEvent.key` value to a move.
pub fn key_direction(key: &str) -> Option<Direction> {
    match key {
        "ArrowLeft" => Some(Direction::Left),
        "ArrowRight" => Some(Direction::Right),
        "ArrowUp" => Some(Direction::Up),
        "ArrowDown" => Some(Direction::Down),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_map_one_to_one() {
        assert_eq!(key_direction("ArrowLeft"), Some(Direction::Left));
        assert_eq!(key_direction("ArrowRight"), Some(Direction::Right));
        assert_eq!(key_direction("ArrowUp"), Some(Direction::Up));
        assert_eq!(key_direction("ArrowDown"), Some(Direction::Down));
    }

    #[test]
    fn other_keys_are_ignored() {
        for key in ["a", "Enter", "arrowleft", "Left", " ", ""] {
            assert_eq!(key_direction(key), None);
        }
    }
}
