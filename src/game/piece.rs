use super::board::Cell;

/// The two playable identities. `Cell::Empty` has no piece counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    Player,
    Ai,
}

impl Piece {
    /// Get the other piece
    pub fn other(self) -> Piece {
        match self {
            Piece::Player => Piece::Ai,
            Piece::Ai => Piece::Player,
        }
    }

    /// Convert piece to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Piece::Player => Cell::Player,
            Piece::Ai => Cell::Ai,
        }
    }

    /// Get piece owner name for display
    pub fn name(self) -> &'static str {
        match self {
            Piece::Player => "Player",
            Piece::Ai => "AI",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_piece() {
        assert_eq!(Piece::Player.other(), Piece::Ai);
        assert_eq!(Piece::Ai.other(), Piece::Player);
    }

    #[test]
    fn test_to_cell() {
        assert_eq!(Piece::Player.to_cell(), Cell::Player);
        assert_eq!(Piece::Ai.to_cell(), Cell::Ai);
    }
}
