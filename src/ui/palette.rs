use rand::Rng;
use ratatui::style::Color;

/// A named piece color offered on the color selection screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceColor {
    pub name: &'static str,
    pub color: Color,
}

pub const PALETTE: [PieceColor; 5] = [
    PieceColor {
        name: "red",
        color: Color::Rgb(255, 0, 0),
    },
    PieceColor {
        name: "yellow",
        color: Color::Rgb(255, 255, 0),
    },
    PieceColor {
        name: "green",
        color: Color::Rgb(0, 255, 0),
    },
    PieceColor {
        name: "blue",
        color: Color::Rgb(100, 180, 255),
    },
    PieceColor {
        name: "purple",
        color: Color::Rgb(160, 32, 240),
    },
];

/// Pick the AI's color uniformly among the palette entries the human did not
/// take. Returns a palette index.
pub fn pick_ai_color<R: Rng>(player_index: usize, rng: &mut R) -> usize {
    let others: Vec<usize> = (0..PALETTE.len()).filter(|&i| i != player_index).collect();
    others[rng.random_range(0..others.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn ai_color_differs_from_player() {
        let mut rng = StdRng::seed_from_u64(3);
        for player in 0..PALETTE.len() {
            for _ in 0..50 {
                assert_ne!(pick_ai_color(player, &mut rng), player);
            }
        }
    }

    #[test]
    fn ai_color_covers_all_others() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = [false; PALETTE.len()];
        for _ in 0..200 {
            seen[pick_ai_color(0, &mut rng)] = true;
        }
        assert_eq!(seen, [false, true, true, true, true]);
    }
}
