//! Move log in board notation

use serde::{Deserialize, Serialize};

use crate::ai::Action;
use crate::core::types::PlayerId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ply {
    pub player: PlayerId,
    pub action: Action,
    pub notation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub plies: Vec<Ply>,
    pub winner: Option<PlayerId>,
    /// Set when the game ended because a side had nothing to play
    pub forfeit: bool,
}

impl GameRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, player: PlayerId, action: Action) {
        self.plies.push(Ply {
            player,
            action,
            notation: action.to_string(),
        });
    }

    pub fn len(&self) -> usize {
        self.plies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plies.is_empty()
    }

    pub fn fences_placed_by(&self, player: PlayerId) -> usize {
        self.plies
            .iter()
            .filter(|p| p.player == player && matches!(p.action, Action::PlaceFence(_)))
            .count()
    }

    /// Numbered move list, e.g. `1. e8 e2 2. e3h d2`
    pub fn to_notation(&self) -> String {
        self.plies
            .chunks(2)
            .enumerate()
            .map(|(i, pair)| {
                let moves: Vec<&str> = pair.iter().map(|p| p.notation.as_str()).collect();
                format!("{}. {}", i + 1, moves.join(" "))
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Fence, Position};

    #[test]
    fn test_notation_pairs_plies() {
        let mut record = GameRecord::new();
        record.push(PlayerId::One, Action::Move(Position::new(7, 4)));
        record.push(PlayerId::Two, Action::Move(Position::new(1, 4)));
        record.push(PlayerId::One, Action::PlaceFence(Fence::horizontal(2, 4)));
        assert_eq!(record.to_notation(), "1. e8 e2 2. e3h");
        assert_eq!(record.fences_placed_by(PlayerId::One), 1);
        assert_eq!(record.fences_placed_by(PlayerId::Two), 0);
        assert_eq!(record.len(), 3);
    }

    #[test]
    fn test_record_serializes() {
        let mut record = GameRecord::new();
        record.push(PlayerId::One, Action::Move(Position::new(7, 4)));
        record.winner = Some(PlayerId::One);
        let json = serde_json::to_string(&record).unwrap();
        let back: GameRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
