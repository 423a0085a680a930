use serde::{Deserialize, Serialize};
use std::cmp::min;

/// * `id` - Participant number (1-based, unique within a race, equal to the lane number)
/// * `score` - Current score, starts at zero and never exceeds the target score of the race
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: u32,
    pub score: u32,
}

impl Participant {
    pub fn new(id: u32) -> Participant {
        Participant { id, score: 0 }
    }

    /// The method adds the advantage of the current turn to the score, clamps the score to the
    /// target score, and returns the new score.
    pub fn advance(&mut self, advantage: u32, target_score: u32) -> u32 {
        self.score = min(self.score.saturating_add(advantage), target_score);
        self.score
    }

    pub fn has_reached(&self, target_score: u32) -> bool {
        self.score >= target_score
    }

    /// The method returns the position of the participant as a percentage of the target score,
    /// i.e. within [0.0, 100.0].
    pub fn get_position_pct(&self, target_score: u32) -> f64 {
        if target_score == 0 {
            return 0.0;
        }
        f64::from(min(self.score, target_score)) / f64::from(target_score) * 100.0
    }

    pub fn reset_score(&mut self) {
        self.score = 0
    }

    pub fn label(&self) -> String {
        format!("Player {}", self.id)
    }
}
