use crate::core::race::TurnUpdate;
use crate::post::race_result::RaceResult;

/// Pacing delay in ms inserted before each turn of a real-time race.
pub const TURN_PACING_MS: u64 = 100;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// * `id` - Participant number
/// * `label` - Lane label, e.g. Player 1
/// * `color` - Color of the participant's car
#[derive(Debug, Clone, PartialEq)]
pub struct ParticipantInfo {
    pub id: u32,
    pub label: String,
    pub color: RgbColor,
}

/// RaceEvent is sent from the race to the presentation.
#[derive(Debug, Clone)]
pub enum RaceEvent {
    Started {
        participants: Vec<ParticipantInfo>,
        target_score: u32,
    },
    Moved(TurnUpdate),
    Finished(RaceResult),
    Reset {
        hard: bool,
    },
}

/// RaceCommand is sent from the presentation to a running race.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RaceCommand {
    Reset { hard: bool },
}
