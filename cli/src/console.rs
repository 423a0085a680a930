use racegame::interfaces::gui_interface::RaceEvent;
use std::collections::BTreeMap;

/// Number of characters of a lane bar between start and finish line.
pub const BAR_WIDTH: usize = 50;

/// format_lane creates a text lane of the given width with the car placed at the given position
/// within [0.0, 100.0].
pub fn format_lane(label: &str, position_pct: f64, bar_width: usize) -> String {
    let frac = (position_pct / 100.0).max(0.0).min(1.0);
    let no_driven = (frac * bar_width as f64).round() as usize;

    format!(
        "{:>10} |{}>{}| {:5.1}%",
        label,
        "=".repeat(no_driven),
        " ".repeat(bar_width - no_driven),
        position_pct
    )
}

/// ConsoleRenderer prints the race events as they arrive. Labels are looked up by participant
/// number.
#[derive(Debug, Default)]
pub struct ConsoleRenderer {
    labels: BTreeMap<u32, String>,
}

impl ConsoleRenderer {
    pub fn new() -> ConsoleRenderer {
        Default::default()
    }

    /// render returns the lines to print for an event.
    pub fn render(&mut self, event: &RaceEvent) -> Vec<String> {
        match event {
            RaceEvent::Started {
                participants,
                target_score,
            } => {
                self.labels = participants
                    .iter()
                    .map(|participant| (participant.id, participant.label.to_owned()))
                    .collect();

                let mut lines = vec![format!(
                    "INFO: {} participants race to a score of {}",
                    participants.len(),
                    target_score
                )];
                lines.extend(
                    self.labels
                        .values()
                        .map(|label| format_lane(label, 0.0, BAR_WIDTH)),
                );
                lines
            }
            RaceEvent::Moved(update) => {
                let label = self
                    .labels
                    .get(&update.participant_id)
                    .cloned()
                    .unwrap_or_else(|| format!("Player {}", update.participant_id));

                let mut line = format_lane(&label, update.position_pct, BAR_WIDTH);
                line.push_str(&format!(" (+{})", update.advantage));
                vec![line]
            }
            RaceEvent::Finished(race_result) => {
                vec![format!("INFO: {} crossed the finish line!", race_result.winner.label())]
            }
            RaceEvent::Reset { .. } => vec![String::from("INFO: Race was reset")],
        }
    }
}

#[cfg(test)]
mod console_tests {
    use super::{format_lane, ConsoleRenderer, BAR_WIDTH};
    use racegame::core::race::TurnUpdate;
    use racegame::interfaces::gui_interface::{ParticipantInfo, RaceEvent, RgbColor};

    #[test]
    fn test_format_lane_start() {
        assert_eq!(format_lane("Player 1", 0.0, 4), "  Player 1 |>    |   0.0%");
    }
    #[test]
    fn test_format_lane_finish() {
        assert_eq!(format_lane("Player 2", 100.0, 4), "  Player 2 |====>| 100.0%");
    }
    #[test]
    fn test_format_lane_half() {
        assert_eq!(format_lane("Player 3", 50.0, 4), "  Player 3 |==>  |  50.0%");
    }
    #[test]
    fn test_render_events() {
        let mut renderer = ConsoleRenderer::new();

        let lines = renderer.render(&RaceEvent::Started {
            participants: vec![ParticipantInfo {
                id: 1,
                label: String::from("Player 1"),
                color: RgbColor::default(),
            }],
            target_score: 10,
        });
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], format_lane("Player 1", 0.0, BAR_WIDTH));

        let lines = renderer.render(&RaceEvent::Moved(TurnUpdate {
            participant_id: 1,
            advantage: 5,
            new_score: 5,
            position_pct: 50.0,
            round: 1,
            turn: 1,
            wins: false,
        }));
        assert_eq!(lines, vec![format!("{} (+5)", format_lane("Player 1", 50.0, BAR_WIDTH))]);
    }
}
