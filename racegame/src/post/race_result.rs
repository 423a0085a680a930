use crate::core::participant::Participant;
use crate::core::race::RaceState;
use anyhow::Context;
use serde::Serialize;
use std::fmt::Write;
use std::path::Path;

/// RaceResult contains all race information that is required for post-processing the results.
///
/// * `target_score` - Target score of the race
/// * `winner` - Participant that reached the target score first
/// * `ranking` - Participants sorted by final score in ascending order (stable)
/// * `tot_no_turns` - Number of turns taken until the winner was determined
/// * `tot_no_rounds` - Number of (partly) played rounds
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RaceResult {
    pub target_score: u32,
    pub winner: Participant,
    pub ranking: Vec<Participant>,
    pub tot_no_turns: u32,
    pub tot_no_rounds: u32,
}

impl RaceResult {
    /// The method creates the result of a finished race. None is returned if the race has no
    /// winner yet.
    pub fn from_state(state: &RaceState, target_score: u32) -> Option<RaceResult> {
        let winner = *state.winner()?;

        Some(RaceResult {
            target_score,
            winner,
            ranking: state.rank(),
            tot_no_turns: state.tot_no_turns(),
            tot_no_rounds: state.cur_round(),
        })
    }

    /// The method returns the rows of the ranking table in display order. Every ranked
    /// participant is inserted at the top of the table, i.e. the highest score is shown first.
    pub fn display_rows(&self) -> Vec<Participant> {
        self.ranking.iter().rev().copied().collect()
    }

    /// format_ranking creates the ranking table as shown to the user.
    pub fn format_ranking(&self) -> String {
        let mut tmp_string = format!(
            "winner: {} after {} turns in {} rounds (target score {})\n",
            self.winner.label(),
            self.tot_no_turns,
            self.tot_no_rounds,
            self.target_score
        );

        tmp_string.push_str("participant, score\n");

        for participant in self.display_rows().iter() {
            // writing into a String cannot fail
            let _ = writeln!(
                &mut tmp_string,
                "{:11}, {:5}",
                participant.id, participant.score
            );
        }

        tmp_string
    }

    /// print_ranking prints the ranking table to the console output.
    pub fn print_ranking(&self) {
        println!("RESULT: Ranking");
        print!("{}", self.format_ranking());
    }

    /// write_csv exports the ranking (ascending by score) to a CSV file.
    pub fn write_csv(&self, filepath: &Path) -> anyhow::Result<()> {
        let mut wtr = csv::Writer::from_path(filepath).context(format!(
            "Failed to create result file {}!",
            filepath.display()
        ))?;

        wtr.write_record(&["participant", "score"])
            .context("Failed to write CSV header!")?;

        for participant in self.ranking.iter() {
            wtr.write_record(&[participant.id.to_string(), participant.score.to_string()])
                .context("Failed to write ranking row!")?;
        }

        wtr.flush().context(format!(
            "Failed to flush result file {}!",
            filepath.display()
        ))?;
        Ok(())
    }
}
