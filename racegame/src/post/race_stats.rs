use crate::post::race_result::RaceResult;
use anyhow::Context;
use helpers::general::argmax;
use std::fmt::Write;
use std::path::Path;

/// RaceStats summarizes the results of several independent races with the same participants.
///
/// * `no_races` - Number of evaluated races
/// * `wins` - Number of wins per participant (index 0 belongs to participant 1)
/// * `avg_no_turns` - Average number of turns until a winner was determined
#[derive(Debug, Clone, PartialEq)]
pub struct RaceStats {
    pub no_races: u32,
    pub wins: Vec<u32>,
    pub avg_no_turns: f64,
}

impl RaceStats {
    /// The method evaluates the race results. None is returned if no result is available. Results
    /// with an invalid winner (participant number 0) are skipped.
    pub fn from_results(race_results: &[RaceResult]) -> Option<RaceStats> {
        let race_results: Vec<&RaceResult> = race_results
            .iter()
            .filter(|race_result| race_result.winner.id > 0)
            .collect();

        if race_results.is_empty() {
            return None;
        }

        let no_participants = race_results
            .iter()
            .map(|race_result| race_result.ranking.len())
            .max()
            .unwrap_or(0);
        let mut wins = vec![0; no_participants];

        for race_result in race_results.iter() {
            // participant numbers start at 1
            let idx = race_result.winner.id as usize - 1;

            if idx >= wins.len() {
                wins.resize(idx + 1, 0);
            }
            wins[idx] += 1;
        }

        let tot_no_turns: u64 = race_results
            .iter()
            .map(|race_result| u64::from(race_result.tot_no_turns))
            .sum();

        Some(RaceStats {
            no_races: race_results.len() as u32,
            wins,
            avg_no_turns: tot_no_turns as f64 / race_results.len() as f64,
        })
    }

    /// The method returns the share of races (within [0.0, 1.0]) won by the given participant.
    pub fn get_win_share(&self, participant_id: u32) -> f64 {
        if participant_id == 0 || self.no_races == 0 {
            return 0.0;
        }

        self.wins
            .get(participant_id as usize - 1)
            .map_or(0.0, |&wins| f64::from(wins) / f64::from(self.no_races))
    }

    /// The method returns the participant with the most wins (the lower number in case of a
    /// draw).
    pub fn get_most_frequent_winner(&self) -> Option<u32> {
        argmax(&self.wins).map(|idx| idx as u32 + 1)
    }

    pub fn format_stats(&self) -> String {
        let mut tmp_string = format!(
            "races: {}, average number of turns: {:.1}\n",
            self.no_races, self.avg_no_turns
        );

        tmp_string.push_str("participant,  wins, share\n");

        for (idx, wins) in self.wins.iter().enumerate() {
            let participant_id = idx as u32 + 1;

            // writing into a String cannot fail
            let _ = writeln!(
                &mut tmp_string,
                "{:11}, {:5}, {:4.1}%",
                participant_id,
                wins,
                self.get_win_share(participant_id) * 100.0
            );
        }

        if let Some(participant_id) = self.get_most_frequent_winner() {
            // writing into a String cannot fail
            let _ = writeln!(
                &mut tmp_string,
                "most frequent winner: Player {}",
                participant_id
            );
        }

        tmp_string
    }

    /// print_stats prints the win statistics to the console output.
    pub fn print_stats(&self) {
        println!("RESULT: Win statistics");
        print!("{}", self.format_stats());
    }

    /// write_csv exports the win statistics to a CSV file.
    pub fn write_csv(&self, filepath: &Path) -> anyhow::Result<()> {
        let mut wtr = csv::Writer::from_path(filepath).context(format!(
            "Failed to create statistics file {}!",
            filepath.display()
        ))?;

        wtr.write_record(&["participant", "wins", "share"])
            .context("Failed to write CSV header!")?;

        for (idx, wins) in self.wins.iter().enumerate() {
            let participant_id = idx as u32 + 1;

            wtr.write_record(&[
                participant_id.to_string(),
                wins.to_string(),
                format!("{:.4}", self.get_win_share(participant_id)),
            ])
            .context("Failed to write statistics row!")?;
        }

        wtr.flush().context(format!(
            "Failed to flush statistics file {}!",
            filepath.display()
        ))?;
        Ok(())
    }
}
