use crate::core::race::RacePars;
use crate::pre::sim_opts::SimOpts;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::path::Path;

/// Lane colors used if the parameter file does not provide any.
pub const DEFAULT_COLORS: [&str; 8] = [
    "#e6194b", "#3cb44b", "#ffe119", "#4363d8", "#f58231", "#911eb4", "#46f0f0", "#f032e6",
];

/// SimPars is used to store all other parameters.
///
/// * `race_pars` - Participant count and target score of the race
/// * `allowed_participant_counts` - Participant counts that can be selected
/// * `colors` - CSS colors of the participants' cars (cycled if there are more participants)
/// * `advantages` - Optional fixed advantage sequence that replaces the random draws
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct SimPars {
    pub race_pars: RacePars,
    pub allowed_participant_counts: Vec<u32>,
    pub colors: Vec<String>,
    pub advantages: Option<Vec<u32>>,
}

impl Default for SimPars {
    fn default() -> Self {
        SimPars {
            race_pars: RacePars::default(),
            allowed_participant_counts: (1..=8).collect(),
            colors: DEFAULT_COLORS.iter().map(|&c| String::from(c)).collect(),
            advantages: None,
        }
    }
}

/// read_sim_pars reads the JSON file and decodes the JSON string into the simulation parameters
/// struct.
pub fn read_sim_pars(filepath: &Path) -> anyhow::Result<SimPars> {
    // open file
    let fh = OpenOptions::new()
        .read(true)
        .open(filepath)
        .context(format!(
            "Failed to open parameter file {}!",
            filepath.display()
        ))?;

    // read and parse parameter file content
    let pars = serde_json::from_reader(&fh).context(format!(
        "Failed to parse parameter file {}!",
        filepath.display()
    ))?;
    Ok(pars)
}

/// load_sim_pars reads the parameter file if one is given (defaults otherwise) and applies the
/// values set on the command line.
pub fn load_sim_pars(sim_opts: &SimOpts) -> anyhow::Result<SimPars> {
    let mut sim_pars = match &sim_opts.parfile_path {
        Some(filepath) => read_sim_pars(filepath.as_path())?,
        None => SimPars::default(),
    };

    if let Some(participant_count) = sim_opts.participant_count {
        sim_pars.race_pars.participant_count = participant_count;
    }

    if let Some(target_score) = sim_opts.target_score {
        sim_pars.race_pars.target_score = target_score;
    }

    Ok(sim_pars)
}
