use crate::interfaces::gui_interface::TURN_PACING_MS;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser, Clone, Default)]
#[command(
    version = "0.1.0",
    author = "Alexander Heilmeier <alexander.heilmeier@tum.de>",
    name = "RACE-GAME",
    about = "A turn-based car race game written in Rust"
)]
pub struct SimOpts {
    // FLAGS ---------------------------------------------------------------------------------------
    /// Activate debug printing (not usable in case the GUI is activated)
    #[arg(short, long, conflicts_with = "gui")]
    pub debug: bool,

    /// Activate GUI (races are then started and reset from the GUI)
    #[arg(short, long, conflicts_with = "debug")]
    pub gui: bool,

    // OPTIONS -------------------------------------------------------------------------------------
    /// Set number of races (must be one in case the GUI is activated)
    #[arg(short, long, default_value_t = 1)]
    pub no_sim_runs: u32,

    /// Set path to the parameter file (defaults are used if not given)
    #[arg(short, long)]
    pub parfile_path: Option<PathBuf>,

    /// Set number of participants (overrides the parameter file)
    #[arg(short = 'c', long)]
    pub participant_count: Option<u32>,

    /// Set score required to win (overrides the parameter file)
    #[arg(short, long)]
    pub target_score: Option<u32>,

    /// Set seed of the advantage draws to replay a race (a random seed is used if not given)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Set pacing delay in ms before each turn of a single race, 0 disables the pacing
    #[arg(long, default_value_t = TURN_PACING_MS)]
    pub turn_pacing_ms: u64,

    /// Set path of a CSV file the ranking (single race) or win statistics (several races) are
    /// written to
    #[arg(short, long)]
    pub output_path: Option<PathBuf>,
}
