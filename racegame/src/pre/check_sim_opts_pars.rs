use crate::core::advantage::check_advantages;
use crate::error::RaceError;
use crate::pre::read_sim_pars::SimPars;
use crate::pre::sim_opts::SimOpts;
use anyhow::Context;

/// Largest accepted pacing delay in ms.
pub const MAX_TURN_PACING_MS: u64 = 10_000;

/// check_sim_opts_pars assures that the inserted options and parameters are within reasonable
/// limits and raises an error if not.
pub fn check_sim_opts_pars(sim_opts: &SimOpts, sim_pars: &SimPars) -> anyhow::Result<()> {
    // PART 1: SIMULATION OPTIONS
    if sim_opts.no_sim_runs < 1 {
        return Err(RaceError::InvalidInput).context(format!(
            "no_sim_runs must be at least equal to one, but is {}!",
            sim_opts.no_sim_runs
        ));
    }

    if sim_opts.gui && sim_opts.no_sim_runs != 1 {
        return Err(RaceError::InvalidInput)
            .context("If gui is activated, no_sim_runs must be equal to one!");
    }

    if sim_opts.turn_pacing_ms > MAX_TURN_PACING_MS {
        return Err(RaceError::InvalidInput).context(format!(
            "turn_pacing_ms is {}ms, which is not within the reasonable range of [0, {}]ms!",
            sim_opts.turn_pacing_ms, MAX_TURN_PACING_MS
        ));
    }

    // PART 2: SIMULATION PARAMETERS
    check_sim_pars(sim_pars)
}

/// check_sim_pars checks the parameters on their own, the GUI uses it for every race started from
/// the form.
pub fn check_sim_pars(sim_pars: &SimPars) -> anyhow::Result<()> {
    // RACE ----------------------------------------------------------------------------------------
    sim_pars
        .race_pars
        .validate()
        .context("The race configuration is invalid!")?;

    if sim_pars.allowed_participant_counts.is_empty()
        || sim_pars.allowed_participant_counts.contains(&0)
    {
        return Err(RaceError::InvalidInput)
            .context("allowed_participant_counts must contain positive values only and not be empty!");
    }

    if !sim_pars
        .allowed_participant_counts
        .contains(&sim_pars.race_pars.participant_count)
    {
        return Err(RaceError::InvalidInput).context(format!(
            "participant_count {} is not one of the allowed participant counts {:?}!",
            sim_pars.race_pars.participant_count, sim_pars.allowed_participant_counts
        ));
    }

    // COLORS --------------------------------------------------------------------------------------
    for color in sim_pars.colors.iter() {
        color
            .parse::<css_color_parser::Color>()
            .map_err(|_| RaceError::InvalidInput)
            .context(format!("Could not parse color {}!", color))?;
    }

    // ADVANTAGES ----------------------------------------------------------------------------------
    if let Some(advantages) = &sim_pars.advantages {
        check_advantages(advantages).context("The fixed advantage sequence is invalid!")?;
    }

    Ok(())
}
