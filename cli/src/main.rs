mod console;

use anyhow::Context;
use clap::Parser;
use console::ConsoleRenderer;
use gui::core::gui::RacePlot;
use log::info;
use racegame::core::advantage::{create_advantage_source, draw_seed};
use racegame::core::handle_race::handle_race;
use racegame::post::race_result::RaceResult;
use racegame::post::race_stats::RaceStats;
use racegame::pre::check_sim_opts_pars::check_sim_opts_pars;
use racegame::pre::read_sim_pars::{load_sim_pars, SimPars};
use racegame::pre::sim_opts::SimOpts;
use rayon::prelude::*;
use std::cmp::min;
use std::thread;
use std::time::Instant;

// set maximum number of concurrently running jobs in case of running more than a single race
const MAX_NO_CONCURRENT_JOBS: u32 = 200;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // PRE-PROCESSING ------------------------------------------------------------------------------
    // get options from the command line arguments and read the parameters
    let sim_opts: SimOpts = SimOpts::parse();
    let sim_pars = load_sim_pars(&sim_opts)?;

    // check options and parameters
    check_sim_opts_pars(&sim_opts, &sim_pars)?;

    // EXECUTION -----------------------------------------------------------------------------------
    if sim_opts.gui {
        // GUI CASE --------------------------------------------------------------------------------
        // races are started and reset from the GUI (must run in the main thread)
        let gui = RacePlot::new(sim_pars, sim_opts.seed, sim_opts.turn_pacing_ms)?;
        let native_options = eframe::NativeOptions::default();

        eframe::run_native(
            "Race Game",
            native_options,
            Box::new(|_cc| Ok(Box::new(gui))),
        )
        .map_err(|e| anyhow::anyhow!("{}", e))
        .context("Failed to run the GUI!")?;

        return Ok(());
    }

    let seed = sim_opts.seed.unwrap_or_else(draw_seed);

    if sim_opts.no_sim_runs == 1 {
        // SINGLE RACE -----------------------------------------------------------------------------
        info!(
            "Racing {} participants to a score of {} (seed {})",
            sim_pars.race_pars.participant_count, sim_pars.race_pars.target_score, seed
        );

        let race_result = run_console_race(&sim_opts, &sim_pars, seed)?;

        // POST-PROCESSING -------------------------------------------------------------------------
        race_result.print_ranking();

        if let Some(output_path) = &sim_opts.output_path {
            race_result.write_csv(output_path)?;
            info!("Ranking written to {}", output_path.display());
        }
    } else {
        // MULTIPLE RACES --------------------------------------------------------------------------
        info!(
            "Racing {} participants to a score of {} in {} races (base seed {})",
            sim_pars.race_pars.participant_count,
            sim_pars.race_pars.target_score,
            sim_opts.no_sim_runs,
            seed
        );

        let t_start = Instant::now();
        let race_results = run_races_parallel(&sim_opts, &sim_pars, seed)?;
        info!("Execution time (total): {}ms", t_start.elapsed().as_millis());

        // POST-PROCESSING -------------------------------------------------------------------------
        let race_stats = RaceStats::from_results(&race_results)
            .context("No race results available for the statistics!")?;
        race_stats.print_stats();

        if let Some(output_path) = &sim_opts.output_path {
            race_stats.write_csv(output_path)?;
            info!("Win statistics written to {}", output_path.display());
        }
    }

    Ok(())
}

/// run_console_race runs a single race in a separate thread and prints every turn in the main
/// thread.
fn run_console_race(sim_opts: &SimOpts, sim_pars: &SimPars, seed: u64) -> anyhow::Result<RaceResult> {
    let (tx, rx) = flume::unbounded();

    let race_pars = sim_pars.race_pars;
    let colors = sim_pars.colors.to_owned();
    let print_debug = sim_opts.debug;
    let turn_pacing_ms = sim_opts.turn_pacing_ms;
    let mut advantages = create_advantage_source(sim_pars.advantages.as_deref(), seed)?;

    let race_thread = thread::spawn(move || {
        handle_race(
            &race_pars,
            &colors,
            &mut *advantages,
            print_debug,
            Some(&tx),
            None,
            turn_pacing_ms,
        )
    });

    // the channel is closed as soon as the race thread ends
    let mut renderer = ConsoleRenderer::new();

    for event in rx.iter() {
        for line in renderer.render(&event) {
            println!("{}", line);
        }
    }

    race_thread
        .join()
        .map_err(|_| anyhow::anyhow!("Race thread panicked!"))??
        .context("The race was aborted!")
}

/// run_races_parallel runs several races without pacing. Race i uses the seed base_seed + i.
fn run_races_parallel(
    sim_opts: &SimOpts,
    sim_pars: &SimPars,
    base_seed: u64,
) -> anyhow::Result<Vec<RaceResult>> {
    let mut race_results: Vec<RaceResult> = Vec::with_capacity(sim_opts.no_sim_runs as usize);
    let mut no_races_left = sim_opts.no_sim_runs;

    while no_races_left > 0 {
        // calculate number of races to execute in current loop
        let tmp_no_sim_runs = min(no_races_left, MAX_NO_CONCURRENT_JOBS);
        let no_races_done = u64::from(sim_opts.no_sim_runs - no_races_left);

        // simulate the races and save the results
        let tmp_race_results: anyhow::Result<Vec<RaceResult>> = (0..tmp_no_sim_runs)
            .into_par_iter()
            .map(|i| -> anyhow::Result<RaceResult> {
                let seed = base_seed.wrapping_add(no_races_done + u64::from(i));
                let mut advantages =
                    create_advantage_source(sim_pars.advantages.as_deref(), seed)?;

                handle_race(
                    &sim_pars.race_pars,
                    &sim_pars.colors,
                    &mut *advantages,
                    false,
                    None,
                    None,
                    0,
                )?
                .context("The race ended without a result!")
            })
            .collect();
        race_results.extend(tmp_race_results?);

        // reduce remaining races
        no_races_left -= tmp_no_sim_runs;
    }

    Ok(race_results)
}
