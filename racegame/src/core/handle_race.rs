use crate::core::advantage::AdvantageSource;
use crate::core::race::{RacePars, RaceState, TurnUpdate};
use crate::interfaces::gui_interface::{ParticipantInfo, RaceCommand, RaceEvent, RgbColor};
use crate::post::race_result::RaceResult;
use crate::pre::read_sim_pars::DEFAULT_COLORS;
use anyhow::Context;
use flume::{Receiver, RecvTimeoutError, Sender};
use log::{debug, info, warn};
use std::thread::sleep;
use std::time::Duration;

/// Result of waiting for the next turn in a real-time race.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Pacing {
    Continue,
    Reset { hard: bool },
    Disconnected,
}

/// handle_race creates and runs a race on the basis of the inserted parameters, and returns the
/// results for post-processing.
///
/// If a sender is inserted, the race runs in real-time: the pacing delay is inserted before each
/// turn and every turn is sent to the presentation. If a command receiver is inserted as well, a
/// reset command aborts the race at the next pacing boundary. None is returned for aborted races.
/// The race ends directly after the winning turn, a later reset does not affect its result.
pub fn handle_race<A: AdvantageSource + ?Sized>(
    race_pars: &RacePars,
    colors: &[String],
    advantages: &mut A,
    print_debug: bool,
    tx: Option<&Sender<RaceEvent>>,
    rx: Option<&Receiver<RaceCommand>>,
    turn_pacing_ms: u64,
) -> anyhow::Result<Option<RaceResult>> {
    // create the race
    let mut state = RaceState::initialize(race_pars).context("Failed to initialize the race!")?;

    info!(
        "Starting race with {} participants and a target score of {}",
        race_pars.participant_count, race_pars.target_score
    );

    match tx {
        None => {
            // NORMAL SIMULATION -------------------------------------------------------------------
            for update in state.advance(race_pars, advantages) {
                log_turn(&update, print_debug);
            }
        }
        Some(tx) => {
            // REAL-TIME SIMULATION ----------------------------------------------------------------
            tx.send(RaceEvent::Started {
                participants: get_participant_infos(&state, colors)?,
                target_score: race_pars.target_score,
            })
            .context("Failed to send race start to the presentation!")?;

            let turn_pacing = Duration::from_millis(turn_pacing_ms);

            loop {
                match wait_for_turn(rx, turn_pacing) {
                    Pacing::Continue => {}
                    Pacing::Reset { hard } => {
                        warn!("Race aborted by a reset before turn {}", state.tot_no_turns() + 1);
                        state.reset(hard);
                        // the presentation may have dropped its receiver together with the reset
                        if tx.send(RaceEvent::Reset { hard }).is_err() {
                            debug!("Race reset was not delivered to the presentation");
                        }
                        return Ok(None);
                    }
                    Pacing::Disconnected => {
                        warn!("Race aborted, the presentation is no longer available");
                        return Ok(None);
                    }
                }

                let update = match state.advance(race_pars, &mut *advantages).next() {
                    Some(update) => update,
                    None => break,
                };

                log_turn(&update, print_debug);

                let wins = update.wins;

                tx.send(RaceEvent::Moved(update))
                    .context("Failed to send race state to the presentation!")?;

                // no further turn follows the winning one, i.e. no pacing delay and no reset
                if wins {
                    break;
                }
            }
        }
    }

    let race_result = RaceResult::from_state(&state, race_pars.target_score)
        .context("The race ended without a winner!")?;

    info!(
        "{} wins after {} turns in {} rounds",
        race_result.winner.label(),
        race_result.tot_no_turns,
        race_result.tot_no_rounds
    );

    if let Some(tx) = tx {
        tx.send(RaceEvent::Finished(race_result.clone()))
            .context("Failed to send race result to the presentation!")?;
    }

    Ok(Some(race_result))
}

/// get_participant_infos assigns label and car color to every participant. Colors are cycled if
/// there are more participants than colors.
pub fn get_participant_infos(
    state: &RaceState,
    colors: &[String],
) -> anyhow::Result<Vec<ParticipantInfo>> {
    let mut participant_infos = Vec::with_capacity(state.participants().len());

    for (i, participant) in state.participants().iter().enumerate() {
        let color_str = if colors.is_empty() {
            DEFAULT_COLORS[i % DEFAULT_COLORS.len()]
        } else {
            colors[i % colors.len()].as_str()
        };

        // convert css color to a rgb color
        let tmp_color = color_str
            .parse::<css_color_parser::Color>()
            .map_err(|_| anyhow::anyhow!("Invalid color {}", color_str))
            .context("Could not parse participant color!")?;

        participant_infos.push(ParticipantInfo {
            id: participant.id,
            label: participant.label(),
            color: RgbColor {
                r: tmp_color.r,
                g: tmp_color.g,
                b: tmp_color.b,
            },
        });
    }

    Ok(participant_infos)
}

/// wait_for_turn inserts the pacing delay before a turn. If commands can be received, the delay
/// is spent waiting for them.
fn wait_for_turn(rx: Option<&Receiver<RaceCommand>>, turn_pacing: Duration) -> Pacing {
    match rx {
        Some(rx) => match rx.recv_timeout(turn_pacing) {
            Ok(RaceCommand::Reset { hard }) => Pacing::Reset { hard },
            Err(RecvTimeoutError::Timeout) => Pacing::Continue,
            Err(RecvTimeoutError::Disconnected) => Pacing::Disconnected,
        },
        None => {
            if turn_pacing > Duration::from_millis(0) {
                sleep(turn_pacing);
            }
            Pacing::Continue
        }
    }
}

fn log_turn(update: &TurnUpdate, print_debug: bool) {
    debug!(
        "Turn {} (round {}): Player {} advances by {} to {}",
        update.turn, update.round, update.participant_id, update.advantage, update.new_score
    );

    if print_debug {
        println!(
            "DEBUG: Turn {:4} (round {:3}): Player {} +{:2} -> {:5} ({:5.1}%){}",
            update.turn,
            update.round,
            update.participant_id,
            update.advantage,
            update.new_score,
            update.position_pct,
            if update.wins { " WINNER" } else { "" }
        );
    }
}
