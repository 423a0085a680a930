use flume::{Receiver, Sender};
use log::warn;
use racegame::core::advantage::create_advantage_source;
use racegame::core::handle_race::handle_race;
use racegame::interfaces::gui_interface::{RaceCommand, RaceEvent, RgbColor};
use racegame::post::race_result::RaceResult;
use racegame::pre::check_sim_opts_pars::check_sim_pars;
use racegame::pre::read_sim_pars::SimPars;
use std::collections::BTreeMap;
use std::thread::{self, JoinHandle};

/// * `label` - Lane label, e.g. Player 1
/// * `color` - Color of the participant's car
/// * `score` - Latest score of the participant
/// * `position_pct` - Latest position of the participant within [0.0, 100.0]
#[derive(Debug, Clone, PartialEq)]
pub struct LaneState {
    pub label: String,
    pub color: RgbColor,
    pub score: u32,
    pub position_pct: f64,
}

/// RacegameInterface connects the GUI with the race running in a separate thread. The lanes are
/// kept in a lookup table keyed by participant number.
#[derive(Debug, Default)]
pub struct RacegameInterface {
    rx: Option<Receiver<RaceEvent>>,
    cmd_tx: Option<Sender<RaceCommand>>,
    race_thread: Option<JoinHandle<anyhow::Result<Option<RaceResult>>>>,
    pub lanes: BTreeMap<u32, LaneState>,
    pub target_score: u32,
    pub race_result: Option<RaceResult>,
    pub has_race_started: bool,
}

impl RacegameInterface {
    pub fn new() -> RacegameInterface {
        Default::default()
    }

    /// start_race removes the lanes of a previous race and starts a new real-time race in a
    /// separate thread.
    pub fn start_race(
        &mut self,
        sim_pars: &SimPars,
        seed: u64,
        turn_pacing_ms: u64,
    ) -> anyhow::Result<()> {
        self.reset(true);
        check_sim_pars(sim_pars)?;

        // create channels for communication between race and GUI
        let (tx, rx) = flume::unbounded();
        let (cmd_tx, cmd_rx) = flume::unbounded();

        let race_pars = sim_pars.race_pars;
        let colors = sim_pars.colors.to_owned();
        let mut advantages = create_advantage_source(sim_pars.advantages.as_deref(), seed)?;

        log::info!("Starting race from the GUI with seed {}", seed);

        let race_thread = thread::spawn(move || {
            handle_race(
                &race_pars,
                &colors,
                &mut *advantages,
                false,
                Some(&tx),
                Some(&cmd_rx),
                turn_pacing_ms,
            )
        });

        self.rx = Some(rx);
        self.cmd_tx = Some(cmd_tx);
        self.race_thread = Some(race_thread);
        self.target_score = race_pars.target_score;
        self.has_race_started = true;
        Ok(())
    }

    /// reset aborts a running race (its thread ends at the next pacing boundary) and resets the
    /// lanes. A hard reset removes the lanes, a soft reset moves all cars back to the start.
    pub fn reset(&mut self, hard: bool) {
        if let Some(cmd_tx) = self.cmd_tx.take() {
            // the race thread is gone if the race is already finished
            let _ = cmd_tx.send(RaceCommand::Reset { hard });
        }
        self.rx = None;
        self.race_thread = None;

        if hard {
            self.lanes.clear();
        } else {
            for lane in self.lanes.values_mut() {
                lane.score = 0;
                lane.position_pct = 0.0;
            }
        }

        self.race_result = None;
        self.has_race_started = false;
    }

    /// update applies all race events received since the last call.
    pub fn update(&mut self) {
        let events: Vec<RaceEvent> = match &self.rx {
            Some(rx) => rx.try_iter().collect(),
            None => Vec::new(),
        };

        for event in events {
            self.apply_event(event);
        }

        // report races that ended with an error
        let race_thread_finished = self
            .race_thread
            .as_ref()
            .map_or(false, |race_thread| race_thread.is_finished());

        if race_thread_finished {
            if let Some(race_thread) = self.race_thread.take() {
                match race_thread.join() {
                    Ok(Err(e)) => warn!("Race failed: {:#}", e),
                    Err(_) => warn!("Race thread panicked!"),
                    Ok(Ok(_)) => {}
                }
            }
        }
    }

    pub fn apply_event(&mut self, event: RaceEvent) {
        match event {
            RaceEvent::Started {
                participants,
                target_score,
            } => {
                self.lanes = participants
                    .into_iter()
                    .map(|participant| {
                        (
                            participant.id,
                            LaneState {
                                label: participant.label,
                                color: participant.color,
                                score: 0,
                                position_pct: 0.0,
                            },
                        )
                    })
                    .collect();
                self.target_score = target_score;
            }
            RaceEvent::Moved(update) => {
                if let Some(lane) = self.lanes.get_mut(&update.participant_id) {
                    lane.score = update.new_score;
                    lane.position_pct = update.position_pct;
                } else {
                    warn!("Received turn of unknown participant {}", update.participant_id);
                }
            }
            RaceEvent::Finished(race_result) => {
                self.race_result = Some(race_result);
            }
            RaceEvent::Reset { hard } => {
                if hard {
                    self.lanes.clear();
                }
            }
        }
    }

    pub fn is_race_running(&self) -> bool {
        self.has_race_started && self.race_result.is_none()
    }
}
