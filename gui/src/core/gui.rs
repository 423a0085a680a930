use crate::core::lanes::draw_lanes;
use crate::interfaces::racegame_interface::RacegameInterface;
use eframe::egui;
use helpers::buffer::RingBuffer;
use racegame::core::advantage::draw_seed;
use racegame::pre::check_sim_opts_pars::check_sim_pars;
use racegame::pre::read_sim_pars::SimPars;
use std::time::Instant;

#[derive(Debug)]
pub struct RacePlot {
    pub racegame_interface: RacegameInterface,
    pub sim_pars: SimPars,
    pub seed: Option<u64>,
    pub turn_pacing_ms: u64,
    pub error_msg: Option<String>,
    pub prev_update: Instant,
    pub prev_update_durations: RingBuffer<u32>,
}

impl RacePlot {
    /// The form is prefilled with the given parameters. If a seed is given, every race started from
    /// the GUI replays the same advantages.
    pub fn new(sim_pars: SimPars, seed: Option<u64>, turn_pacing_ms: u64) -> anyhow::Result<RacePlot> {
        check_sim_pars(&sim_pars)?;

        Ok(RacePlot {
            racegame_interface: RacegameInterface::new(),
            sim_pars,
            seed,
            turn_pacing_ms,
            error_msg: None,
            prev_update: Instant::now(),
            prev_update_durations: RingBuffer::new(10),
        })
    }

    /// The method starts a fresh race with the current form values.
    pub fn start_race(&mut self) {
        let seed = self.seed.unwrap_or_else(draw_seed);

        match self
            .racegame_interface
            .start_race(&self.sim_pars, seed, self.turn_pacing_ms)
        {
            Ok(()) => self.error_msg = None,
            Err(e) => self.error_msg = Some(format!("{:#}", e)),
        }
    }

    pub fn reset_race(&mut self) {
        self.racegame_interface.reset(false);
        self.error_msg = None;
    }

    fn set_form_content(&mut self, ui: &mut egui::Ui) {
        let has_race_started = self.racegame_interface.has_race_started;

        ui.horizontal(|ui| {
            // participant count and score to win cannot be changed during a race
            ui.add_enabled_ui(!has_race_started, |ui| {
                let allowed_participant_counts = self.sim_pars.allowed_participant_counts.to_owned();
                let race_pars = &mut self.sim_pars.race_pars;

                egui::ComboBox::from_label("Participants")
                    .selected_text(race_pars.participant_count.to_string())
                    .show_ui(ui, |ui| {
                        for count in allowed_participant_counts.iter() {
                            ui.selectable_value(
                                &mut race_pars.participant_count,
                                *count,
                                count.to_string(),
                            );
                        }
                    });

                ui.separator();
                ui.label("Score to win:");
                ui.add(egui::DragValue::new(&mut race_pars.target_score).speed(1.0));

                if race_pars.target_score < 1 {
                    race_pars.target_score = 1;
                }
            });

            ui.separator();

            // only one of both buttons is shown
            if !has_race_started {
                if ui.button("Start race").clicked() {
                    self.start_race();
                }
            } else if ui.button("Reset").clicked() {
                self.reset_race();
            }
        });

        if let Some(error_msg) = &self.error_msg {
            ui.colored_label(egui::Color32::RED, error_msg);
        }
    }

    fn set_ranking_content(&self, ui: &mut egui::Ui) {
        let race_result = match &self.racegame_interface.race_result {
            Some(race_result) => race_result,
            None => return,
        };

        ui.heading(format!("{} wins!", race_result.winner.label()));
        ui.label(format!(
            "{} turns in {} rounds",
            race_result.tot_no_turns, race_result.tot_no_rounds
        ));

        egui::Grid::new("ranking_table")
            .striped(true)
            .show(ui, |ui| {
                ui.strong("Participant");
                ui.strong("Score");
                ui.end_row();

                for participant in race_result.display_rows().iter() {
                    ui.label(participant.id.to_string());
                    ui.label(participant.score.to_string());
                    ui.end_row();
                }
            });
    }

    fn get_update_frequency_text(&mut self) -> String {
        // calculate current UI update duration, append it to the buffer, and set update time
        self.prev_update_durations
            .push(self.prev_update.elapsed().as_millis() as u32);
        self.prev_update = Instant::now();

        format_update_frequency(&self.prev_update_durations)
    }

    pub fn set_ui_content(&mut self, ui: &mut egui::Ui) {
        let animation_time = self.turn_pacing_ms as f32 / 1000.0;

        egui::Frame::dark_canvas(ui.style()).show(ui, |ui| {
            draw_lanes(ui, &self.racegame_interface.lanes, animation_time);
        });

        ui.add_space(8.0);
        self.set_ranking_content(ui);

        ui.add_space(8.0);
        let update_frequency_text = self.get_update_frequency_text();
        ui.small(update_frequency_text);
    }
}

/// format_update_frequency creates the GUI update frequency line from the latest update durations
/// in ms (averaged frequency and duration of the last update).
pub fn format_update_frequency(update_durations: &RingBuffer<u32>) -> String {
    match (update_durations.get_avg(), update_durations.latest()) {
        (Some(avg), Some(latest)) if avg > 0.0 => format!(
            "GUI update frequency: {:.0} Hz (last update {} ms)",
            1000.0 / avg,
            latest
        ),
        _ => String::from("GUI update frequency: -"),
    }
}

impl eframe::App for RacePlot {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // update race interface
        self.racegame_interface.update();

        // update UI content
        egui::TopBottomPanel::top("race_form").show(ctx, |ui| {
            self.set_form_content(ui);
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            self.set_ui_content(ui);
        });

        // request repaint of the UI
        ctx.request_repaint();
    }
}
