use crate::interfaces::racegame_interface::LaneState;
use eframe::egui;
use std::collections::BTreeMap;

pub const LANE_HEIGHT: f32 = 40.0;
pub const LABEL_WIDTH: f32 = 90.0;
pub const CAR_RADIUS: f32 = 12.0;
const FINISH_MARGIN: f32 = 16.0;

/// get_car_x returns the horizontal pixel coordinate of a car for a position fraction within
/// [0.0, 1.0]. The car touches the finish line at a fraction of 1.0.
pub fn get_car_x(track_left: f32, track_right: f32, position_frac: f32) -> f32 {
    let frac = position_frac.max(0.0).min(1.0);
    track_left + CAR_RADIUS + frac * (track_right - track_left - 2.0 * CAR_RADIUS)
}

/// draw_lanes draws one lane per participant including label, finish line, and car. The cars
/// move to their new positions within the given animation time.
pub fn draw_lanes(
    ui: &mut egui::Ui,
    lanes: &BTreeMap<u32, LaneState>,
    animation_time: f32,
) -> egui::Response {
    let size = egui::vec2(
        ui.available_width(),
        LANE_HEIGHT * lanes.len().max(1) as f32,
    );
    let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
    let rect = response.rect;

    let track_left = rect.left() + LABEL_WIDTH;
    let track_right = rect.right() - FINISH_MARGIN;

    if lanes.is_empty() {
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "Select the participants and the score to win, then start the race",
            egui::FontId::proportional(14.0),
            egui::Color32::GRAY,
        );
        return response;
    }

    for (i, (participant_id, lane)) in lanes.iter().enumerate() {
        let y_top = rect.top() + i as f32 * LANE_HEIGHT;
        let y_mid = y_top + 0.5 * LANE_HEIGHT;
        let color = egui::Color32::from_rgb(lane.color.r, lane.color.g, lane.color.b);

        // label
        painter.text(
            egui::pos2(rect.left() + 6.0, y_mid),
            egui::Align2::LEFT_CENTER,
            &lane.label,
            egui::FontId::proportional(14.0),
            egui::Color32::WHITE,
        );

        // lane
        painter.rect_filled(
            egui::Rect::from_min_max(
                egui::pos2(track_left, y_top + 4.0),
                egui::pos2(track_right, y_top + LANE_HEIGHT - 4.0),
            ),
            4.0,
            egui::Color32::from_gray(45),
        );

        // finish line
        painter.line_segment(
            [
                egui::pos2(track_right, y_top + 2.0),
                egui::pos2(track_right, y_top + LANE_HEIGHT - 2.0),
            ],
            egui::Stroke::new(3.0, egui::Color32::WHITE),
        );

        // car (animated with a fixed duration, independent of the pacing of the race)
        let position_frac = ui.ctx().animate_value_with_time(
            egui::Id::new(("car", *participant_id)),
            (lane.position_pct / 100.0) as f32,
            animation_time,
        );
        let car_pos = egui::pos2(get_car_x(track_left, track_right, position_frac), y_mid);

        painter.circle_filled(car_pos, CAR_RADIUS, color);
        painter.text(
            car_pos,
            egui::Align2::CENTER_CENTER,
            participant_id.to_string(),
            egui::FontId::proportional(12.0),
            egui::Color32::BLACK,
        );
    }

    response
}
