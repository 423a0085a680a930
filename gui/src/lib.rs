pub mod core {
    pub mod gui;
    pub mod lanes;
}

pub mod interfaces {
    pub mod racegame_interface;
}

#[cfg(test)]
mod lanes_tests {
    use crate::core::lanes::{get_car_x, CAR_RADIUS};

    #[test]
    fn test_car_x_start_and_finish() {
        assert_eq!(get_car_x(100.0, 500.0, 0.0), 100.0 + CAR_RADIUS);
        assert_eq!(get_car_x(100.0, 500.0, 1.0), 500.0 - CAR_RADIUS);
    }
    #[test]
    fn test_car_x_clamped() {
        assert_eq!(get_car_x(100.0, 500.0, -0.5), get_car_x(100.0, 500.0, 0.0));
        assert_eq!(get_car_x(100.0, 500.0, 1.5), get_car_x(100.0, 500.0, 1.0));
    }
}
