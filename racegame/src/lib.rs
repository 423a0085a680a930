pub mod error;

pub mod core {
    pub mod advantage;
    pub mod handle_race;
    pub mod participant;
    pub mod race;
}

pub mod interfaces {
    pub mod gui_interface;
}

pub mod post {
    pub mod race_result;
    pub mod race_stats;
}

pub mod pre {
    pub mod check_sim_opts_pars;
    pub mod read_sim_pars;
    pub mod sim_opts;
}




#[cfg(test)]
mod pre_tests {
    use crate::core::race::RacePars;
    use crate::error::RaceError;
    use crate::pre::check_sim_opts_pars::{check_sim_opts_pars, check_sim_pars};
    use crate::pre::read_sim_pars::{load_sim_pars, read_sim_pars, SimPars};
    use crate::pre::sim_opts::SimOpts;
    use clap::Parser;
    use std::path::Path;

    fn sim_opts() -> SimOpts {
        SimOpts {
            no_sim_runs: 1,
            turn_pacing_ms: 100,
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(check_sim_opts_pars(&sim_opts(), &SimPars::default()).is_ok());
    }
    #[test]
    fn test_no_sim_runs_zero() {
        let opts = SimOpts {
            no_sim_runs: 0,
            ..sim_opts()
        };
        assert!(check_sim_opts_pars(&opts, &SimPars::default()).is_err());
    }
    #[test]
    fn test_gui_requires_single_run() {
        let opts = SimOpts {
            gui: true,
            no_sim_runs: 2,
            ..sim_opts()
        };
        assert!(check_sim_opts_pars(&opts, &SimPars::default()).is_err());
    }
    #[test]
    fn test_turn_pacing_too_large() {
        let opts = SimOpts {
            turn_pacing_ms: 60_000,
            ..sim_opts()
        };
        assert!(check_sim_opts_pars(&opts, &SimPars::default()).is_err());
    }
    #[test]
    fn test_invalid_configuration() {
        let pars = SimPars {
            race_pars: RacePars {
                participant_count: 3,
                target_score: 0,
            },
            ..Default::default()
        };

        let err = check_sim_pars(&pars).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RaceError>(),
            Some(RaceError::InvalidConfiguration {
                field: "target_score",
                ..
            })
        ));
    }
    #[test]
    fn test_participant_count_not_allowed() {
        let pars = SimPars {
            race_pars: RacePars {
                participant_count: 4,
                target_score: 50,
            },
            allowed_participant_counts: vec![2, 3, 5],
            ..Default::default()
        };
        assert!(check_sim_pars(&pars).is_err());
    }
    #[test]
    fn test_allowed_participant_counts_invalid() {
        let pars = SimPars {
            allowed_participant_counts: vec![],
            ..Default::default()
        };
        assert!(check_sim_pars(&pars).is_err());
    }
    #[test]
    fn test_invalid_color() {
        let pars = SimPars {
            colors: vec![String::from("#12345z")],
            ..Default::default()
        };
        assert!(check_sim_pars(&pars).is_err());
    }
    #[test]
    fn test_invalid_advantages() {
        let pars = SimPars {
            advantages: Some(vec![4, 12]),
            ..Default::default()
        };
        assert!(check_sim_pars(&pars).is_err());
    }
    #[test]
    fn test_parse_partial_parameter_file() {
        let pars: SimPars =
            serde_json::from_str(r#"{"race_pars": {"participant_count": 5, "target_score": 40}}"#)
                .unwrap();
        assert_eq!(pars.race_pars.participant_count, 5);
        assert_eq!(pars.race_pars.target_score, 40);
        assert_eq!(pars.allowed_participant_counts, SimPars::default().allowed_participant_counts);
        assert!(pars.advantages.is_none());
    }
    #[test]
    fn test_read_missing_parameter_file() {
        assert!(read_sim_pars(Path::new("/nonexistent/race_pars.json")).is_err());
    }
    #[test]
    fn test_read_parameter_file() {
        let filepath = std::env::temp_dir().join(format!("race_pars_{}.json", std::process::id()));
        std::fs::write(
            &filepath,
            r#"{"race_pars": {"participant_count": 2, "target_score": 30}, "advantages": [3, 4]}"#,
        )
        .unwrap();

        let opts = SimOpts {
            parfile_path: Some(filepath.to_owned()),
            target_score: Some(45),
            ..sim_opts()
        };
        let pars = load_sim_pars(&opts).unwrap();
        std::fs::remove_file(&filepath).unwrap();

        assert_eq!(pars.race_pars.participant_count, 2);
        assert_eq!(pars.race_pars.target_score, 45);
        assert_eq!(pars.advantages, Some(vec![3, 4]));
    }
    #[test]
    fn test_command_line_overrides_defaults() {
        let opts = SimOpts::try_parse_from(&["race-game", "-c", "4", "-t", "50", "--seed", "7"])
            .unwrap();
        assert_eq!(opts.no_sim_runs, 1);
        assert_eq!(opts.turn_pacing_ms, 100);
        assert_eq!(opts.seed, Some(7));

        let pars = load_sim_pars(&opts).unwrap();
        assert_eq!(
            pars.race_pars,
            RacePars {
                participant_count: 4,
                target_score: 50
            }
        );
    }
    #[test]
    fn test_command_line_gui_conflicts_with_debug() {
        assert!(SimOpts::try_parse_from(&["race-game", "--gui", "--debug"]).is_err());
    }
}

#[cfg(test)]
mod post_tests {
    use crate::core::advantage::FixedAdvantages;
    use crate::core::participant::Participant;
    use crate::core::race::{RacePars, RaceState};
    use crate::post::race_result::RaceResult;
    use crate::post::race_stats::RaceStats;
    use approx::assert_ulps_eq;

    fn finished_result() -> RaceResult {
        let pars = RacePars {
            participant_count: 3,
            target_score: 20,
        };
        let mut advantages = FixedAdvantages::new(vec![5, 3, 7, 6, 9, 2, 4, 8, 10]).unwrap();
        let mut state = RaceState::initialize(&pars).unwrap();
        state.advance(&pars, &mut advantages).for_each(drop);
        RaceResult::from_state(&state, pars.target_score).unwrap()
    }

    fn result_with_winner(winner_id: u32, tot_no_turns: u32) -> RaceResult {
        RaceResult {
            target_score: 10,
            winner: Participant {
                id: winner_id,
                score: 10,
            },
            ranking: (1..=3)
                .map(|id| Participant {
                    id,
                    score: if id == winner_id { 10 } else { 0 },
                })
                .collect(),
            tot_no_turns,
            tot_no_rounds: 1,
        }
    }

    #[test]
    fn test_result_of_unfinished_race() {
        let pars = RacePars {
            participant_count: 2,
            target_score: 20,
        };
        let state = RaceState::initialize(&pars).unwrap();
        assert!(RaceResult::from_state(&state, pars.target_score).is_none());
    }
    #[test]
    fn test_display_rows() {
        let race_result = finished_result();
        let ids: Vec<u32> = race_result.display_rows().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }
    #[test]
    fn test_format_ranking() {
        let table = finished_result().format_ranking();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(
            lines[0],
            "winner: Player 2 after 8 turns in 3 rounds (target score 20)"
        );
        assert_eq!(lines[1], "participant, score");
        assert_eq!(lines[2], "          2,    20");
        assert_eq!(lines[4], "          3,     9");
    }
    #[test]
    fn test_write_csv() {
        let filepath = std::env::temp_dir().join(format!("ranking_{}.csv", std::process::id()));
        finished_result().write_csv(&filepath).unwrap();
        let content = std::fs::read_to_string(&filepath).unwrap();
        std::fs::remove_file(&filepath).unwrap();
        assert_eq!(content, "participant,score\n3,9\n1,15\n2,20\n");
    }
    #[test]
    fn test_stats_empty() {
        assert!(RaceStats::from_results(&[]).is_none());
    }
    #[test]
    fn test_stats() {
        let race_results = vec![
            result_with_winner(2, 10),
            result_with_winner(1, 20),
            result_with_winner(2, 30),
            result_with_winner(2, 40),
        ];
        let stats = RaceStats::from_results(&race_results).unwrap();

        assert_eq!(stats.no_races, 4);
        assert_eq!(stats.wins, vec![1, 3, 0]);
        assert_ulps_eq!(stats.avg_no_turns, 25.0);
        assert_ulps_eq!(stats.get_win_share(2), 0.75);
        assert_ulps_eq!(stats.get_win_share(3), 0.0);
        assert_ulps_eq!(stats.get_win_share(9), 0.0);
        assert_eq!(stats.get_most_frequent_winner(), Some(2));
        assert!(stats.format_stats().contains("most frequent winner: Player 2"));
    }
    #[test]
    fn test_stats_skip_invalid_winner() {
        let race_results = vec![result_with_winner(0, 50), result_with_winner(3, 10)];
        let stats = RaceStats::from_results(&race_results).unwrap();

        assert_eq!(stats.no_races, 1);
        assert_eq!(stats.wins, vec![0, 0, 1]);
        assert_ulps_eq!(stats.avg_no_turns, 10.0);

        assert!(RaceStats::from_results(&[result_with_winner(0, 50)]).is_none());
    }
    #[test]
    fn test_stats_draw_prefers_lower_number() {
        let race_results = vec![result_with_winner(3, 5), result_with_winner(1, 5)];
        let stats = RaceStats::from_results(&race_results).unwrap();
        assert_eq!(stats.get_most_frequent_winner(), Some(1));
    }
}
