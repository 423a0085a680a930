use crate::core::advantage::AdvantageSource;
use crate::core::participant::Participant;
use crate::error::RaceError;
use helpers::general::argsort;
use serde::{Deserialize, Serialize};

/// * `participant_count` - Number of participants in the race (ids 1..=participant_count)
/// * `target_score` - Score a participant must reach to win the race
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct RacePars {
    pub participant_count: u32,
    pub target_score: u32,
}

impl Default for RacePars {
    fn default() -> Self {
        RacePars {
            participant_count: 3,
            target_score: 100,
        }
    }
}

impl RacePars {
    /// The method rejects non-positive participant counts and target scores.
    pub fn validate(&self) -> Result<(), RaceError> {
        if self.participant_count == 0 {
            return Err(RaceError::InvalidConfiguration {
                field: "participant_count",
                value: self.participant_count,
            });
        }
        if self.target_score == 0 {
            return Err(RaceError::InvalidConfiguration {
                field: "target_score",
                value: self.target_score,
            });
        }
        Ok(())
    }
}

/// TurnUpdate is emitted after every turn.
///
/// * `participant_id` - Participant that took the turn
/// * `advantage` - Advantage drawn in the turn
/// * `new_score` - Score after the turn (clamped to the target score)
/// * `position_pct` - New position of the participant within [0.0, 100.0]
/// * `round` - Current round (1-based)
/// * `turn` - Current turn counted over all rounds (1-based)
/// * `wins` - True if the participant won the race with this turn
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TurnUpdate {
    pub participant_id: u32,
    pub advantage: u32,
    pub new_score: u32,
    pub position_pct: f64,
    pub round: u32,
    pub turn: u32,
    pub wins: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RaceState {
    participants: Vec<Participant>,
    winner: Option<usize>,
    next_idx: usize,
    cur_round: u32,
    tot_no_turns: u32,
}

impl RaceState {
    /// The method creates the participants 1..=participant_count with a score of zero. Invalid
    /// race parameters are rejected before any state is created.
    pub fn initialize(race_pars: &RacePars) -> Result<RaceState, RaceError> {
        race_pars.validate()?;

        Ok(RaceState {
            participants: (1..=race_pars.participant_count)
                .map(Participant::new)
                .collect(),
            winner: None,
            next_idx: 0,
            cur_round: 1,
            tot_no_turns: 0,
        })
    }

    // ---------------------------------------------------------------------------------------------
    // MAIN METHODS --------------------------------------------------------------------------------
    // ---------------------------------------------------------------------------------------------

    /// The method returns a lazy sequence of turns. Execution order of a turn:
    /// 1. Draw the advantage from the advantage source.
    /// 2. Add it to the score of the participant whose turn it is.
    /// 3. Clamp the score to the target score.
    /// 4. Yield the turn update.
    /// 5. If the target score is reached, set the participant as winner and end the sequence
    /// (remaining participants of the round do not take a turn).
    ///
    /// The turn cursor is kept in the race state, i.e. a dropped sequence can be continued by
    /// calling advance again. Once a winner is set, the sequence is empty.
    pub fn advance<'a, A: AdvantageSource + ?Sized>(
        &'a mut self,
        race_pars: &RacePars,
        advantages: &'a mut A,
    ) -> Turns<'a, A> {
        Turns {
            state: self,
            target_score: race_pars.target_score,
            advantages,
        }
    }

    /// The method returns the participants sorted by score in ascending order. The sort is stable,
    /// i.e. participants with equal scores remain in turn order.
    pub fn rank(&self) -> Vec<Participant> {
        let scores: Vec<u32> = self.participants.iter().map(|p| p.score).collect();

        argsort(&scores)
            .into_iter()
            .map(|idx| self.participants[idx])
            .collect()
    }

    /// A hard reset removes all participants (a new race must be initialized afterwards), a soft
    /// reset keeps the participants but sets their scores back to zero. Both clear the winner and
    /// the turn cursor.
    pub fn reset(&mut self, hard: bool) {
        if hard {
            self.participants.clear();
        } else {
            self.participants
                .iter_mut()
                .for_each(|participant| participant.reset_score());
        }

        self.winner = None;
        self.next_idx = 0;
        self.cur_round = 1;
        self.tot_no_turns = 0;
    }

    // ---------------------------------------------------------------------------------------------
    // GETTERS -------------------------------------------------------------------------------------
    // ---------------------------------------------------------------------------------------------

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn winner(&self) -> Option<&Participant> {
        self.winner.map(|idx| &self.participants[idx])
    }

    pub fn is_finished(&self) -> bool {
        self.winner.is_some()
    }

    pub fn tot_no_turns(&self) -> u32 {
        self.tot_no_turns
    }

    /// The method returns the round the next turn belongs to (or the final round once the race is
    /// finished).
    pub fn cur_round(&self) -> u32 {
        self.cur_round
    }
}

/// Turns is the lazy turn sequence returned by RaceState::advance.
pub struct Turns<'a, A: AdvantageSource + ?Sized> {
    state: &'a mut RaceState,
    target_score: u32,
    advantages: &'a mut A,
}

impl<'a, A: AdvantageSource + ?Sized> Iterator for Turns<'a, A> {
    type Item = TurnUpdate;

    fn next(&mut self) -> Option<TurnUpdate> {
        let state = &mut *self.state;

        if state.winner.is_some() || state.participants.is_empty() {
            return None;
        }

        let idx = state.next_idx;
        let advantage = self.advantages.draw();
        let participant = &mut state.participants[idx];
        let new_score = participant.advance(advantage, self.target_score);
        let wins = participant.has_reached(self.target_score);

        state.tot_no_turns += 1;

        let update = TurnUpdate {
            participant_id: participant.id,
            advantage,
            new_score,
            position_pct: participant.get_position_pct(self.target_score),
            round: state.cur_round,
            turn: state.tot_no_turns,
            wins,
        };

        if wins {
            state.winner = Some(idx);
        } else {
            state.next_idx = (idx + 1) % state.participants.len();
            if state.next_idx == 0 {
                state.cur_round += 1;
            }
        }

        Some(update)
    }
}
