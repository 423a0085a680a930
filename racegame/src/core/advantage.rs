use crate::error::RaceError;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Smallest advantage a participant can draw in a turn.
pub const MIN_ADVANTAGE: u32 = 1;
/// Largest advantage a participant can draw in a turn.
pub const MAX_ADVANTAGE: u32 = 10;

/// AdvantageSource provides the advantage that is added to a participant's score in a turn. Every
/// drawn value must be within [MIN_ADVANTAGE, MAX_ADVANTAGE].
pub trait AdvantageSource {
    fn draw(&mut self) -> u32;
}

impl<A: AdvantageSource + ?Sized> AdvantageSource for &mut A {
    fn draw(&mut self) -> u32 {
        (**self).draw()
    }
}

impl<A: AdvantageSource + ?Sized> AdvantageSource for Box<A> {
    fn draw(&mut self) -> u32 {
        (**self).draw()
    }
}

/// RandomAdvantage draws the advantages uniformly from [MIN_ADVANTAGE, MAX_ADVANTAGE].
#[derive(Debug, Clone)]
pub struct RandomAdvantage<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomAdvantage<R> {
    pub fn new(rng: R) -> RandomAdvantage<R> {
        RandomAdvantage { rng }
    }
}

impl RandomAdvantage<ChaCha8Rng> {
    /// Races created with the same seed draw the same advantages.
    pub fn from_seed(seed: u64) -> RandomAdvantage<ChaCha8Rng> {
        RandomAdvantage::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> AdvantageSource for RandomAdvantage<R> {
    fn draw(&mut self) -> u32 {
        self.rng.gen_range(MIN_ADVANTAGE..=MAX_ADVANTAGE)
    }
}

/// FixedAdvantages replays a given advantage sequence. The sequence starts over from the
/// beginning once it is exhausted.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedAdvantages {
    advantages: Vec<u32>,
    idx: usize,
}

impl FixedAdvantages {
    pub fn new(advantages: Vec<u32>) -> Result<FixedAdvantages, RaceError> {
        check_advantages(&advantages)?;
        Ok(FixedAdvantages { advantages, idx: 0 })
    }

    /// The method returns the number of advantages drawn so far.
    pub fn no_drawn(&self) -> usize {
        self.idx
    }
}

impl AdvantageSource for FixedAdvantages {
    fn draw(&mut self) -> u32 {
        let advantage = self.advantages[self.idx % self.advantages.len()];
        self.idx += 1;
        advantage
    }
}

/// check_advantages assures that a fixed advantage sequence is not empty and that all values are
/// within [MIN_ADVANTAGE, MAX_ADVANTAGE].
pub fn check_advantages(advantages: &[u32]) -> Result<(), RaceError> {
    if advantages.is_empty() {
        return Err(RaceError::InvalidAdvantages(String::from(
            "the sequence must contain at least one advantage",
        )));
    }

    if let Some(&advantage) = advantages
        .iter()
        .find(|&&a| !(MIN_ADVANTAGE..=MAX_ADVANTAGE).contains(&a))
    {
        return Err(RaceError::InvalidAdvantages(format!(
            "advantage {} is not within [{}, {}]",
            advantage, MIN_ADVANTAGE, MAX_ADVANTAGE
        )));
    }

    Ok(())
}

/// draw_seed returns a random seed for races that are not replays.
pub fn draw_seed() -> u64 {
    rand::random()
}

/// create_advantage_source returns the fixed advantage sequence if one is given and a seeded
/// random advantage source otherwise.
pub fn create_advantage_source(
    fixed_advantages: Option<&[u32]>,
    seed: u64,
) -> Result<Box<dyn AdvantageSource + Send>, RaceError> {
    match fixed_advantages {
        Some(advantages) => Ok(Box::new(FixedAdvantages::new(advantages.to_vec())?)),
        None => Ok(Box::new(RandomAdvantage::from_seed(seed))),
    }
}
