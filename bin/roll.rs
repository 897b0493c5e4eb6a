use lib::chess::Dice;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of dice rolls.
#[cfg_attr(test, mockall::automock)]
pub trait Roll {
    /// Rolls the die.
    fn roll(&mut self) -> Dice;
}

/// A fair four-sided die.
#[derive(Debug)]
pub struct Die(StdRng);

impl Die {
    /// A die seeded for reproducible rolls, or from the operating system's entropy.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Die(StdRng::seed_from_u64(s)),
            None => Die(StdRng::from_os_rng()),
        }
    }
}

impl Roll for Die {
    fn roll(&mut self) -> Dice {
        Dice::FACES[self.0.random_range(0..Dice::FACES.len())]
    }
}
