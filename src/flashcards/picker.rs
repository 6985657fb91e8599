//! Choosing which card `ask` shows next.
//!
//! Every question is drawn uniformly from all cards, with replacement. Past
//! mistakes do not weight the draw.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait TermPicker {
    /// Index into `terms` of the next card to ask, or `None` when there is nothing to ask.
    fn pick(&mut self, terms: &[&str]) -> Option<usize>;
}

pub struct RandomPicker {
    rng: StdRng,
}

impl RandomPicker {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl TermPicker for RandomPicker {
    fn pick(&mut self, terms: &[&str]) -> Option<usize> {
        if terms.is_empty() {
            return None;
        }
        Some(self.rng.random_range(0..terms.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_pool_picks_nothing() {
        assert_eq!(RandomPicker::seeded(7).pick(&[]), None);
    }

    #[test]
    fn picks_stay_in_range_and_repeat() {
        let mut picker = RandomPicker::seeded(42);
        let terms = ["a", "b", "c"];
        let picks: Vec<usize> = (0..200).filter_map(|_| picker.pick(&terms)).collect();
        assert_eq!(picks.len(), 200);
        assert!(picks.iter().all(|&i| i < terms.len()));
        for i in 0..terms.len() {
            assert!(picks.contains(&i));
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let terms = ["a", "b", "c", "d"];
        let mut first = RandomPicker::seeded(9);
        let mut second = RandomPicker::seeded(9);
        for _ in 0..20 {
            assert_eq!(first.pick(&terms), second.pick(&terms));
        }
    }
}
