use super::Opponent;
use crate::gameplay::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Coin-flip opponent. Cooperates or betrays with equal probability,
/// ignoring everything that happened so far.
pub struct Random(SmallRng);

impl Random {
    /// Reproducible sequence of choices for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl Default for Random {
    fn default() -> Self {
        Self(SmallRng::from_rng(&mut rand::rng()))
    }
}

impl Opponent for Random {
    fn decide(&mut self, _: &Session, _: Seat) -> Choice {
        match self.0.random_bool(0.5) {
            true => Choice::Cooperate,
            false => Choice::Betray,
        }
    }
}

impl std::fmt::Debug for Random {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Random")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw(opponent: &mut Random, n: usize) -> Vec<Choice> {
        let session = Session::default();
        (0..n).map(|_| opponent.decide(&session, Seat::P1)).collect()
    }

    #[test]
    fn same_seed_same_moves() {
        let a = draw(&mut Random::seeded(7), 64);
        let b = draw(&mut Random::seeded(7), 64);
        assert_eq!(a, b);
    }

    #[test]
    fn plays_both_moves() {
        let moves = draw(&mut Random::seeded(11), 256);
        assert!(moves.contains(&Choice::Cooperate));
        assert!(moves.contains(&Choice::Betray));
    }
}
