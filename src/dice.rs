use crate::request::ValidationError;
use rand::Rng;
use std::fmt;

/// Number of sides on every die in a pool.
pub const SIDES: u8 = 10;

/// How a single face contributes to the success count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum FaceKind {
    /// A 1: cancels one success from the pool total.
    One,
    /// 2 through 5: no effect.
    Blank,
    /// 6 through 9: one success.
    Success,
    /// A 10: two successes.
    Critical,
}

/// A single d10 face, always in `1..=10`.
///
/// ```
/// use vtm_dice::dice::{Face, FaceKind};
///
/// let f = Face::new(10).unwrap();
/// assert_eq!(f.kind(), FaceKind::Critical);
/// assert!(Face::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Face(u8);

impl Face {
    pub fn new(value: u8) -> Result<Self, ValidationError> {
        if !(1..=SIDES).contains(&value) {
            return Err(ValidationError::FaceOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Draw a uniformly distributed face from `rng`.
    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.random_range(1..=SIDES))
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub const fn kind(self) -> FaceKind {
        match self.0 {
            1 => FaceKind::One,
            2..=5 => FaceKind::Blank,
            6..=9 => FaceKind::Success,
            _ => FaceKind::Critical,
        }
    }

    /// Successes this face adds before ones are subtracted.
    pub const fn successes(self) -> u32 {
        match self.kind() {
            FaceKind::Success => 1,
            FaceKind::Critical => 2,
            FaceKind::One | FaceKind::Blank => 0,
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Build faces from raw values, rejecting anything outside `1..=10`.
pub fn faces_from_values(values: &[u8]) -> Result<Vec<Face>, ValidationError> {
    values.iter().map(|&v| Face::new(v)).collect()
}

/// Roll `n` independent faces, preserving generation order.
pub fn roll_faces<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<Face> {
    (0..n).map(|_| Face::roll(rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn classification_covers_every_face() {
        let kinds: Vec<FaceKind> = (1..=10).map(|v| Face::new(v).unwrap().kind()).collect();
        assert_eq!(kinds[0], FaceKind::One);
        assert!(kinds[1..5].iter().all(|k| *k == FaceKind::Blank));
        assert!(kinds[5..9].iter().all(|k| *k == FaceKind::Success));
        assert_eq!(kinds[9], FaceKind::Critical);
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        assert!(matches!(Face::new(0), Err(ValidationError::FaceOutOfRange(0))));
        assert!(matches!(Face::new(11), Err(ValidationError::FaceOutOfRange(11))));
        assert!(faces_from_values(&[3, 12]).is_err());
    }

    #[test]
    fn seeded_rolls_are_reproducible_and_in_range() {
        let mut a = ChaCha8Rng::seed_from_u64(7);
        let mut b = ChaCha8Rng::seed_from_u64(7);
        let ra = roll_faces(&mut a, 200);
        let rb = roll_faces(&mut b, 200);
        assert_eq!(ra, rb);
        assert!(ra.iter().all(|f| (1..=10).contains(&f.value())));
    }

    #[test]
    fn every_face_shows_up_eventually() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut seen = [false; 10];
        for f in roll_faces(&mut rng, 1000) {
            seen[usize::from(f.value() - 1)] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
