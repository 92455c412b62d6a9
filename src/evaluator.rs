use crate::dice::{roll_faces, Face, FaceKind};
use crate::request::{RollRequest, ValidationError};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// One die of an evaluated pool, tagged with its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct Die {
    pub index: usize,
    pub face: Face,
    /// True when the die sits in the hunger prefix of the pool.
    pub hunger: bool,
}

/// Classified result of a single roll. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollOutcome {
    request: RollRequest,
    faces: Vec<Face>,
    regular_successes: u32,
    criticals: u32,
    ones: u32,
    bestial_failure: bool,
    bestial_success: bool,
}

impl RollOutcome {
    /// Classify an already generated pool. The first `hunger` faces form the hunger dice.
    ///
    /// ```
    /// use vtm_dice::dice::faces_from_values;
    /// use vtm_dice::evaluator::RollOutcome;
    /// use vtm_dice::request::RollRequest;
    ///
    /// let req = RollRequest::new(3, 2, 1, None).unwrap();
    /// let out = RollOutcome::from_faces(req, faces_from_values(&[10, 1, 5]).unwrap()).unwrap();
    /// assert_eq!(out.successes(), 1);
    /// assert!(!out.is_success());
    /// assert!(out.bestial_success());
    /// assert!(!out.bestial_failure());
    /// ```
    pub fn from_faces(request: RollRequest, faces: Vec<Face>) -> Result<Self, ValidationError> {
        let expected = request.dice_count() as usize;
        if faces.len() != expected {
            return Err(ValidationError::FaceCount { expected, actual: faces.len() });
        }

        let mut regular_successes: u32 = 0;
        let mut criticals: u32 = 0;
        let mut ones: u32 = 0;
        for face in &faces {
            match face.kind() {
                FaceKind::Success => regular_successes += 1,
                FaceKind::Critical => criticals += 1,
                FaceKind::One => ones += 1,
                FaceKind::Blank => {}
            }
        }

        let raw_successes = regular_successes + 2 * criticals;
        let success = raw_successes.saturating_sub(ones) >= request.difficulty();
        let hunger = &faces[..request.hunger() as usize];

        // Both checks run independently; a failed test may set both.
        let bestial = !success && !hunger.is_empty();
        let bestial_failure = bestial && hunger.iter().any(|f| f.kind() == FaceKind::One);
        let bestial_success = bestial && hunger.iter().any(|f| f.kind() == FaceKind::Critical);

        Ok(Self {
            request,
            faces,
            regular_successes,
            criticals,
            ones,
            bestial_failure,
            bestial_success,
        })
    }

    pub fn request(&self) -> &RollRequest {
        &self.request
    }

    pub fn dice_count(&self) -> u32 {
        self.request.dice_count()
    }

    pub fn difficulty(&self) -> u32 {
        self.request.difficulty()
    }

    pub fn hunger(&self) -> u32 {
        self.request.hunger()
    }

    pub fn title(&self) -> Option<&str> {
        self.request.title()
    }

    /// All faces in generation order.
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// The hunger dice: always the first `hunger` faces of the pool.
    pub fn hunger_faces(&self) -> &[Face] {
        &self.faces[..self.request.hunger() as usize]
    }

    pub fn dice(&self) -> impl Iterator<Item = Die> + '_ {
        let hunger = self.request.hunger() as usize;
        self.faces.iter().enumerate().map(move |(index, &face)| Die {
            index,
            face,
            hunger: index < hunger,
        })
    }

    /// Faces showing 6 through 9.
    pub fn regular_successes(&self) -> u32 {
        self.regular_successes
    }

    /// Number of faces showing 10. Each is worth two successes.
    pub fn criticals(&self) -> u32 {
        self.criticals
    }

    /// Number of tens halved, rounded down.
    pub fn critical_pairs(&self) -> u32 {
        self.criticals / 2
    }

    pub fn raw_successes(&self) -> u32 {
        self.regular_successes + 2 * self.criticals
    }

    /// Ones across the whole pool, hunger dice included.
    pub fn ones(&self) -> u32 {
        self.ones
    }

    pub fn successes(&self) -> u32 {
        self.raw_successes().saturating_sub(self.ones)
    }

    pub fn is_success(&self) -> bool {
        self.successes() >= self.request.difficulty()
    }

    pub fn bestial_failure(&self) -> bool {
        self.bestial_failure
    }

    pub fn bestial_success(&self) -> bool {
        self.bestial_success
    }
}

/// Evaluate a roll with the thread-local generator.
///
/// ```
/// use vtm_dice::evaluator::evaluate;
///
/// let out = evaluate(7, 3, 2, Some("Intimidation".to_string())).unwrap();
/// assert_eq!(out.faces().len(), 7);
/// assert_eq!(out.hunger_faces(), &out.faces()[..2]);
/// assert!(evaluate(5, 3, 6, None).is_err());
/// ```
pub fn evaluate(
    dice_count: u32,
    difficulty: u32,
    hunger: u32,
    title: Option<String>,
) -> Result<RollOutcome, ValidationError> {
    let request = RollRequest::new(dice_count, difficulty, hunger, title)?;
    evaluate_with(request, &mut rand::rng())
}

/// Evaluate a roll drawing faces from `rng`.
pub fn evaluate_with<R: Rng + ?Sized>(
    request: RollRequest,
    rng: &mut R,
) -> Result<RollOutcome, ValidationError> {
    let faces = roll_faces(rng, request.dice_count() as usize);
    let outcome = RollOutcome::from_faces(request, faces)?;
    tracing::debug!(
        dice_count = outcome.dice_count(),
        difficulty = outcome.difficulty(),
        hunger = outcome.hunger(),
        successes = outcome.successes(),
        success = outcome.is_success(),
        bestial_failure = outcome.bestial_failure(),
        bestial_success = outcome.bestial_success(),
        "evaluated dice pool"
    );
    Ok(outcome)
}

/// Evaluate with a seeded RNG for reproducibility.
pub fn evaluate_seeded(request: RollRequest, seed: u64) -> Result<RollOutcome, ValidationError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    evaluate_with(request, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::faces_from_values;

    fn outcome(values: &[u8], difficulty: u32, hunger: u32) -> RollOutcome {
        let req = RollRequest::new(values.len() as u32, difficulty, hunger, None).unwrap();
        RollOutcome::from_faces(req, faces_from_values(values).unwrap()).unwrap()
    }

    #[test]
    fn ones_never_push_successes_below_zero() {
        let out = outcome(&[1, 1, 1, 6], 1, 0);
        assert_eq!(out.raw_successes(), 1);
        assert_eq!(out.ones(), 3);
        assert_eq!(out.successes(), 0);
    }

    #[test]
    fn criticals_count_tens_not_pairs() {
        let out = outcome(&[10, 10, 10, 7], 1, 0);
        assert_eq!(out.criticals(), 3);
        assert_eq!(out.critical_pairs(), 1);
        assert_eq!(out.raw_successes(), 7);
    }

    #[test]
    fn ones_in_regular_dice_do_not_trigger_bestial_failure() {
        let out = outcome(&[5, 1, 1], 2, 1);
        assert!(!out.is_success());
        assert!(!out.bestial_failure());
        assert!(!out.bestial_success());
    }

    #[test]
    fn both_bestial_flags_can_be_set() {
        let out = outcome(&[1, 10, 2], 3, 2);
        assert_eq!(out.successes(), 1);
        assert!(out.bestial_failure());
        assert!(out.bestial_success());
    }

    #[test]
    fn hunger_flags_read_only_the_prefix() {
        let out = outcome(&[10, 2, 1, 1], 4, 1);
        assert_eq!(out.successes(), 0);
        assert!(out.bestial_success());
        assert!(!out.bestial_failure());
        assert_eq!(out.faces().len(), 4);
    }

    #[test]
    fn success_clears_bestial_flags() {
        let out = outcome(&[10, 1, 8], 2, 2);
        assert!(out.is_success());
        assert!(!out.bestial_failure());
        assert!(!out.bestial_success());
    }

    #[test]
    fn face_count_must_match_request() {
        let req = RollRequest::new(3, 1, 0, None).unwrap();
        let err = RollOutcome::from_faces(req, faces_from_values(&[6, 6]).unwrap()).unwrap_err();
        assert_eq!(err, ValidationError::FaceCount { expected: 3, actual: 2 });
    }

    #[test]
    fn dice_marks_hunger_prefix() {
        let out = outcome(&[3, 4, 5, 6], 1, 2);
        let flags: Vec<bool> = out.dice().map(|d| d.hunger).collect();
        assert_eq!(flags, vec![true, true, false, false]);
    }

    #[test]
    fn seeded_evaluation_is_deterministic() {
        let req = RollRequest::new(12, 4, 3, None).unwrap();
        let a = evaluate_seeded(req.clone(), 99).unwrap();
        let b = evaluate_seeded(req, 99).unwrap();
        assert_eq!(a, b);
    }
}
