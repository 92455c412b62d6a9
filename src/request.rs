/// Maximum number of hunger dice a pool may carry.
pub const MAX_HUNGER: u32 = 5;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("dice_count must be greater than 0")]
    DiceCount,
    #[error("difficulty must be greater than 0")]
    Difficulty,
    #[error("hunger must be between 0 and 5, got {0}")]
    Hunger(u32),
    #[error("hunger ({hunger}) cannot exceed dice_count ({dice_count})")]
    HungerExceedsPool { hunger: u32, dice_count: u32 },
    #[error("die face must be between 1 and 10, got {0}")]
    FaceOutOfRange(u8),
    #[error("expected {expected} die faces, got {actual}")]
    FaceCount { expected: usize, actual: usize },
}

impl ValidationError {
    /// Name of the argument that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::DiceCount => "dice_count",
            ValidationError::Difficulty => "difficulty",
            ValidationError::Hunger(_) | ValidationError::HungerExceedsPool { .. } => "hunger",
            ValidationError::FaceOutOfRange(_) | ValidationError::FaceCount { .. } => "faces",
        }
    }
}

/// Validated parameters for one roll.
///
/// ```
/// use vtm_dice::request::{RollRequest, ValidationError};
///
/// let req = RollRequest::new(6, 3, 2, None).unwrap();
/// assert_eq!(req.hunger(), 2);
/// assert_eq!(RollRequest::new(5, 3, 6, None).unwrap_err().field(), "hunger");
/// assert!(matches!(RollRequest::new(0, 3, 0, None), Err(ValidationError::DiceCount)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollRequest {
    dice_count: u32,
    difficulty: u32,
    hunger: u32,
    title: Option<String>,
}

impl RollRequest {
    /// The title is stored as given; callers normalize it beforehand.
    pub fn new(
        dice_count: u32,
        difficulty: u32,
        hunger: u32,
        title: Option<String>,
    ) -> Result<Self, ValidationError> {
        if dice_count == 0 {
            return Err(ValidationError::DiceCount);
        }
        if difficulty == 0 {
            return Err(ValidationError::Difficulty);
        }
        if hunger > MAX_HUNGER {
            return Err(ValidationError::Hunger(hunger));
        }
        if hunger > dice_count {
            return Err(ValidationError::HungerExceedsPool { hunger, dice_count });
        }
        Ok(Self { dice_count, difficulty, hunger, title })
    }

    pub fn dice_count(&self) -> u32 {
        self.dice_count
    }

    pub fn difficulty(&self) -> u32 {
        self.difficulty
    }

    pub fn hunger(&self) -> u32 {
        self.hunger
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preconditions_are_checked_in_order() {
        assert_eq!(RollRequest::new(0, 0, 9, None), Err(ValidationError::DiceCount));
        assert_eq!(RollRequest::new(3, 0, 9, None), Err(ValidationError::Difficulty));
        assert_eq!(RollRequest::new(3, 1, 9, None), Err(ValidationError::Hunger(9)));
        assert_eq!(
            RollRequest::new(3, 1, 4, None),
            Err(ValidationError::HungerExceedsPool { hunger: 4, dice_count: 3 })
        );
    }

    #[test]
    fn boundary_values_are_accepted() {
        let req = RollRequest::new(5, 1, 5, Some("Frenzy".into())).unwrap();
        assert_eq!(req.dice_count(), 5);
        assert_eq!(req.hunger(), 5);
        assert_eq!(req.title(), Some("Frenzy"));
        assert!(RollRequest::new(1, 1, 0, None).is_ok());
    }

    #[test]
    fn errors_name_their_field() {
        assert_eq!(ValidationError::DiceCount.field(), "dice_count");
        assert_eq!(ValidationError::Difficulty.field(), "difficulty");
        assert_eq!(ValidationError::Hunger(6).field(), "hunger");
        assert_eq!(ValidationError::FaceCount { expected: 2, actual: 3 }.field(), "faces");
    }
}
