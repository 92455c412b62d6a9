//! Input bounds enforced before a roll reaches the evaluator.
//!
//! The evaluator only knows its own preconditions. Interactive surfaces add
//! tighter limits (at most 20 dice, difficulty up to 10) and reject anything
//! outside them rather than correcting it.

use crate::request::{RollRequest, ValidationError, MAX_HUNGER};

pub const MAX_DICE: u32 = 20;
pub const MAX_DIFFICULTY: u32 = 10;
pub const MAX_TITLE_LEN: usize = 50;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SurfaceError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfBounds { field: &'static str, value: i64, min: u32, max: u32 },
    #[error("{field} must be a whole number")]
    NotANumber { field: &'static str },
    #[error("title is too long ({0} characters, max 50)")]
    TitleTooLong(usize),
    #[error("session expired; start a new one")]
    SessionExpired,
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

fn bounded(field: &'static str, value: i64, min: u32, max: u32) -> Result<u32, SurfaceError> {
    if value < i64::from(min) || value > i64::from(max) {
        return Err(SurfaceError::OutOfBounds { field, value, min, max });
    }
    Ok(value as u32)
}

/// Check surface limits and build a request.
///
/// ```
/// use vtm_dice::surface::{check_bounds, SurfaceError};
///
/// assert!(check_bounds(20, 10, 5, None).is_ok());
/// assert!(matches!(
///     check_bounds(21, 3, 0, None),
///     Err(SurfaceError::OutOfBounds { field: "dice", .. })
/// ));
/// ```
pub fn check_bounds(
    dice: i64,
    difficulty: i64,
    hunger: i64,
    title: Option<String>,
) -> Result<RollRequest, SurfaceError> {
    let dice = bounded("dice", dice, 1, MAX_DICE)?;
    let difficulty = bounded("difficulty", difficulty, 1, MAX_DIFFICULTY)?;
    let hunger = bounded("hunger", hunger, 0, MAX_HUNGER)?;
    Ok(RollRequest::new(dice, difficulty, hunger, title)?)
}

/// Trim a user supplied title. Blank titles become `None`.
pub fn normalize_title(raw: Option<&str>) -> Result<Option<String>, SurfaceError> {
    let Some(t) = raw.map(str::trim).filter(|t| !t.is_empty()) else {
        return Ok(None);
    };
    let len = t.chars().count();
    if len > MAX_TITLE_LEN {
        return Err(SurfaceError::TitleTooLong(len));
    }
    Ok(Some(t.to_string()))
}

/// Build a request from one-shot command arguments.
///
/// An explicit `title` wins over trailing `words`, which are joined with
/// single spaces.
///
/// ```
/// use vtm_dice::surface::quick_request;
///
/// let words = vec![String::from("Blood"), String::from("Surge")];
/// let req = quick_request(6, 3, 0, None, &words).unwrap();
/// assert_eq!(req.title(), Some("Blood Surge"));
/// let req = quick_request(6, 3, 0, Some("Bite"), &words).unwrap();
/// assert_eq!(req.title(), Some("Bite"));
/// ```
pub fn quick_request(
    dice: i64,
    difficulty: i64,
    hunger: i64,
    title: Option<&str>,
    words: &[String],
) -> Result<RollRequest, SurfaceError> {
    let title = match title {
        Some(t) => normalize_title(Some(t))?,
        None => normalize_title(Some(&words.join(" ")))?,
    };
    check_bounds(dice, difficulty, hunger, title)
}

fn parse_field(field: &'static str, raw: &str) -> Result<i64, SurfaceError> {
    raw.trim().parse::<i64>().map_err(|_| SurfaceError::NotANumber { field })
}

/// Raw text of a manual entry form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManualEntry {
    pub title: String,
    pub dice: String,
    pub difficulty: String,
    pub hunger: String,
}

impl Default for ManualEntry {
    fn default() -> Self {
        Self {
            title: String::new(),
            dice: String::from("5"),
            difficulty: String::from("3"),
            hunger: String::from("0"),
        }
    }
}

impl ManualEntry {
    pub fn parse(&self) -> Result<RollRequest, SurfaceError> {
        let dice = parse_field("dice", &self.dice)?;
        let difficulty = parse_field("difficulty", &self.difficulty)?;
        let hunger = parse_field("hunger", &self.hunger)?;
        let title = normalize_title(Some(&self.title))?;
        check_bounds(dice, difficulty, hunger, title)
    }
}
