use crate::evaluator::{evaluate_with, RollOutcome};
use crate::request::MAX_HUNGER;
use crate::surface::{
    check_bounds, normalize_title, ManualEntry, SurfaceError, MAX_DICE, MAX_DIFFICULTY,
};
use rand::Rng;
use std::time::{Duration, Instant};

/// Adjustable counter of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Field {
    Dice,
    Difficulty,
    Hunger,
}

/// One player's roll configuration, edited step by step and rolled on demand.
///
/// Each accepted interaction pushes the expiry deadline `ttl` into the
/// future; rejected ones leave it where it was. Once expired, every call
/// fails with [`SurfaceError::SessionExpired`].
///
/// ```
/// use std::time::{Duration, Instant};
/// use vtm_dice::session::{Field, RollSession};
///
/// let now = Instant::now();
/// let mut s = RollSession::new(now, RollSession::DEFAULT_TTL);
/// s.increment(Field::Hunger, now).unwrap();
/// assert_eq!((s.dice_count(), s.difficulty(), s.hunger()), (5, 3, 1));
/// assert!(s.is_expired(now + Duration::from_secs(301)));
/// ```
#[derive(Debug, Clone)]
pub struct RollSession {
    dice_count: u32,
    difficulty: u32,
    hunger: u32,
    title: Option<String>,
    ttl: Duration,
    /// `None` when the ttl reaches past what `Instant` can represent.
    deadline: Option<Instant>,
    expired: bool,
}

impl RollSession {
    pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

    pub fn new(now: Instant, ttl: Duration) -> Self {
        Self {
            dice_count: 5,
            difficulty: 3,
            hunger: 0,
            title: None,
            ttl,
            deadline: now.checked_add(ttl),
            expired: false,
        }
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

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Time left before expiry, zero once elapsed.
    pub fn remaining(&self, now: Instant) -> Duration {
        if self.expired {
            return Duration::ZERO;
        }
        match self.deadline {
            Some(deadline) => deadline.saturating_duration_since(now),
            None => Duration::MAX,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        self.expired || self.deadline.is_some_and(|deadline| now >= deadline)
    }

    pub fn expire(&mut self) {
        if !self.expired {
            tracing::debug!("roll session expired");
        }
        self.expired = true;
    }

    fn ensure_live(&mut self, now: Instant) -> Result<(), SurfaceError> {
        if self.is_expired(now) {
            self.expire();
            return Err(SurfaceError::SessionExpired);
        }
        Ok(())
    }

    /// Push the deadline out after an accepted interaction.
    fn refresh(&mut self, now: Instant) {
        self.deadline = now.checked_add(self.ttl);
    }

    pub fn increment(&mut self, field: Field, now: Instant) -> Result<(), SurfaceError> {
        self.ensure_live(now)?;
        match field {
            Field::Dice => {
                if self.dice_count < MAX_DICE {
                    self.dice_count += 1;
                }
            }
            Field::Difficulty => {
                if self.difficulty < MAX_DIFFICULTY {
                    self.difficulty += 1;
                }
            }
            Field::Hunger => {
                if self.hunger < MAX_HUNGER && self.hunger < self.dice_count {
                    self.hunger += 1;
                }
            }
        }
        self.refresh(now);
        Ok(())
    }

    pub fn decrement(&mut self, field: Field, now: Instant) -> Result<(), SurfaceError> {
        self.ensure_live(now)?;
        match field {
            Field::Dice => {
                if self.dice_count > 1 {
                    self.dice_count -= 1;
                    self.hunger = self.hunger.min(self.dice_count);
                }
            }
            Field::Difficulty => {
                if self.difficulty > 1 {
                    self.difficulty -= 1;
                }
            }
            Field::Hunger => {
                self.hunger = self.hunger.saturating_sub(1);
            }
        }
        self.refresh(now);
        Ok(())
    }

    pub fn set_title(&mut self, raw: Option<&str>, now: Instant) -> Result<(), SurfaceError> {
        self.ensure_live(now)?;
        self.title = normalize_title(raw)?;
        self.refresh(now);
        Ok(())
    }

    /// Roll the current configuration.
    pub fn roll_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        now: Instant,
    ) -> Result<RollOutcome, SurfaceError> {
        self.ensure_live(now)?;
        let request = check_bounds(
            i64::from(self.dice_count),
            i64::from(self.difficulty),
            i64::from(self.hunger),
            self.title.clone(),
        )?;
        let outcome = evaluate_with(request, rng)?;
        self.refresh(now);
        tracing::info!(
            dice = self.dice_count,
            difficulty = self.difficulty,
            hunger = self.hunger,
            successes = outcome.successes(),
            "session roll"
        );
        Ok(outcome)
    }

    /// Roll values typed into a manual entry form without changing the counters.
    pub fn roll_manual_with<R: Rng + ?Sized>(
        &mut self,
        entry: &ManualEntry,
        rng: &mut R,
        now: Instant,
    ) -> Result<RollOutcome, SurfaceError> {
        self.ensure_live(now)?;
        let request = entry.parse()?;
        let outcome = evaluate_with(request, rng)?;
        self.refresh(now);
        tracing::info!(
            dice = outcome.dice_count(),
            difficulty = outcome.difficulty(),
            hunger = outcome.hunger(),
            successes = outcome.successes(),
            "manual roll"
        );
        Ok(outcome)
    }
}
