use crate::evaluator::RollOutcome;
use crate::render::Glyphs;
use crate::session::RollSession;
use crate::surface::{ManualEntry, SurfaceError, MAX_TITLE_LEN};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::{Duration, Instant};

use super::MenuItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Config,
    Result,
    Manual,
    Expired,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    MenuNext,
    MenuPrev,
    MenuInc,
    MenuDec,
    /// Enter on the config screen: edit the title row, roll otherwise.
    MenuActivate,
    Roll,
    TitleOpen,
    ManualOpen,
    ManualNextField,
    ManualPrevField,
    TextChar(char),
    TextBackspace,
    TextSubmit,
    TextCancel,
    Back,
    ToggleHelp,
    NewSession,
}

/// Manual entry form. Fields in order: title, dice, difficulty, hunger.
#[derive(Debug, Clone, Default)]
pub struct ManualForm {
    pub entry: ManualEntry,
    pub focus: usize,
}

impl ManualForm {
    pub const LABELS: [&'static str; 4] = ["Title", "Dice", "Difficulty", "Hunger"];
    const MAX_LEN: [usize; 4] = [MAX_TITLE_LEN, 2, 2, 1];

    pub fn field(&self, idx: usize) -> &str {
        match idx {
            0 => &self.entry.title,
            1 => &self.entry.dice,
            2 => &self.entry.difficulty,
            _ => &self.entry.hunger,
        }
    }

    fn field_mut(&mut self) -> &mut String {
        match self.focus {
            0 => &mut self.entry.title,
            1 => &mut self.entry.dice,
            2 => &mut self.entry.difficulty,
            _ => &mut self.entry.hunger,
        }
    }

    fn push(&mut self, c: char) {
        let max = Self::MAX_LEN[self.focus % Self::MAX_LEN.len()];
        let buf = self.field_mut();
        if buf.chars().count() < max {
            buf.push(c);
        }
    }

    fn backspace(&mut self) {
        self.field_mut().pop();
    }

    fn next(&mut self) {
        self.focus = (self.focus + 1) % Self::LABELS.len();
    }

    fn prev(&mut self) {
        self.focus = (self.focus + Self::LABELS.len() - 1) % Self::LABELS.len();
    }
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    pub session: RollSession,
    pub menu_index: usize,
    pub glyphs: Glyphs,
    last_outcome: Option<RollOutcome>,
    title_entry: Option<String>,
    manual: Option<ManualForm>,
    help_open: bool,
    error: Option<String>,
    error_at: Option<Instant>,
    rng: ChaCha8Rng,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(RollSession::DEFAULT_TTL, None, Glyphs::default())
    }
}

impl AppState {
    const ERROR_TTL: Duration = Duration::from_secs(3);

    pub fn new(ttl: Duration, seed: Option<u64>, glyphs: Glyphs) -> Self {
        let rng = match seed {
            Some(v) => ChaCha8Rng::seed_from_u64(v),
            None => {
                let mut seed = [0u8; 32];
                rand::rng().fill_bytes(&mut seed);
                ChaCha8Rng::from_seed(seed)
            }
        };
        Self {
            scene: Scene::Config,
            session: RollSession::new(Instant::now(), ttl),
            menu_index: 0,
            glyphs,
            last_outcome: None,
            title_entry: None,
            manual: None,
            help_open: false,
            error: None,
            error_at: None,
            rng,
        }
    }

    pub fn last_outcome(&self) -> Option<&RollOutcome> {
        self.last_outcome.as_ref()
    }

    pub fn title_entry_active(&self) -> bool {
        self.title_entry.is_some()
    }

    pub fn title_entry_text(&self) -> Option<&str> {
        self.title_entry.as_deref()
    }

    pub fn manual_form(&self) -> Option<&ManualForm> {
        self.manual.as_ref()
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn set_error(&mut self, err: &SurfaceError, now: Instant) {
        if matches!(err, SurfaceError::SessionExpired) {
            self.enter_expired();
            return;
        }
        self.error = Some(err.to_string());
        self.error_at = Some(now);
    }

    fn clear_error(&mut self) {
        self.error = None;
        self.error_at = None;
    }

    pub(super) fn record(&mut self, res: Result<(), SurfaceError>, now: Instant) {
        match res {
            Ok(()) => self.clear_error(),
            Err(err) => self.set_error(&err, now),
        }
    }

    fn enter_expired(&mut self) {
        self.session.expire();
        self.title_entry = None;
        self.manual = None;
        self.help_open = false;
        self.clear_error();
        self.scene = Scene::Expired;
    }

    fn finish_roll(&mut self, res: Result<RollOutcome, SurfaceError>, now: Instant) -> bool {
        match res {
            Ok(outcome) => {
                self.last_outcome = Some(outcome);
                self.clear_error();
                self.scene = Scene::Result;
                true
            }
            Err(err) => {
                self.set_error(&err, now);
                false
            }
        }
    }

    fn roll(&mut self, now: Instant) -> bool {
        let res = self.session.roll_with(&mut self.rng, now);
        self.finish_roll(res, now)
    }

    fn open_title_entry(&mut self) {
        self.title_entry = Some(self.session.title().unwrap_or_default().to_string());
        self.clear_error();
    }

    fn submit_title(&mut self, now: Instant) {
        let Some(buf) = self.title_entry.take() else {
            return;
        };
        if let Err(err) = self.session.set_title(Some(&buf), now) {
            if !matches!(err, SurfaceError::SessionExpired) {
                self.title_entry = Some(buf);
            }
            self.set_error(&err, now);
            return;
        }
        self.clear_error();
    }

    fn submit_manual(&mut self, now: Instant) -> bool {
        let Some(form) = self.manual.as_ref() else {
            return false;
        };
        let entry = form.entry.clone();
        let res = self.session.roll_manual_with(&entry, &mut self.rng, now);
        let rolled = self.finish_roll(res, now);
        if rolled {
            self.manual = None;
        }
        rolled
    }

    fn new_session(&mut self, now: Instant) {
        let ttl = self.session.ttl();
        self.session = RollSession::new(now, ttl);
        self.menu_index = 0;
        self.last_outcome = None;
        self.title_entry = None;
        self.manual = None;
        self.clear_error();
        self.scene = Scene::Config;
    }

    /// Periodic housekeeping: session expiry and stale error messages.
    pub fn on_tick(&mut self, now: Instant) {
        if self.scene != Scene::Expired && self.session.is_expired(now) {
            self.enter_expired();
            return;
        }
        if let Some(at) = self.error_at {
            if now.saturating_duration_since(at) >= Self::ERROR_TTL {
                self.clear_error();
            }
        }
    }

    pub fn handle_input(&mut self, action: InputAction) -> bool {
        self.handle_input_at(action, Instant::now())
    }

    /// Apply an input. Returns true when it produced a new roll.
    pub fn handle_input_at(&mut self, action: InputAction, now: Instant) -> bool {
        if self.scene == Scene::Expired {
            if action == InputAction::NewSession {
                self.new_session(now);
            }
            return false;
        }
        if action == InputAction::ToggleHelp {
            self.help_open = !self.help_open;
            return false;
        }
        if self.title_entry.is_some() {
            match action {
                InputAction::TextChar(c) => {
                    if let Some(buf) = self.title_entry.as_mut() {
                        if buf.chars().count() < MAX_TITLE_LEN {
                            buf.push(c);
                        }
                    }
                }
                InputAction::TextBackspace => {
                    if let Some(buf) = self.title_entry.as_mut() {
                        buf.pop();
                    }
                }
                InputAction::TextSubmit => self.submit_title(now),
                InputAction::TextCancel => self.title_entry = None,
                _ => {}
            }
            return false;
        }
        match action {
            InputAction::MenuNext => {
                if self.scene == Scene::Config {
                    self.menu_next();
                }
                false
            }
            InputAction::MenuPrev => {
                if self.scene == Scene::Config {
                    self.menu_prev();
                }
                false
            }
            InputAction::MenuInc => {
                if self.scene == Scene::Config {
                    self.menu_inc(now);
                }
                false
            }
            InputAction::MenuDec => {
                if self.scene == Scene::Config {
                    self.menu_dec(now);
                }
                false
            }
            InputAction::MenuActivate => {
                if self.scene != Scene::Config {
                    return false;
                }
                if self.menu_item() == MenuItem::Title {
                    self.open_title_entry();
                    false
                } else {
                    self.roll(now)
                }
            }
            InputAction::Roll => {
                if matches!(self.scene, Scene::Config | Scene::Result) {
                    self.roll(now)
                } else {
                    false
                }
            }
            InputAction::TitleOpen => {
                if self.scene == Scene::Config {
                    self.open_title_entry();
                }
                false
            }
            InputAction::ManualOpen => {
                if self.scene == Scene::Config {
                    self.manual = Some(ManualForm::default());
                    self.clear_error();
                    self.scene = Scene::Manual;
                }
                false
            }
            InputAction::ManualNextField => {
                if let Some(form) = self.manual.as_mut() {
                    form.next();
                }
                false
            }
            InputAction::ManualPrevField => {
                if let Some(form) = self.manual.as_mut() {
                    form.prev();
                }
                false
            }
            InputAction::TextChar(c) => {
                if let Some(form) = self.manual.as_mut() {
                    form.push(c);
                }
                false
            }
            InputAction::TextBackspace => {
                if let Some(form) = self.manual.as_mut() {
                    form.backspace();
                }
                false
            }
            InputAction::TextSubmit => {
                if self.scene == Scene::Manual {
                    self.submit_manual(now)
                } else {
                    false
                }
            }
            InputAction::TextCancel | InputAction::Back => {
                self.manual = None;
                self.clear_error();
                self.scene = Scene::Config;
                false
            }
            InputAction::ToggleHelp | InputAction::NewSession => false,
        }
    }
}
