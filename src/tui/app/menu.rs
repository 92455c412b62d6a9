use crate::session::Field;
use std::time::Instant;

use super::AppState;

/// Rows of the configuration screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum MenuItem {
    Title,
    Dice,
    Difficulty,
    Hunger,
}

const MENU_ITEMS: [MenuItem; 4] =
    [MenuItem::Title, MenuItem::Dice, MenuItem::Difficulty, MenuItem::Hunger];

impl MenuItem {
    fn display(self, app: &AppState) -> String {
        let s = &app.session;
        match self {
            MenuItem::Title => format!("Title: {}", s.title().unwrap_or("(none)")),
            MenuItem::Dice => format!("Dice: {}", s.dice_count()),
            MenuItem::Difficulty => format!("Difficulty: {}", s.difficulty()),
            MenuItem::Hunger => format!("Hunger: {}", s.hunger()),
        }
    }

    fn field(self) -> Option<Field> {
        match self {
            MenuItem::Title => None,
            MenuItem::Dice => Some(Field::Dice),
            MenuItem::Difficulty => Some(Field::Difficulty),
            MenuItem::Hunger => Some(Field::Hunger),
        }
    }
}

impl AppState {
    pub fn menu_items_display(&self) -> Vec<String> {
        MENU_ITEMS.iter().map(|item| item.display(self)).collect()
    }

    pub fn menu_item(&self) -> MenuItem {
        MENU_ITEMS[self.menu_index % MENU_ITEMS.len()]
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % MENU_ITEMS.len();
    }

    pub fn menu_prev(&mut self) {
        self.menu_index = (self.menu_index + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
    }

    pub(super) fn menu_inc(&mut self, now: Instant) {
        if let Some(field) = self.menu_item().field() {
            let res = self.session.increment(field, now);
            self.record(res, now);
        }
    }

    pub(super) fn menu_dec(&mut self, now: Instant) {
        if let Some(field) = self.menu_item().field() {
            let res = self.session.decrement(field, now);
            self.record(res, now);
        }
    }
}
