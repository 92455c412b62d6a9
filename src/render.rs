//! Text presentation of a [`RollOutcome`].
//!
//! Nothing here feeds back into the evaluation; the TUI and the CLI both
//! render through these helpers.

use crate::dice::FaceKind;
use crate::evaluator::{Die, RollOutcome};

/// Display category of a single die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Marker {
    HungerOne,
    HungerCritical,
    HungerSuccess,
    HungerBlank,
    One,
    Critical,
    Success,
    Blank,
}

impl Marker {
    pub fn for_die(die: Die) -> Self {
        match (die.hunger, die.face.kind()) {
            (true, FaceKind::One) => Marker::HungerOne,
            (true, FaceKind::Critical) => Marker::HungerCritical,
            (true, FaceKind::Success) => Marker::HungerSuccess,
            (true, FaceKind::Blank) => Marker::HungerBlank,
            (false, FaceKind::One) => Marker::One,
            (false, FaceKind::Critical) => Marker::Critical,
            (false, FaceKind::Success) => Marker::Success,
            (false, FaceKind::Blank) => Marker::Blank,
        }
    }

    pub fn symbol(self, glyphs: Glyphs) -> &'static str {
        match glyphs {
            Glyphs::Emoji => match self {
                Marker::HungerOne => "🩸",
                Marker::HungerCritical => "🔥",
                Marker::HungerSuccess => "🩸✅",
                Marker::HungerBlank => "🩸❌",
                Marker::One => "💀",
                Marker::Critical => "⭐",
                Marker::Success => "✅",
                Marker::Blank => "❌",
            },
            Glyphs::Ascii => match self {
                Marker::HungerOne => "H!",
                Marker::HungerCritical => "H*",
                Marker::HungerSuccess => "H+",
                Marker::HungerBlank => "H-",
                Marker::One => "!",
                Marker::Critical => "*",
                Marker::Success => "+",
                Marker::Blank => "-",
            },
        }
    }

    /// Ones and tens are highlighted.
    pub fn is_emphasized(self) -> bool {
        matches!(
            self,
            Marker::HungerOne | Marker::HungerCritical | Marker::One | Marker::Critical
        )
    }
}

/// Symbol set used for die markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Glyphs {
    #[default]
    Emoji,
    Ascii,
}

impl Glyphs {
    pub fn legend(self) -> String {
        let s = |m: Marker| m.symbol(self);
        format!(
            "{} = hunger die | {} = success | {} = failure | {} = one (cancels a success) | {} = critical (2 successes) | {} = hunger critical",
            hunger_tag(self),
            s(Marker::Success),
            s(Marker::Blank),
            s(Marker::One),
            s(Marker::Critical),
            s(Marker::HungerCritical),
        )
    }
}

fn hunger_tag(glyphs: Glyphs) -> &'static str {
    match glyphs {
        Glyphs::Emoji => "🩸",
        Glyphs::Ascii => "H",
    }
}

/// Final classification shown to the player.
///
/// When a failed roll has both a 1 and a 10 among the hunger dice, the
/// bestial failure is shown and [`Verdict::masked_bestial_success`] reports
/// the hidden success so renderers can mention it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Verdict {
    BestialFailure,
    BestialSuccess,
    Success,
    Failure,
}

impl Verdict {
    pub fn of(outcome: &RollOutcome) -> Self {
        if outcome.bestial_failure() {
            Verdict::BestialFailure
        } else if outcome.bestial_success() {
            Verdict::BestialSuccess
        } else if outcome.is_success() {
            Verdict::Success
        } else {
            Verdict::Failure
        }
    }

    pub fn masked_bestial_success(outcome: &RollOutcome) -> bool {
        outcome.bestial_failure() && outcome.bestial_success()
    }

    pub fn headline(self) -> &'static str {
        match self {
            Verdict::BestialFailure => "BESTIAL FAILURE",
            Verdict::BestialSuccess => "BESTIAL SUCCESS",
            Verdict::Success => "SUCCESS",
            Verdict::Failure => "FAILURE",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Verdict::BestialFailure => "Failed the test and rolled a 1 on a hunger die!",
            Verdict::BestialSuccess => "Failed the test but rolled a 10 on a hunger die!",
            Verdict::Success => "Test passed!",
            Verdict::Failure => "Did not reach the required number of successes.",
        }
    }
}

/// Space separated markers with face values, hunger dice first.
pub fn format_dice(outcome: &RollOutcome, glyphs: Glyphs) -> String {
    outcome
        .dice()
        .map(|die| {
            let marker = Marker::for_die(die);
            if marker.is_emphasized() {
                format!("{}[{}]", marker.symbol(glyphs), die.face)
            } else {
                format!("{}{}", marker.symbol(glyphs), die.face)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn plural(n: u32, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

/// Arithmetic behind the success count, or `None` when no die contributed.
///
/// ```
/// use vtm_dice::dice::faces_from_values;
/// use vtm_dice::evaluator::RollOutcome;
/// use vtm_dice::render::breakdown;
/// use vtm_dice::request::RollRequest;
///
/// let req = RollRequest::new(4, 2, 0, None).unwrap();
/// let out = RollOutcome::from_faces(req, faces_from_values(&[7, 10, 1, 3]).unwrap()).unwrap();
/// assert_eq!(
///     breakdown(&out).as_deref(),
///     Some("(1 regular + 1 critical (x2) - 1 one = 3 - 1)")
/// );
/// ```
pub fn breakdown(outcome: &RollOutcome) -> Option<String> {
    let mut gains = Vec::new();
    if outcome.regular_successes() > 0 {
        gains.push(plural(outcome.regular_successes(), "regular", "regular"));
    }
    if outcome.criticals() > 0 {
        gains.push(format!("{} (x2)", plural(outcome.criticals(), "critical", "criticals")));
    }
    let ones = outcome.ones();
    if gains.is_empty() && ones == 0 {
        return None;
    }
    let gains = if gains.is_empty() { String::from("0") } else { gains.join(" + ") };
    if ones > 0 {
        Some(format!(
            "({gains} - {} = {} - {ones})",
            plural(ones, "one", "ones"),
            outcome.raw_successes()
        ))
    } else {
        Some(format!("({gains} = {})", outcome.raw_successes()))
    }
}

pub fn report_title(outcome: &RollOutcome) -> String {
    match outcome.title() {
        Some(t) => format!("{t} - Vampire V5"),
        None => String::from("Roll Result - Vampire V5"),
    }
}

/// Multi-line plain text report of a roll.
pub fn render_report(outcome: &RollOutcome, glyphs: Glyphs) -> String {
    let verdict = Verdict::of(outcome);
    let mut successes =
        format!("Successes: {} of {} needed", outcome.successes(), outcome.difficulty());
    if let Some(b) = breakdown(outcome) {
        successes.push(' ');
        successes.push_str(&b);
    }

    let mut lines = vec![
        report_title(outcome),
        format!(
            "Dice: {}  Difficulty: {}  Hunger: {}",
            outcome.dice_count(),
            outcome.difficulty(),
            outcome.hunger()
        ),
        format!("Results: {}", format_dice(outcome, glyphs)),
        successes,
        format!("{}: {}", verdict.headline(), verdict.description()),
    ];
    if Verdict::masked_bestial_success(outcome) {
        lines.push(String::from("Note: a hunger die also rolled a 10 (bestial success)."));
    }
    lines.push(glyphs.legend());
    lines.join("\n")
}

pub const RULES_HELP: &str = "\
Vampire: The Masquerade 5th edition dice

Commands:
  vtm-dice                                  open the interactive configurator
  vtm-dice roll <dice> <difficulty> [hunger] [title...]
                                            roll immediately
  vtm-dice rules                            show this help

How it works:
  * Successes: 6-9 = 1 success, 10 = 2 successes
  * Ones: each 1 in the pool cancels one success (never below zero)
  * Test: passes when the remaining successes reach the difficulty
  * Hunger: the first N dice of the pool are hunger dice (0-5)

Hunger:
  * Bestial failure: the test failed and a hunger die shows 1
  * Bestial success: the test failed but a hunger die shows 10
  * If both happen, the bestial failure is reported and the success is noted

Limits: dice 1-20, difficulty 1-10, hunger 0-5 and never more than the dice.";
