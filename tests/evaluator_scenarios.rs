use vtm_dice::dice::faces_from_values;
use vtm_dice::evaluator::{evaluate, RollOutcome};
use vtm_dice::request::{RollRequest, ValidationError};

fn roll(values: &[u8], difficulty: u32, hunger: u32) -> RollOutcome {
    let req = RollRequest::new(values.len() as u32, difficulty, hunger, None).unwrap();
    RollOutcome::from_faces(req, faces_from_values(values).unwrap()).unwrap()
}

#[test]
fn three_sixes_meet_difficulty_three() {
    let out = roll(&[6, 6, 6], 3, 0);
    assert_eq!(out.regular_successes(), 3);
    assert_eq!(out.ones(), 0);
    assert_eq!(out.successes(), 3);
    assert!(out.is_success());
}

#[test]
fn ones_on_hunger_dice_give_bestial_failure() {
    let out = roll(&[1, 1, 6], 1, 2);
    assert_eq!(out.raw_successes(), 1);
    assert_eq!(out.ones(), 2);
    assert_eq!(out.successes(), 0);
    assert!(!out.is_success());
    assert_eq!(out.hunger_faces(), faces_from_values(&[1, 1]).unwrap().as_slice());
    assert!(out.bestial_failure());
}

#[test]
fn two_tens_fall_short_of_five() {
    let out = roll(&[10, 10, 2], 5, 0);
    assert_eq!(out.raw_successes(), 4);
    assert_eq!(out.ones(), 0);
    assert_eq!(out.successes(), 4);
    assert!(!out.is_success());
    assert!(!out.bestial_failure());
    assert!(!out.bestial_success());
}

#[test]
fn ten_on_hunger_die_gives_bestial_success() {
    let out = roll(&[10, 1, 5], 2, 1);
    assert_eq!(out.raw_successes(), 2);
    assert_eq!(out.ones(), 1);
    assert_eq!(out.successes(), 1);
    assert!(!out.is_success());
    assert_eq!(out.hunger_faces(), faces_from_values(&[10]).unwrap().as_slice());
    assert!(out.bestial_success());
    assert!(!out.bestial_failure());
}

#[test]
fn invalid_arguments_are_rejected() {
    assert_eq!(evaluate(0, 3, 0, None).unwrap_err(), ValidationError::DiceCount);
    assert_eq!(evaluate(5, 0, 0, None).unwrap_err(), ValidationError::Difficulty);
    let err = evaluate(5, 3, 6, None).unwrap_err();
    assert_eq!(err.field(), "hunger");
    let err = evaluate(3, 3, 4, None).unwrap_err();
    assert_eq!(err, ValidationError::HungerExceedsPool { hunger: 4, dice_count: 3 });
}

#[test]
fn title_has_no_effect_on_math() {
    let req = RollRequest::new(3, 2, 1, Some("Blood Surge".into())).unwrap();
    let titled = RollOutcome::from_faces(req, faces_from_values(&[10, 1, 5]).unwrap()).unwrap();
    let plain = roll(&[10, 1, 5], 2, 1);
    assert_eq!(titled.title(), Some("Blood Surge"));
    assert_eq!(titled.successes(), plain.successes());
    assert_eq!(titled.bestial_success(), plain.bestial_success());
}
