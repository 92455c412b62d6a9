use proptest::prelude::*;
use vtm_dice::dice::{faces_from_values, FaceKind};
use vtm_dice::evaluator::{evaluate_seeded, RollOutcome};
use vtm_dice::request::RollRequest;

prop_compose! {
    fn any_pool()(values in prop::collection::vec(1u8..=10u8, 1..=20))
        (hunger in 0u32..=(values.len().min(5) as u32), difficulty in 1u32..=10u32, values in Just(values))
        -> (Vec<u8>, u32, u32) {
        (values, difficulty, hunger)
    }
}

fn classify(values: &[u8], difficulty: u32, hunger: u32) -> RollOutcome {
    let req = RollRequest::new(values.len() as u32, difficulty, hunger, None).unwrap();
    RollOutcome::from_faces(req, faces_from_values(values).unwrap()).unwrap()
}

proptest! {
    #[test]
    fn seeded_rolls_have_valid_shape(dice in 1u32..=20u32, difficulty in 1u32..=10u32, hunger in 0u32..=5u32, seed in any::<u64>()) {
        prop_assume!(hunger <= dice);
        let req = RollRequest::new(dice, difficulty, hunger, None).unwrap();
        let out = evaluate_seeded(req, seed).unwrap();
        prop_assert_eq!(out.faces().len(), dice as usize);
        prop_assert!(out.faces().iter().all(|f| (1..=10).contains(&f.value())));
        prop_assert_eq!(out.hunger_faces(), &out.faces()[..hunger as usize]);
    }

    #[test]
    fn success_arithmetic_holds((values, difficulty, hunger) in any_pool()) {
        let out = classify(&values, difficulty, hunger);
        let ones = values.iter().filter(|&&v| v == 1).count() as u32;
        let tens = values.iter().filter(|&&v| v == 10).count() as u32;
        let regular = values.iter().filter(|&&v| (6..=9).contains(&v)).count() as u32;
        prop_assert_eq!(out.ones(), ones);
        prop_assert_eq!(out.criticals(), tens);
        prop_assert_eq!(out.regular_successes(), regular);
        prop_assert_eq!(out.raw_successes(), regular + 2 * tens);
        prop_assert_eq!(out.successes(), out.raw_successes().saturating_sub(ones));
        prop_assert_eq!(out.is_success(), out.successes() >= difficulty);
    }

    #[test]
    fn bestial_flags_follow_hunger_dice((values, difficulty, hunger) in any_pool()) {
        let out = classify(&values, difficulty, hunger);
        if hunger == 0 || out.is_success() {
            prop_assert!(!out.bestial_failure());
            prop_assert!(!out.bestial_success());
        } else {
            let prefix = &values[..hunger as usize];
            prop_assert_eq!(out.bestial_failure(), prefix.contains(&1));
            prop_assert_eq!(out.bestial_success(), prefix.contains(&10));
        }
    }

    #[test]
    fn hunger_marks_only_the_prefix((values, difficulty, hunger) in any_pool()) {
        let out = classify(&values, difficulty, hunger);
        for die in out.dice() {
            prop_assert_eq!(die.hunger, die.index < hunger as usize);
            prop_assert_eq!(die.face.value(), values[die.index]);
            if die.face.kind() == FaceKind::Critical {
                prop_assert_eq!(die.face.successes(), 2);
            }
        }
    }
}
