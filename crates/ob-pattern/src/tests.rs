//! Unit tests for ob-pattern.

#[cfg(test)]
mod action_tests {
    use crate::{ActionKind, InputAction, Pattern, PatternError};

    #[test]
    fn zero_duration_rejected() {
        assert!(matches!(InputAction::hold(0), Err(PatternError::ZeroDuration)));
        assert!(matches!(InputAction::release(0), Err(PatternError::ZeroDuration)));
    }

    #[test]
    fn totals() {
        let p = Pattern::new(vec![
            InputAction::release(10).unwrap(),
            InputAction::hold(5).unwrap(),
            InputAction::release(3).unwrap(),
        ]);
        assert_eq!(p.len(), 3);
        assert_eq!(p.total_ticks(), 18);
        assert_eq!(p.hold_ticks(), 5);
    }

    #[test]
    fn kind_parse_and_display() {
        assert_eq!("hold".parse::<ActionKind>().unwrap(), ActionKind::Hold);
        assert_eq!(" release ".parse::<ActionKind>().unwrap(), ActionKind::Release);
        assert!("tap".parse::<ActionKind>().is_err());
        assert_eq!(ActionKind::Hold.to_string(), "hold");
    }
}

#[cfg(test)]
mod cursor_tests {
    use crate::{InputAction, Pattern, PatternCursor};

    /// Drive a fresh cursor for `ticks` ticks and record the pressed states.
    fn timeline(pattern: &Pattern, ticks: usize) -> Vec<bool> {
        let mut cursor = PatternCursor::new();
        (0..ticks)
            .map(|_| {
                cursor = cursor.step(pattern);
                cursor.pressed()
            })
            .collect()
    }

    #[test]
    fn later_actions_include_transition_tick() {
        let p = Pattern::new(vec![
            InputAction::release(2).unwrap(),
            InputAction::hold(3).unwrap(),
            InputAction::release(1).unwrap(),
        ]);
        assert_eq!(
            timeline(&p, 9),
            vec![false, false, true, true, true, true, false, false, false],
        );
    }

    #[test]
    fn spam_rhythm() {
        let p = crate::regular_spam(3, 3, 3).unwrap();
        let rendered: String =
            timeline(&p, 20).into_iter().map(|s| if s { '#' } else { '.' }).collect();
        assert_eq!(rendered, "###....####....####.");
    }

    #[test]
    fn exhausted_pattern_holds_last_state() {
        let p = Pattern::new(vec![
            InputAction::release(1).unwrap(),
            InputAction::hold(2).unwrap(),
        ]);
        let states = timeline(&p, 8);
        assert_eq!(&states[..3], &[false, true, true]);
        assert!(states[3..].iter().all(|&s| s), "last action was a hold: {states:?}");
    }

    #[test]
    fn empty_pattern_never_presses() {
        assert!(timeline(&Pattern::empty(), 10).iter().all(|&s| !s));
    }

    #[test]
    fn step_is_pure() {
        let p = Pattern::new(vec![InputAction::hold(2).unwrap()]);
        let start = PatternCursor::new();
        assert_eq!(start.step(&p), start.step(&p));
        let once = start.step(&p);
        assert_eq!(once.action_index(), 0);
        assert_eq!(once.elapsed_in_action(), 1);
        let twice = once.step(&p);
        assert_eq!(twice.action_index(), 0);
        assert_eq!(twice.elapsed_in_action(), 2);
        assert!(!twice.is_exhausted(&p));
        let thrice = twice.step(&p);
        assert_eq!(thrice.action_index(), 1);
        assert!(thrice.is_exhausted(&p));
        assert!(thrice.pressed(), "past the end the last state persists");
    }
}

#[cfg(test)]
mod generate_tests {
    use ob_core::SimRng;

    use crate::{ActionKind, Archetype, beginner, expert, hold_only, no_input, regular_spam};

    #[test]
    fn beginner_shape() {
        let mut rng = SimRng::new(7);
        let p = beginner(&mut rng, 50);
        assert!(p.len() >= 100, "at least one wait and one hold per cycle");

        let actions = p.actions();
        // The first two actions of every pattern are the cycle's wait and hold.
        assert_eq!(actions[0].kind(), ActionKind::Release);
        assert!((60..=119).contains(&actions[0].duration_ticks()));
        assert_eq!(actions[1].kind(), ActionKind::Hold);
        assert!((1..=15).contains(&actions[1].duration_ticks()));

        for a in actions {
            match a.kind() {
                ActionKind::Hold    => assert!((1..=15).contains(&a.duration_ticks())),
                ActionKind::Release => assert!((3..=119).contains(&a.duration_ticks())),
            }
        }
    }

    #[test]
    fn beginner_sometimes_misses_and_double_taps() {
        let mut rng = SimRng::new(11);
        let p = beginner(&mut rng, 200);
        // 200 cycles with 35% / 25% chances: both extras essentially always occur.
        let double_taps = p
            .actions()
            .windows(2)
            .filter(|w| {
                w[0].kind() == ActionKind::Hold
                    && w[0].duration_ticks() == 2
                    && w[1].kind() == ActionKind::Release
                    && w[1].duration_ticks() == 3
            })
            .count();
        assert!(double_taps > 0);
        assert!(p.len() > 400, "missed-input pauses add extra releases");
    }

    #[test]
    fn expert_is_tight() {
        let mut rng = SimRng::new(3);
        let p = expert(&mut rng, 40);
        assert_eq!(p.len(), 80);
        for pair in p.actions().chunks(2) {
            assert_eq!(pair[0].kind(), ActionKind::Release);
            assert!((22..=28).contains(&pair[0].duration_ticks()));
            assert_eq!(pair[1].kind(), ActionKind::Hold);
            assert!((5..=7).contains(&pair[1].duration_ticks()));
        }
    }

    #[test]
    fn same_seed_same_pattern() {
        let a = beginner(&mut SimRng::new(99), 20);
        let b = beginner(&mut SimRng::new(99), 20);
        assert_eq!(a, b);
    }

    #[test]
    fn monotonous_patterns() {
        let none = no_input(600).unwrap();
        assert_eq!(none.len(), 1);
        assert_eq!(none.hold_ticks(), 0);
        assert_eq!(none.total_ticks(), 600);

        let hold = hold_only(600).unwrap();
        assert_eq!(hold.hold_ticks(), 600);

        let spam = regular_spam(3, 3, 100).unwrap();
        assert_eq!(spam.len(), 200);
        assert_eq!(spam.total_ticks(), 600);
        assert_eq!(spam.actions()[0].kind(), ActionKind::Hold);
    }

    #[test]
    fn monotonous_zero_duration_errors() {
        assert!(no_input(0).is_err());
        assert!(hold_only(0).is_err());
        assert!(regular_spam(0, 3, 10).is_err());
        assert!(regular_spam(3, 0, 10).is_err());
    }

    #[test]
    fn archetype_names() {
        assert_eq!(Archetype::RegularSpam.to_string(), "RegularSpam");
        assert!(Archetype::HoldOnly.is_monotonous());
        assert!(!Archetype::Expert.is_monotonous());
    }
}

#[cfg(test)]
mod loader_tests {
    use std::io::Cursor;

    use crate::{ActionKind, load_patterns_reader};

    const CSV: &str = "\
name,kind,duration_ticks\n\
SlowTap,release,90\n\
Stutter,hold,1\n\
SlowTap,hold,4\n\
Stutter,release,1\n\
";

    #[test]
    fn groups_by_name_in_first_seen_order() {
        let patterns = load_patterns_reader(Cursor::new(CSV)).unwrap();
        assert_eq!(patterns.len(), 2);
        assert_eq!(patterns[0].name, "SlowTap");
        assert_eq!(patterns[0].pattern.total_ticks(), 94);
        assert_eq!(patterns[0].pattern.actions()[1].kind(), ActionKind::Hold);
        assert_eq!(patterns[1].name, "Stutter");
        assert_eq!(patterns[1].pattern.len(), 2);
    }

    #[test]
    fn bad_kind_is_parse_error() {
        let csv = "name,kind,duration_ticks\nX,tap,3\n";
        assert!(load_patterns_reader(Cursor::new(csv)).is_err());
    }

    #[test]
    fn zero_duration_is_parse_error() {
        let csv = "name,kind,duration_ticks\nX,hold,0\n";
        let err = load_patterns_reader(Cursor::new(csv)).unwrap_err();
        assert!(err.to_string().contains("zero-tick"), "{err}");
    }

    #[test]
    fn header_only_yields_nothing() {
        let csv = "name,kind,duration_ticks\n";
        assert!(load_patterns_reader(Cursor::new(csv)).unwrap().is_empty());
    }
}
