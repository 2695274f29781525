use mnemo_core::classify::{classify, Utterance};
use mnemo_core::memory::{Importance, Strength};
use proptest::prelude::*;

proptest! {
    /// Any text ending in `?` classifies as a question, no matter what
    /// precedes the mark.
    #[test]
    fn trailing_question_mark_always_question(text in ".{0,80}") {
        let input = format!("{text}?");
        prop_assert_eq!(classify(&input), Utterance::Question);
    }

    #[test]
    fn importance_always_in_unit_interval(v in -100.0f64..100.0) {
        let i = Importance::new(v);
        prop_assert!((0.0..=1.0).contains(&i.value()));
    }

    #[test]
    fn strength_never_negative_after_any_delta(
        start in 0.0f64..10.0,
        delta in -100.0f64..100.0,
    ) {
        let s = Strength::new(start).apply(delta);
        prop_assert!(s.value() >= 0.0);
    }

    #[test]
    fn importance_blend_stays_bounded(
        a in 0.0f64..1.0,
        b in 0.0f64..1.0,
        w in -2.0f64..2.0,
    ) {
        let blended = Importance::new(a).blend(Importance::new(b), w);
        prop_assert!((0.0..=1.0).contains(&blended.value()));
    }
}
