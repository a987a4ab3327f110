mod common;

use common::{animate, ms, phrases};
use folio::typewriter::{Animator, AnimatorError, Mode, VirtualClock};
use std::sync::Arc;

#[test]
fn two_phrase_timeline() {
    let (clock, animator, _log) = animate(&["AI", "ML"]);
    assert_eq!(animator.current_render().text, "");

    let expected = [
        (100, "A", 0, Mode::Typing),
        (100, "AI", 0, Mode::Typing),
        // Full phrase reached: the hold starts, nothing changes.
        (100, "AI", 0, Mode::Typing),
        (1_999, "AI", 0, Mode::Typing),
        (1, "AI", 0, Mode::Deleting),
        (50, "A", 0, Mode::Deleting),
        (50, "", 0, Mode::Deleting),
        (50, "", 1, Mode::Typing),
        (100, "M", 1, Mode::Typing),
        (100, "ML", 1, Mode::Typing),
    ];
    for (step, text, index, mode) in expected {
        clock.advance(ms(step));
        let render = animator.current_render();
        assert_eq!(render.text, text, "at {:?}", clock.now());
        assert_eq!(render.phrase_index, index, "at {:?}", clock.now());
        assert_eq!(animator.mode(), mode, "at {:?}", clock.now());
    }
    assert_eq!(clock.now(), ms(2_750));
}

#[test]
fn single_phrase_cycles_back_to_itself() {
    let (clock, animator, _log) = animate(&["ab"]);
    clock.advance(ms(2_450));
    let render = animator.current_render();
    assert_eq!(render.text, "");
    assert_eq!(render.phrase_index, 0);
    assert_eq!(animator.mode(), Mode::Typing);

    clock.advance(ms(100));
    assert_eq!(animator.current_render().text, "a");
}

#[test]
fn three_phrase_cycle_repeats_exactly() {
    // AI and ML take 2450ms each, xyz takes 2600ms.
    let (clock, animator, log) = animate(&["AI", "ML", "xyz"]);
    clock.advance(ms(7_500));
    let first = log.lock().clone();
    assert!(!first.is_empty());
    assert!(first.iter().any(|render| render.text == "xyz"));
    let render = animator.current_render();
    assert_eq!(render.text, "");
    assert_eq!(render.phrase_index, 0);

    clock.advance(ms(7_500));
    let all = log.lock().clone();
    assert_eq!(all.len(), first.len() * 2);
    assert_eq!(&all[first.len()..], &first[..]);
}

#[test]
fn render_is_always_a_prefix_of_active_phrase() {
    let texts = ["Natural Language Processing", "RAG", "日本語"];
    let (clock, animator, log) = animate(&texts);
    for _ in 0..400 {
        assert!(clock.run_next().is_some());
        assert_eq!(clock.pending(), 1);
        let render = animator.current_render();
        assert!(texts[render.phrase_index].starts_with(render.text.as_str()));
    }
    let log = log.lock();
    assert!(!log.is_empty());
    assert!(log
        .iter()
        .all(|render| texts[render.phrase_index].starts_with(render.text.as_str())));
    assert!(log.iter().any(|render| render.text == "日本"));
}

#[test]
fn n_ticks_type_n_characters() {
    let (clock, animator, _log) = animate(&["Global Reasoning"]);
    for n in 1..=6 {
        clock.advance(ms(100));
        assert_eq!(animator.current_render().text.chars().count(), n);
    }
}

#[test]
fn dispose_freezes_snapshot() {
    let (clock, animator, log) = animate(&["AI", "ML"]);
    clock.advance(ms(250));
    animator.dispose();
    let frozen = animator.current_render();
    let renders = log.lock().len();
    assert_eq!(clock.pending(), 0);

    clock.advance(ms(5_000));
    assert_eq!(animator.current_render(), frozen);
    assert_eq!(log.lock().len(), renders);
    assert!(animator.is_disposed());
}

#[test]
fn empty_inputs_are_rejected() {
    let clock = VirtualClock::new();
    let err = Animator::create(Vec::new(), Arc::new(clock.clone())).err();
    assert_eq!(err, Some(AnimatorError::EmptyPhraseList));

    let err = Animator::create(phrases(&["ok", ""]), Arc::new(clock.clone())).err();
    assert_eq!(err, Some(AnimatorError::EmptyPhrase { index: 1 }));
    assert_eq!(clock.pending(), 0);
}
