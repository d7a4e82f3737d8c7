use std::time::Duration;

use time::Duration as TimeDuration;

use crate::domain::round::{Round, SweepOutcome};
use crate::domain::test_state_helpers::{holder, lobby, started_round, t0};

const TIMEOUT: Duration = Duration::from_secs(30);

fn after(secs: i64) -> time::OffsetDateTime {
    t0() + TimeDuration::seconds(secs)
}

#[test]
fn sweep_is_noop_without_round() {
    let (mut round, _) = lobby(&["ann", "bob"]);
    assert_eq!(round.sweep_idle(after(600), TIMEOUT), SweepOutcome::Inactive);
    assert_eq!(round.players.len(), 2);

    let mut empty = Round::new();
    assert_eq!(empty.sweep_idle(after(600), TIMEOUT), SweepOutcome::Inactive);
}

#[test]
fn active_holder_within_timeout_is_kept() {
    let (mut round, _) = started_round(&["ann", "bob"], [1, 2]);
    let before = holder(&round);

    assert_eq!(round.sweep_idle(after(30), TIMEOUT), SweepOutcome::Healthy);
    assert!(round.is_active());
    assert_eq!(holder(&round), before);
}

#[test]
fn healthy_sweep_leaves_holder_record_untouched() {
    let (mut round, _) = started_round(&["ann", "bob", "cid"], [1, 2]);
    let kept = holder(&round);
    let snapshot = round.player(&kept).cloned().unwrap();

    for secs in [0, 10, 30] {
        assert_eq!(round.sweep_idle(after(secs), TIMEOUT), SweepOutcome::Healthy);
    }

    assert_eq!(round.players.len(), 3);
    assert_eq!(round.player(&kept), Some(&snapshot));
    assert!(round.ready.contains(&kept));
    assert_eq!(round.turn_order.len(), 3);
}

#[test]
fn idle_holder_is_evicted_and_round_continues() {
    let (mut round, _) = started_round(&["ann", "bob", "cid"], [1, 2]);
    let idle = holder(&round);
    round.attempts.insert(idle.clone(), 3);

    let outcome = round.sweep_idle(after(31), TIMEOUT);

    match outcome {
        SweepOutcome::Evicted { player } => assert_eq!(player.id, idle),
        other => panic!("expected eviction, got {other:?}"),
    }
    assert!(round.is_active());
    assert!(round.player(&idle).is_none());
    assert!(!round.ready.contains(&idle));
    assert!(!round.attempts.contains_key(&idle));
    assert!(!round.turn_order.contains(&idle));
    assert_eq!(round.turn_order.len(), 2);
    assert_eq!(round.current_turn, 0);
}

#[test]
fn eviction_below_minimum_aborts_round() {
    let (mut round, _) = started_round(&["ann", "bob"], [1, 2]);
    let idle = holder(&round);

    let outcome = round.sweep_idle(after(31), TIMEOUT);

    assert!(matches!(outcome, SweepOutcome::Aborted { ref player } if player.id == idle));
    assert!(!round.is_active());
    assert!(round.turn_order.is_empty());
    assert!(round.ready.is_empty());
    assert_eq!(round.current_turn, 0);
    assert_eq!(round.players.len(), 1);
    assert!(round.result().is_none());

    let status = round.status();
    assert!(!status.round_active);
    assert_eq!(status.current_turn, "");
}

#[test]
fn evicting_last_slot_wraps_turn_to_start() {
    let (mut round, _) = started_round(&["ann", "bob", "cid"], [9, 9]);

    // Two misses move the turn to the last slot.
    for _ in 0..2 {
        let current = holder(&round);
        round.process_guess(&current, "00", t0()).unwrap();
    }
    assert_eq!(round.current_turn, 2);
    let first = round.turn_order[0].clone();

    let outcome = round.sweep_idle(after(31), TIMEOUT);

    assert!(matches!(outcome, SweepOutcome::Evicted { .. }));
    assert_eq!(round.current_turn, 0);
    assert_eq!(holder(&round), first);
}

#[test]
fn one_eviction_per_sweep() {
    let (mut round, _) = started_round(&["ann", "bob", "cid", "dee"], [1, 2]);

    // Everyone has been idle since t0; each sweep removes only the holder.
    assert!(matches!(
        round.sweep_idle(after(31), TIMEOUT),
        SweepOutcome::Evicted { .. }
    ));
    assert_eq!(round.players.len(), 3);

    assert!(matches!(
        round.sweep_idle(after(31), TIMEOUT),
        SweepOutcome::Evicted { .. }
    ));
    assert_eq!(round.players.len(), 2);

    assert!(matches!(
        round.sweep_idle(after(31), TIMEOUT),
        SweepOutcome::Aborted { .. }
    ));
    assert!(!round.is_active());
}

#[test]
fn missing_holder_record_advances_turn() {
    let (mut round, _) = started_round(&["ann", "bob", "cid"], [1, 2]);
    let ghost = holder(&round);
    round.players.remove(&ghost);

    let outcome = round.sweep_idle(after(1), TIMEOUT);

    assert_eq!(outcome, SweepOutcome::SkippedMissing { player_id: ghost.clone() });
    assert!(round.is_active());
    assert_eq!(round.current_turn, 1);
    assert_ne!(holder(&round), ghost);
    let next = holder(&round);
    assert_eq!(round.player(&next).unwrap().last_active, after(1));
}

#[test]
fn guessing_keeps_player_from_eviction() {
    let (mut round, _) = started_round(&["ann", "bob"], [9, 9]);
    let first = holder(&round);
    round.process_guess(&first, "00", after(25)).unwrap();

    // The new holder was refreshed when the turn passed to them.
    assert_eq!(round.sweep_idle(after(50), TIMEOUT), SweepOutcome::Healthy);
    assert!(matches!(
        round.sweep_idle(after(56), TIMEOUT),
        SweepOutcome::Aborted { .. }
    ));
}
