//! End-to-end search scenarios.

use game_core::{Boss, GameState, Mode, Player};
use solver::{DepthSchedule, Solver, SolverError};

fn opening(player: Player, boss: Boss) -> GameState {
    GameState::opening(player, boss)
}

#[test]
fn poison_then_magic_missile_beats_the_weak_boss() {
    let report = Solver::default()
        .minimal_mana_to_win(&opening(
            Player::new(10, 250, Mode::Normal),
            Boss::new(13, 8),
        ))
        .unwrap();

    // poison (173) + magic missile (53); nothing cheaper wins.
    assert_eq!(report.mana_spent, 226);
    assert_eq!(report.final_pass.depth_truncated, 0);
}

#[test]
fn the_tougher_boss_needs_a_five_spell_line() {
    let report = Solver::default()
        .minimal_mana_to_win(&opening(
            Player::new(10, 250, Mode::Normal),
            Boss::new(14, 8),
        ))
        .unwrap();

    // recharge, shield, drain, poison, magic missile.
    assert_eq!(report.mana_spent, 641);
    assert_eq!(report.final_pass.depth_truncated, 0);
}

#[test]
fn hard_mode_costs_no_less_than_normal_mode() {
    let boss = Boss::new(13, 8);
    let solver = Solver::default();

    let normal = solver
        .minimal_mana_to_win(&opening(Player::standard(Mode::Normal), boss))
        .unwrap();
    let hard = solver
        .minimal_mana_to_win(&opening(Player::standard(Mode::Hard), boss))
        .unwrap();

    // With the full 50 hit-point pool the player survives long enough to
    // win on four magic missiles; the hard-mode tax only ever hurts the
    // player, so it can never make a line cheaper.
    assert_eq!(normal.mana_spent, 4 * 53);
    assert!(hard.mana_spent >= normal.mana_spent);
    assert_eq!(hard.mana_spent, 4 * 53);
}

#[test]
fn an_unbeatable_boss_is_reported_not_looped_on() {
    let result = Solver::default().minimal_mana_to_win(&opening(
        Player::new(10, 250, Mode::Normal),
        Boss::new(10_000, 30),
    ));

    assert!(matches!(result, Err(SolverError::NoWinningLine)));
}

#[test]
fn a_tight_initial_bound_is_relaxed_until_the_search_is_exhaustive() {
    let solver = Solver::new(DepthSchedule {
        initial: 1,
        probe_step: 1,
        bounded_step: 2,
    });
    let report = solver
        .minimal_mana_to_win(&opening(
            Player::new(10, 250, Mode::Normal),
            Boss::new(13, 8),
        ))
        .unwrap();

    assert_eq!(report.mana_spent, 226);
    assert!(report.passes > 1);
    // The winning line is five turns long; the proving pass must have been
    // allowed at least that deep.
    assert!(report.depth_limit >= 5);
    assert_eq!(report.final_pass.depth_truncated, 0);
}
