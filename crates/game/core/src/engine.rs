//! State transition engine.
//!
//! [`advance`] is the authoritative reducer for [`GameState`]: given a state
//! and a chosen action it derives the unique successor state. It is a pure
//! function of its inputs; no intermediate bookkeeping leaks into the
//! contract.
//!
//! # Resolution order
//!
//! Every transition runs the same fixed sequence:
//!
//! 1. Upkeep: lasting effects from the incoming state resolve.
//! 2. Hard-mode tax: 1 hit point on a hard-mode player turn.
//! 3. Early exit if either side is down; the turn counter still advances.
//! 4. Action resolution (boss attack or player cast).
//! 5. Timer decrement, including an effect cast this turn.
//! 6. Turn increment and cost accounting.

use crate::action::Action;
use crate::catalog::{LastingTick, Spell, SpellEffect};
use crate::state::{Boss, GameState, Mode, Outcome, Player, Side, Turn};

/// Errors surfaced when a transition's preconditions are violated.
///
/// Any of these indicates the caller broke the legal-action contract; they
/// are programming errors, not recoverable conditions, and callers are
/// expected to treat them as fatal.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TurnError {
    #[error("no action can be taken from a terminal state (turn {turn})")]
    GameOver { turn: Turn },

    #[error("{action} is out of turn: {side} acts on turn {turn}")]
    OutOfTurn {
        action: Action,
        side: Side,
        turn: Turn,
    },

    #[error("cannot cast {spell}: its effect is already active")]
    SpellAlreadyActive { spell: Spell },

    #[error("cannot cast {spell}: costs {cost} mana, only {available} available")]
    InsufficientMana {
        spell: Spell,
        cost: u32,
        available: u32,
    },
}

/// Derives the successor of `state` under `chosen` action.
///
/// On the boss's turn the action must be [`Action::Attack`]; on the
/// player's turn it must be one of [`crate::available_actions`]. Anything
/// else fails with a [`TurnError`].
pub fn advance(state: &GameState, chosen: Action) -> Result<GameState, TurnError> {
    validate(state, chosen)?;

    let mut player = state.player;
    let mut boss = state.boss;
    let mut effects = state.effects.clone();
    let mut mana_spent = state.mana_spent;

    // 1. Upkeep resolves from the incoming effect set, before any new
    //    effect is chosen, so an effect cast last turn still acts on the
    //    turn it expires.
    for effect in state.effects.iter() {
        apply_tick(effect.spell, &mut player, &mut boss);
    }

    // 2. Hard-mode tax, before the action.
    if state.turn.side() == Side::Player && player.mode == Mode::Hard {
        player.hit_points -= 1;
    }

    // 3. A state may become terminal mid-turn. The chosen action is
    //    discarded unresolved: no cost is charged and the timers stay
    //    untouched.
    if player.hit_points <= 0 || boss.hit_points <= 0 {
        return Ok(GameState {
            turn: state.turn.next(),
            player,
            boss,
            effects,
            mana_spent,
        });
    }

    // 4. Action resolution.
    match chosen {
        Action::Attack => {
            // Armor comes from the incoming effect set, before this turn's
            // timer decrement. Damage never drops below 1.
            let damage = (boss.damage - state.effects.armor()).max(1);
            player.hit_points -= damage;
        }
        Action::Cast(spell) => {
            let spec = spell.spec();
            player.mana -= spec.cost;
            mana_spent += spec.cost;

            match spec.effect {
                SpellEffect::Instant {
                    damage,
                    healing,
                    mana,
                } => {
                    boss.hit_points -= damage;
                    player.hit_points += healing;
                    player.mana += mana;
                }
                SpellEffect::Lasting { turns, .. } => {
                    // The cast turn counts as the effect's first upkeep.
                    apply_tick(spell, &mut player, &mut boss);
                    effects.add(spell, turns);
                }
            }
        }
    }

    // 5. Every timer decrements, the newly cast effect included.
    effects.tick();

    let next = GameState {
        turn: state.turn.next(),
        player,
        boss,
        effects,
        mana_spent,
    };
    debug_assert!(next.mana_spent >= state.mana_spent);
    Ok(next)
}

/// Checks the legal-action contract before anything mutates.
fn validate(state: &GameState, chosen: Action) -> Result<(), TurnError> {
    if state.outcome() != Outcome::Ongoing {
        return Err(TurnError::GameOver { turn: state.turn });
    }

    let side = state.turn.side();
    match (side, chosen) {
        (Side::Boss, Action::Attack) => Ok(()),
        (Side::Player, Action::Cast(spell)) => {
            if state.effects.has(spell) {
                return Err(TurnError::SpellAlreadyActive { spell });
            }
            let cost = spell.spec().cost;
            if cost > state.player.mana {
                return Err(TurnError::InsufficientMana {
                    spell,
                    cost,
                    available: state.player.mana,
                });
            }
            Ok(())
        }
        _ => Err(TurnError::OutOfTurn {
            action: chosen,
            side,
            turn: state.turn,
        }),
    }
}

/// Resolves one upkeep tick of a lasting effect.
fn apply_tick(spell: Spell, player: &mut Player, boss: &mut Boss) {
    let SpellEffect::Lasting { tick, .. } = spell.spec().effect else {
        debug_assert!(false, "only lasting spells appear in the active set");
        return;
    };

    match tick {
        LastingTick::Damage(amount) => boss.hit_points -= amount,
        LastingTick::Mana(amount) => player.mana += amount,
        // Armor is positional rather than a delta; the boss attack
        // computation reads it from the active set.
        LastingTick::Armor(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::available_actions;
    use crate::config::GameConfig;

    fn duel(player: Player, boss: Boss) -> GameState {
        GameState::opening(player, boss)
    }

    fn standard_duel() -> GameState {
        duel(Player::standard(Mode::Normal), Boss::new(14, 8))
    }

    #[test]
    fn casting_an_instant_spell_resolves_immediately() {
        let state = standard_duel();
        let next = advance(&state, Action::Cast(Spell::MagicMissile)).unwrap();

        assert_eq!(next.boss.hit_points, 10);
        assert_eq!(next.player.mana, 447);
        assert_eq!(next.mana_spent, 53);
        assert_eq!(next.turn, Turn(2));
        assert!(next.effects.is_empty());
    }

    #[test]
    fn drain_heals_the_caster() {
        let mut state = standard_duel();
        state.player.hit_points = 10;

        let next = advance(&state, Action::Cast(Spell::Drain)).unwrap();
        assert_eq!(next.boss.hit_points, 12);
        assert_eq!(next.player.hit_points, 12);
    }

    #[test]
    fn cast_turn_counts_as_the_first_upkeep() {
        let state = standard_duel();
        let next = advance(&state, Action::Cast(Spell::Poison)).unwrap();

        // One tick already resolved, five remain on the counter.
        assert_eq!(next.boss.hit_points, 11);
        assert_eq!(
            next.effects.iter().map(|e| (e.spell, e.remaining)).collect::<Vec<_>>(),
            vec![(Spell::Poison, 5)]
        );
    }

    #[test]
    fn upkeep_resolves_before_the_chosen_action() {
        // Poison finishes the boss at upkeep; the cast is discarded and
        // costs nothing.
        let mut state = standard_duel();
        state.boss.hit_points = 3;
        state.effects.add(Spell::Poison, 1);

        let next = advance(&state, Action::Cast(Spell::MagicMissile)).unwrap();
        assert_eq!(next.boss.hit_points, 0);
        assert_eq!(next.outcome(), Outcome::PlayerWon);
        assert_eq!(next.mana_spent, 0);
        assert_eq!(next.player.mana, state.player.mana);
        // Timers stay untouched in a mid-turn terminal state.
        assert!(next.effects.has(Spell::Poison));
        assert_eq!(next.turn, Turn(2));
    }

    #[test]
    fn boss_damage_is_reduced_by_incoming_armor() {
        let mut state = standard_duel();
        state.turn = Turn(2);
        state.effects.add(Spell::Shield, 5);

        let next = advance(&state, Action::Attack).unwrap();
        assert_eq!(next.player.hit_points, 49);
    }

    #[test]
    fn damage_never_drops_below_one() {
        let mut state = duel(Player::standard(Mode::Normal), Boss::new(14, 1));
        state.turn = Turn(2);
        state.effects.add(Spell::Shield, 5);

        let next = advance(&state, Action::Attack).unwrap();
        assert_eq!(next.player.hit_points, 49);
    }

    #[test]
    fn hard_mode_tax_applies_before_the_action_resolves() {
        let mut state = duel(Player::standard(Mode::Hard), Boss::new(14, 8));
        state.player.hit_points = 1;

        let next = advance(&state, Action::Cast(Spell::MagicMissile)).unwrap();
        assert_eq!(next.outcome(), Outcome::BossWon);
        // The cast never resolved.
        assert_eq!(next.boss.hit_points, 14);
        assert_eq!(next.mana_spent, 0);
    }

    #[test]
    fn recharge_restores_mana_across_its_whole_duration() {
        let mut state = standard_duel();
        state.boss.hit_points = 1_000;

        // Cast on turn 1, then walk the duel until the effect expires.
        state = advance(&state, Action::Cast(Spell::Recharge)).unwrap();
        for _ in 0..4 {
            state = advance(&state, Action::Attack).unwrap();
            state = advance(&state, Action::Cast(Spell::MagicMissile)).unwrap();
        }
        assert!(state.effects.is_empty());

        // Pool accounting: whatever the pool holds beyond the unspent
        // opening mana must have come from recharge ticks, one on the cast
        // turn and one per upkeep of the four turns that followed.
        let gained = state.player.mana + state.mana_spent - GameConfig::PLAYER_MANA;
        assert_eq!(gained, 5 * 101);
    }

    #[test]
    fn expired_effects_free_the_spell_for_recasting() {
        let mut state = standard_duel();
        state.boss.hit_points = 100;
        state.boss.damage = 1;

        state = advance(&state, Action::Cast(Spell::Poison)).unwrap();
        for _ in 0..2 {
            state = advance(&state, Action::Attack).unwrap();
            state = advance(&state, Action::Cast(Spell::MagicMissile)).unwrap();
        }
        state = advance(&state, Action::Attack).unwrap();

        // Six poison ticks (18 damage) plus two missiles (8 damage).
        assert_eq!(state.boss.hit_points, 100 - 18 - 8);
        assert!(state.effects.is_empty());
        assert!(available_actions(&state).contains(&Action::Cast(Spell::Poison)));
    }

    #[test]
    fn mana_spent_is_monotone_along_a_path() {
        let mut state = standard_duel();
        let mut spent = state.mana_spent;

        for action in [
            Action::Cast(Spell::Recharge),
            Action::Attack,
            Action::Cast(Spell::Shield),
            Action::Attack,
            Action::Cast(Spell::Drain),
            Action::Attack,
        ] {
            state = advance(&state, action).unwrap();
            assert!(state.mana_spent >= spent);
            spent = state.mana_spent;
        }
        assert_eq!(spent, 229 + 113 + 73);
    }

    #[test]
    fn contract_violations_are_reported() {
        let state = standard_duel();
        assert_eq!(
            advance(&state, Action::Attack),
            Err(TurnError::OutOfTurn {
                action: Action::Attack,
                side: Side::Player,
                turn: Turn(1),
            })
        );

        let mut shielded = state.clone();
        shielded.effects.add(Spell::Shield, 3);
        assert_eq!(
            advance(&shielded, Action::Cast(Spell::Shield)),
            Err(TurnError::SpellAlreadyActive {
                spell: Spell::Shield
            })
        );

        let mut broke = state.clone();
        broke.player.mana = 52;
        assert_eq!(
            advance(&broke, Action::Cast(Spell::MagicMissile)),
            Err(TurnError::InsufficientMana {
                spell: Spell::MagicMissile,
                cost: 53,
                available: 52,
            })
        );

        let mut over = state.clone();
        over.boss.hit_points = 0;
        assert_eq!(
            advance(&over, Action::Cast(Spell::MagicMissile)),
            Err(TurnError::GameOver { turn: Turn(1) })
        );
    }
}
