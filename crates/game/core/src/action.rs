//! Legal-action enumeration.
//!
//! Converts a game state into the concrete actions that may be taken from
//! it. This is the only place that decides legality; the engine trusts its
//! output and treats anything else as a contract violation.

use core::fmt;

use arrayvec::ArrayVec;

use crate::catalog::Spell;
use crate::config::GameConfig;
use crate::state::{GameState, Outcome, Side};

/// An action taken on a single turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// The boss's only action.
    Attack,
    /// A player spell cast.
    Cast(Spell),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Attack => write!(f, "attack"),
            Action::Cast(spell) => write!(f, "cast {spell}"),
        }
    }
}

/// Enumerates every action legal in the given state.
///
/// - Terminal state: no actions at all.
/// - Boss turn: the singleton `attack`.
/// - Player turn: every spell whose cost fits the current mana pool and
///   whose effect is not already active.
///
/// An empty list on a live player turn is a valid outcome: the branch is a
/// dead end and the search abandons it without special handling.
pub fn available_actions(state: &GameState) -> ArrayVec<Action, { GameConfig::MAX_ACTIONS }> {
    let mut actions = ArrayVec::new();

    if state.outcome() != Outcome::Ongoing {
        return actions;
    }

    match state.turn.side() {
        Side::Boss => actions.push(Action::Attack),
        Side::Player => {
            for spell in Spell::ALL {
                if spell.spec().cost > state.player.mana {
                    continue;
                }
                if state.effects.has(spell) {
                    continue;
                }
                actions.push(Action::Cast(spell));
            }
        }
    }

    actions
}
