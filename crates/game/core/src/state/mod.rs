//! Authoritative duel state representation.
//!
//! This module owns the data structures that describe one point in the
//! battle. A [`GameState`] is an immutable snapshot: the engine derives a
//! successor for every transition and no snapshot is ever mutated after
//! construction.
mod combatant;
mod effects;

use core::fmt;

pub use combatant::{Boss, Mode, Player};
pub use effects::{ActiveEffect, ActiveEffects};

/// One-based turn counter.
///
/// The parity encodes ownership: odd turns belong to the player, even turns
/// to the boss, so the player always moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Turn(pub u32);

impl Turn {
    /// The opening turn of every duel.
    pub const FIRST: Turn = Turn(1);

    /// Whose half-turn this is.
    pub fn side(self) -> Side {
        if self.0 % 2 == 1 {
            Side::Player
        } else {
            Side::Boss
        }
    }

    pub fn next(self) -> Turn {
        Turn(self.0 + 1)
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The side whose turn it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Side {
    Player,
    Boss,
}

/// Terminal classification of a state.
///
/// The player-defeat check takes precedence: within a single half-turn only
/// the player can be hurt by the hard-mode tax or the boss attack, so a
/// state where both sides are down means the player fell first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Ongoing,
    PlayerWon,
    BossWon,
}

/// Canonical snapshot of one point in the duel.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// Turn about to be taken from this state.
    pub turn: Turn,
    pub player: Player,
    pub boss: Boss,
    /// Lasting effects currently in force.
    pub effects: ActiveEffects,
    /// Cumulative mana spent along the path that produced this state.
    /// Monotonically non-decreasing across transitions.
    pub mana_spent: u32,
}

impl GameState {
    /// Creates the opening state: turn 1, no active effects, nothing spent.
    pub fn opening(player: Player, boss: Boss) -> Self {
        Self {
            turn: Turn::FIRST,
            player,
            boss,
            effects: ActiveEffects::empty(),
            mana_spent: 0,
        }
    }

    /// Classifies this state as ongoing or won/lost.
    pub fn outcome(&self) -> Outcome {
        if self.player.hit_points <= 0 {
            Outcome::BossWon
        } else if self.boss.hit_points <= 0 {
            Outcome::PlayerWon
        } else {
            Outcome::Ongoing
        }
    }

    /// Current armor granted by the active effect set.
    pub fn armor(&self) -> i32 {
        self.effects.armor()
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "turn {} ({} to act): {} | {} | active: [",
            self.turn,
            self.turn.side(),
            self.player,
            self.boss,
        )?;
        for (i, effect) in self.effects.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}({})", effect.spell, effect.remaining)?;
        }
        write!(f, "] | spent: {}", self.mana_spent)
    }
}
