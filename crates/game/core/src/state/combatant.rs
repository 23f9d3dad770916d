//! Combatant value types.
//!
//! Both combatants are small immutable values: transitions never mutate a
//! combatant in place, they derive a replacement with the changed fields.

use core::fmt;

use crate::config::GameConfig;

/// Difficulty mode for the duel.
///
/// Hard mode drains one player hit point at the start of every player turn,
/// before any action resolves.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Mode {
    #[default]
    Normal,
    Hard,
}

/// The player's vital statistics.
///
/// Hit points are signed and may go non-positive; that signals defeat.
/// Mana is unsigned: the legal-action filter guarantees a cast never
/// requires more mana than the pool holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub hit_points: i32,
    pub mana: u32,
    pub mode: Mode,
}

impl Player {
    pub const fn new(hit_points: i32, mana: u32, mode: Mode) -> Self {
        Self {
            hit_points,
            mana,
            mode,
        }
    }

    /// Standard opening statistics: 50 hit points, 500 mana.
    pub const fn standard(mode: Mode) -> Self {
        Self::new(GameConfig::PLAYER_HIT_POINTS, GameConfig::PLAYER_MANA, mode)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "player: {} HP, {} mana ({} mode)",
            self.hit_points, self.mana, self.mode
        )
    }
}

/// The opposing boss.
///
/// Constructed once from external input and only ever replaced, never
/// mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Boss {
    pub hit_points: i32,
    /// Attack power of the boss's only action.
    pub damage: i32,
}

impl Boss {
    pub const fn new(hit_points: i32, damage: i32) -> Self {
        Self { hit_points, damage }
    }
}

impl fmt::Display for Boss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "boss: {} HP, {} damage", self.hit_points, self.damage)
    }
}
