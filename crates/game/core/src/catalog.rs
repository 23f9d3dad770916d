//! Static spell catalog.
//!
//! The catalog is pure data: every castable spell, its mana cost, and a
//! structured description of what it does. Each spell is either purely
//! instantaneous (resolved once on cast) or purely lasting (resolved at the
//! upkeep of every turn it is active, starting with the turn it is cast).
//! Lookup is a const match, so an unknown spell is a compile-time concern
//! rather than a runtime one.

// ============================================================================
// Spell Identifiers
// ============================================================================

/// Closed set of castable spells.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Spell {
    /// Cheap instant damage.
    MagicMissile,
    /// Instant damage that also heals the caster.
    Drain,
    /// Lasting armor bonus.
    Shield,
    /// Lasting damage over time.
    Poison,
    /// Lasting mana regeneration.
    Recharge,
}

impl Spell {
    /// Every spell in the catalog, in casting-menu order.
    pub const ALL: [Spell; 5] = [
        Spell::MagicMissile,
        Spell::Drain,
        Spell::Shield,
        Spell::Poison,
        Spell::Recharge,
    ];

    /// Looks up the static specification for this spell.
    pub const fn spec(self) -> &'static SpellSpec {
        match self {
            Spell::MagicMissile => &MAGIC_MISSILE,
            Spell::Drain => &DRAIN,
            Spell::Shield => &SHIELD,
            Spell::Poison => &POISON,
            Spell::Recharge => &RECHARGE,
        }
    }
}

// ============================================================================
// Spell Specifications
// ============================================================================

/// Cost and effect of a single spell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellSpec {
    /// Mana cost, paid on cast.
    pub cost: u32,
    pub effect: SpellEffect,
}

/// What a spell does once its cost is paid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpellEffect {
    /// Resolved once, immediately on cast.
    Instant {
        /// Damage dealt to the boss.
        damage: i32,
        /// Hit points restored to the player.
        healing: i32,
        /// Mana restored to the player.
        mana: u32,
    },
    /// Registered as an active effect and resolved once per upkeep while
    /// active, including the upkeep of the turn it is cast.
    Lasting {
        /// Number of turns the effect stays active.
        turns: u8,
        tick: LastingTick,
    },
}

/// Per-upkeep resolution of a lasting effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LastingTick {
    /// Damage dealt to the boss each upkeep.
    Damage(i32),
    /// Mana restored to the player each upkeep.
    Mana(u32),
    /// Armor granted while the effect is active. Not applied as a delta;
    /// the boss attack computation reads it from the active set.
    Armor(i32),
}

const MAGIC_MISSILE: SpellSpec = SpellSpec {
    cost: 53,
    effect: SpellEffect::Instant {
        damage: 4,
        healing: 0,
        mana: 0,
    },
};

const DRAIN: SpellSpec = SpellSpec {
    cost: 73,
    effect: SpellEffect::Instant {
        damage: 2,
        healing: 2,
        mana: 0,
    },
};

const SHIELD: SpellSpec = SpellSpec {
    cost: 113,
    effect: SpellEffect::Lasting {
        turns: 6,
        tick: LastingTick::Armor(7),
    },
};

const POISON: SpellSpec = SpellSpec {
    cost: 173,
    effect: SpellEffect::Lasting {
        turns: 6,
        tick: LastingTick::Damage(3),
    },
};

const RECHARGE: SpellSpec = SpellSpec {
    cost: 229,
    effect: SpellEffect::Lasting {
        turns: 5,
        tick: LastingTick::Mana(101),
    },
};
