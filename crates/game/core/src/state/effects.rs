//! Active lasting effects on a game state.
//!
//! # Counter-based Duration
//!
//! The duel clock always advances by exactly one turn, so effects store a
//! `remaining` turn counter instead of an absolute expiry time. An effect
//! with `remaining == n` resolves at the next `n` upkeeps (the cast-turn
//! resolution has already happened by the time the effect is stored) and is
//! dropped once the counter reaches zero.

use arrayvec::ArrayVec;

use crate::catalog::{LastingTick, Spell, SpellEffect};
use crate::config::GameConfig;

/// A single active effect with its remaining duration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveEffect {
    pub spell: Spell,
    /// Turns left before the effect is dropped. Always at least 1 while the
    /// effect is stored.
    pub remaining: u8,
}

/// The set of currently active lasting effects.
///
/// At most one effect per spell may be active at a time; the legal-action
/// filter enforces this before a cast ever reaches the engine. Insertion
/// order is preserved purely for determinism, the semantics are order
/// independent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveEffects {
    effects: ArrayVec<ActiveEffect, { GameConfig::MAX_ACTIVE_EFFECTS }>,
}

impl ActiveEffects {
    /// Creates an empty effect set.
    pub fn empty() -> Self {
        Self {
            effects: ArrayVec::new(),
        }
    }

    /// Checks whether an effect of this spell is currently active.
    pub fn has(&self, spell: Spell) -> bool {
        self.effects.iter().any(|e| e.spell == spell)
    }

    /// Adds a newly cast effect with its full duration.
    ///
    /// The caller must have rejected duplicate casts already; a duplicate
    /// here is a rules violation, not a recoverable condition.
    pub fn add(&mut self, spell: Spell, remaining: u8) {
        debug_assert!(!self.has(spell), "effect {spell} is already active");
        debug_assert!(remaining >= 1, "an active effect must last at least one turn");
        self.effects.push(ActiveEffect { spell, remaining });
    }

    /// Sum of armor granted by the active set.
    pub fn armor(&self) -> i32 {
        self.effects
            .iter()
            .filter_map(|e| match e.spell.spec().effect {
                SpellEffect::Lasting {
                    tick: LastingTick::Armor(bonus),
                    ..
                } => Some(bonus),
                _ => None,
            })
            .sum()
    }

    /// Decrements every counter by one and drops effects reaching zero.
    pub fn tick(&mut self) {
        for effect in self.effects.iter_mut() {
            effect.remaining -= 1;
        }
        self.effects.retain(|e| e.remaining > 0);
    }

    /// Returns an iterator over the active effects.
    pub fn iter(&self) -> impl Iterator<Item = &ActiveEffect> {
        self.effects.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}
