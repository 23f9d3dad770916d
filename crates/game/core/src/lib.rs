//! Deterministic duel rules and data types shared across the workspace.
//!
//! `game-core` defines the canonical rules of the wizard duel: the spell
//! catalog, both combatants, the immutable [`GameState`] snapshot, and the
//! pure transition function [`engine::advance`]. The solver and offline
//! tools depend on the types re-exported here; all state derivation flows
//! through [`engine::advance`] and nothing in this crate performs I/O.
pub mod action;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod state;

pub use action::{Action, available_actions};
pub use catalog::{LastingTick, Spell, SpellEffect, SpellSpec};
pub use config::GameConfig;
pub use engine::{TurnError, advance};
pub use state::{ActiveEffect, ActiveEffects, Boss, GameState, Mode, Outcome, Player, Side, Turn};
