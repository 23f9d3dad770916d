/// Game configuration constants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GameConfig;

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of simultaneously active lasting effects.
    ///
    /// The catalog holds three lasting spells; the headroom keeps the
    /// capacity independent of catalog growth.
    pub const MAX_ACTIVE_EFFECTS: usize = 8;
    /// Maximum number of legal actions on any single turn.
    pub const MAX_ACTIONS: usize = 8;

    // ===== fixed opening statistics =====
    /// Player hit points at the start of every duel.
    pub const PLAYER_HIT_POINTS: i32 = 50;
    /// Player mana pool at the start of every duel.
    pub const PLAYER_MANA: u32 = 500;
}
