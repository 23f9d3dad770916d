//! Minimal-mana search over duel states.
//!
//! The solver explores the tree of reachable [`GameState`]s depth-first,
//! recursing into every legal action at each node. Two bounds keep the
//! traversal finite:
//!
//! - a **cost bound**: once any winning line is known, branches whose
//!   cumulative spend cannot strictly improve on it are abandoned;
//! - a **depth bound**: a hard cap on path length, needed because healing
//!   and mana regeneration keep the state space from being naturally
//!   depth-limited.
//!
//! The depth bound starts small and is raised between full traversals for
//! as long as any branch was cut off by it. Once a traversal finishes with
//! zero depth truncations, every surviving branch was exhausted naturally
//! and the best cost found is provably the minimum. Termination follows
//! from the cost bound: each new best strictly shrinks the reachable
//! frontier, so truncations vanish once the bound passes the longest
//! surviving winning line.

use game_core::{GameState, Outcome, TurnError, advance, available_actions};

/// How the depth bound grows between traversal passes.
///
/// While no winning line is known the search is not cost-constrained, so
/// the bound grows conservatively by `probe_step`; afterwards the cost
/// bound does most of the pruning and the bound can widen by
/// `bounded_step`. Any monotone schedule is correct, these values only
/// tune how many passes the search needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DepthSchedule {
    /// Depth bound of the first traversal pass.
    pub initial: u32,
    /// Increment while no winning line has been found.
    pub probe_step: u32,
    /// Increment once a winning line bounds the cost.
    pub bounded_step: u32,
}

impl Default for DepthSchedule {
    fn default() -> Self {
        Self {
            initial: 10,
            probe_step: 1,
            bounded_step: 10,
        }
    }
}

/// Why branches of one traversal pass ended.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PassCounters {
    /// Terminal states won by the player.
    pub wins: u64,
    /// Terminal states lost to the boss.
    pub losses: u64,
    /// Branches cut off by the depth bound. Non-zero means the pass does
    /// not prove exhaustiveness.
    pub depth_truncated: u64,
    /// Branches abandoned because they could not improve on the best cost.
    pub cost_pruned: u64,
}

/// Result of a completed search: the minimum plus the statistics of the
/// pass that proved it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchReport {
    /// Minimal cumulative mana spend over all winning lines.
    pub mana_spent: u32,
    /// Number of full traversal passes performed.
    pub passes: u32,
    /// Depth bound of the final (proving) pass.
    pub depth_limit: u32,
    /// Statistics of the final pass; `depth_truncated` is always zero.
    pub final_pass: PassCounters,
}

/// Errors surfaced by the search controller.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    /// The search space was exhausted without a single winning line. A
    /// legitimate (if unexpected) outcome of the input data; callers must
    /// report it rather than swallow it.
    #[error("no winning line exists from the opening state")]
    NoWinningLine,

    /// The engine rejected an action the solver considered legal. Always a
    /// programming error.
    #[error(transparent)]
    Turn(#[from] TurnError),
}

/// Iterative-deepening search controller.
#[derive(Clone, Copy, Debug, Default)]
pub struct Solver {
    schedule: DepthSchedule,
}

impl Solver {
    pub fn new(schedule: DepthSchedule) -> Self {
        Self { schedule }
    }

    /// Finds the minimal cumulative mana spend over all paths from
    /// `opening` to a player win.
    pub fn minimal_mana_to_win(&self, opening: &GameState) -> Result<SearchReport, SolverError> {
        let mut depth_limit = self.schedule.initial;
        let mut best = None;
        let mut passes = 0;

        loop {
            let mut pass = Traversal::new(depth_limit, best);
            pass.explore(opening, 0)?;
            passes += 1;

            let counters = pass.counters;
            tracing::debug!(
                depth_limit,
                passes,
                wins = counters.wins,
                losses = counters.losses,
                depth_truncated = counters.depth_truncated,
                cost_pruned = counters.cost_pruned,
                best = pass.best,
                "traversal pass complete"
            );
            best = pass.best;

            if counters.depth_truncated == 0 {
                return best
                    .map(|mana_spent| SearchReport {
                        mana_spent,
                        passes,
                        depth_limit,
                        final_pass: counters,
                    })
                    .ok_or(SolverError::NoWinningLine);
            }

            // The bound grows only while truncation is still observed.
            depth_limit += if best.is_some() {
                self.schedule.bounded_step
            } else {
                self.schedule.probe_step
            };
        }
    }
}

/// One full depth-first traversal under a fixed depth bound.
struct Traversal {
    depth_limit: u32,
    best: Option<u32>,
    counters: PassCounters,
}

impl Traversal {
    fn new(depth_limit: u32, best: Option<u32>) -> Self {
        Self {
            depth_limit,
            best,
            counters: PassCounters::default(),
        }
    }

    fn explore(&mut self, state: &GameState, depth: u32) -> Result<(), TurnError> {
        // Cost bound first: a branch that already meets the best known
        // spend cannot strictly improve on it, win or not.
        if let Some(best) = self.best {
            if state.mana_spent >= best {
                self.counters.cost_pruned += 1;
                return Ok(());
            }
        }

        match state.outcome() {
            Outcome::PlayerWon => {
                self.counters.wins += 1;
                // Only a strict improvement updates the bound; the prune
                // above already rejected ties.
                if self.best.is_none_or(|best| state.mana_spent < best) {
                    self.best = Some(state.mana_spent);
                    tracing::debug!(mana_spent = state.mana_spent, %state, "new best winning line");
                }
            }
            Outcome::BossWon => {
                self.counters.losses += 1;
            }
            Outcome::Ongoing => {
                if depth >= self.depth_limit {
                    self.counters.depth_truncated += 1;
                    return Ok(());
                }
                for action in available_actions(state) {
                    let next = advance(state, action)?;
                    self.explore(&next, depth + 1)?;
                }
            }
        }

        Ok(())
    }
}
