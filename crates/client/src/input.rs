//! Boss description parsing.
//!
//! The opponent arrives as a short line-oriented text description:
//!
//! ```text
//! Hit Points: 58
//! Damage: 9
//! ```

use anyhow::{Context, Result, bail};
use game_core::Boss;

/// Parses the boss statistics from a line-oriented description.
///
/// Both `Hit Points` and `Damage` must be present; an unrecognized
/// statistic is rejected rather than skipped.
pub fn parse_boss(text: &str) -> Result<Boss> {
    let mut hit_points = None;
    let mut damage = None;

    for line in text.lines().filter(|line| !line.trim().is_empty()) {
        let (key, value) = line
            .split_once(':')
            .with_context(|| format!("malformed boss statistic line {line:?}"))?;
        let value: i32 = value
            .trim()
            .parse()
            .with_context(|| format!("boss statistic {} is not an integer", key.trim()))?;

        match key.trim() {
            "Hit Points" => hit_points = Some(value),
            "Damage" => damage = Some(value),
            other => bail!("unrecognized boss statistic {other:?}"),
        }
    }

    let hit_points = hit_points.context("boss description is missing Hit Points")?;
    let damage = damage.context("boss description is missing Damage")?;
    Ok(Boss::new(hit_points, damage))
}
