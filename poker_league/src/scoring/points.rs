//! Per-tournament point calculation.

use super::errors::{ScoringError, ScoringResult};
use crate::tournament::{PlayerId, TournamentParticipant};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Default points every participant earns for playing
pub const DEFAULT_PARTICIPATION_POINTS: i64 = 5;

/// Default points per rebuy (a penalty, so never positive)
pub const DEFAULT_REBUY_PENALTY: i64 = -1;

/// Points for a finishing position.
///
/// 1st 20, 2nd 15, 3rd 10, 4th-6th 5, 7th-9th 3, anything else 0.
pub fn position_points(position: Option<i64>) -> i64 {
    match position {
        Some(1) => 20,
        Some(2) => 15,
        Some(3) => 10,
        Some(4..=6) => 5,
        Some(7..=9) => 3,
        _ => 0,
    }
}

/// One participant's result as the scorer needs it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringEntry {
    pub player_id: PlayerId,
    #[serde(default)]
    pub rebuy_count: u32,
    /// Finishing position, `None` when the player never finished
    #[serde(default)]
    pub position: Option<i64>,
}

impl From<&TournamentParticipant> for ScoringEntry {
    fn from(participant: &TournamentParticipant) -> Self {
        Self {
            player_id: participant.player_id,
            rebuy_count: participant.rebuy_count,
            position: participant.position,
        }
    }
}

/// Points one player earned in one tournament
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsDelta {
    pub player_id: PlayerId,
    pub participation_points: i64,
    pub position_points: i64,
    pub rebuy_penalty_points: i64,
    pub total_points: i64,
    /// Finishing position the points were earned for
    #[serde(default)]
    pub position: Option<i64>,
}

/// Score a finished tournament
///
/// # Arguments
///
/// * `entries` - Every participant with rebuys and finishing position
/// * `participation_points` - Flat points for taking part
/// * `rebuy_penalty_per_rebuy` - Points per rebuy, normally negative
///
/// # Returns
///
/// * `ScoringResult<Vec<PointsDelta>>` - One delta per entry in input order, or
///   nothing at all when any position is invalid, a player is listed twice or
///   a total overflows
pub fn score_positions(
    entries: &[ScoringEntry],
    participation_points: i64,
    rebuy_penalty_per_rebuy: i64,
) -> ScoringResult<Vec<PointsDelta>> {
    if let Some(bad) = entries
        .iter()
        .find(|e| e.position.is_some_and(|p| p <= 0))
    {
        log::warn!(
            "Rejected position {:?} for player {}",
            bad.position,
            bad.player_id
        );
        return Err(ScoringError::InvalidPosition {
            player_id: bad.player_id,
            position: bad.position.unwrap_or_default(),
        });
    }

    let mut seen = HashSet::with_capacity(entries.len());
    if let Some(dup) = entries.iter().find(|e| !seen.insert(e.player_id)) {
        log::warn!("Rejected results listing player {} twice", dup.player_id);
        return Err(ScoringError::DuplicatePlayer(dup.player_id));
    }

    entries
        .iter()
        .map(|entry| score_entry(entry, participation_points, rebuy_penalty_per_rebuy))
        .collect()
}

fn score_entry(
    entry: &ScoringEntry,
    participation_points: i64,
    rebuy_penalty_per_rebuy: i64,
) -> ScoringResult<PointsDelta> {
    let overflow = || ScoringError::PointsOverflow(entry.player_id);

    let position_points = position_points(entry.position);
    let rebuy_penalty_points = i64::from(entry.rebuy_count)
        .checked_mul(rebuy_penalty_per_rebuy)
        .ok_or_else(overflow)?;
    let total_points = participation_points
        .checked_add(position_points)
        .and_then(|t| t.checked_add(rebuy_penalty_points))
        .ok_or_else(overflow)?;

    Ok(PointsDelta {
        player_id: entry.player_id,
        participation_points,
        position_points,
        rebuy_penalty_points,
        total_points,
        position: entry.position,
    })
}

/// League point values that can change between seasons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringRules {
    pub participation_points: i64,
    pub rebuy_penalty_per_rebuy: i64,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            participation_points: DEFAULT_PARTICIPATION_POINTS,
            rebuy_penalty_per_rebuy: DEFAULT_REBUY_PENALTY,
        }
    }
}

impl ScoringRules {
    /// Score entries with these rules
    pub fn score(&self, entries: &[ScoringEntry]) -> ScoringResult<Vec<PointsDelta>> {
        score_positions(
            entries,
            self.participation_points,
            self.rebuy_penalty_per_rebuy,
        )
    }
}
