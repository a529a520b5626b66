//! Season standings built from tournament point deltas.

use super::{
    errors::{ScoringError, ScoringResult},
    points::PointsDelta,
};
use crate::tournament::{PlayerId, SeasonPointsRecord, TournamentId};
use std::collections::{HashMap, HashSet};

/// Running point totals for one season.
///
/// Records are only ever incremented. Each tournament can be applied once.
#[derive(Debug, Clone)]
pub struct SeasonLeaderboard {
    season_name: String,
    records: HashMap<PlayerId, SeasonPointsRecord>,
    applied: HashSet<TournamentId>,
}

impl SeasonLeaderboard {
    pub fn new(season_name: impl Into<String>) -> Self {
        Self {
            season_name: season_name.into(),
            records: HashMap::new(),
            applied: HashSet::new(),
        }
    }

    pub fn season_name(&self) -> &str {
        &self.season_name
    }

    /// Merge one tournament's deltas into the season
    ///
    /// # Arguments
    ///
    /// * `tournament_id` - Tournament the deltas were scored for
    /// * `deltas` - Output of the scorer for that tournament
    ///
    /// # Returns
    ///
    /// * `ScoringResult<()>` - `AlreadyApplied` if the tournament was merged before,
    ///   `DuplicatePlayer` if a player has two deltas; nothing is merged on error
    pub fn apply(&mut self, tournament_id: TournamentId, deltas: &[PointsDelta]) -> ScoringResult<()> {
        if self.applied.contains(&tournament_id) {
            log::warn!(
                "Season {}: tournament {} already applied",
                self.season_name,
                tournament_id
            );
            return Err(ScoringError::AlreadyApplied(tournament_id));
        }

        let mut seen = HashSet::with_capacity(deltas.len());
        if let Some(dup) = deltas.iter().find(|d| !seen.insert(d.player_id)) {
            return Err(ScoringError::DuplicatePlayer(dup.player_id));
        }
        self.applied.insert(tournament_id);

        for delta in deltas {
            let record = self
                .records
                .entry(delta.player_id)
                .or_insert_with(|| SeasonPointsRecord {
                    player_id: delta.player_id,
                    season_name: self.season_name.clone(),
                    ..Default::default()
                });

            record.participation_points = record
                .participation_points
                .saturating_add(delta.participation_points);
            record.position_points = record.position_points.saturating_add(delta.position_points);
            record.rebuy_penalty_points = record
                .rebuy_penalty_points
                .saturating_add(delta.rebuy_penalty_points);
            record.total_points = record.total_points.saturating_add(delta.total_points);
            record.tournaments_played += 1;
            if let Some(position) = delta.position {
                record.best_finish = Some(record.best_finish.map_or(position, |b| b.min(position)));
            }
        }

        log::info!(
            "Season {}: applied tournament {} ({} players)",
            self.season_name,
            tournament_id,
            deltas.len()
        );
        Ok(())
    }

    /// Records ordered by total points, highest first, ties by player ID
    pub fn standings(&self) -> Vec<&SeasonPointsRecord> {
        let mut standings: Vec<&SeasonPointsRecord> = self.records.values().collect();
        standings.sort_by(|a, b| {
            b.total_points
                .cmp(&a.total_points)
                .then_with(|| a.player_id.cmp(&b.player_id))
        });
        standings
    }

    pub fn record(&self, player_id: PlayerId) -> Option<&SeasonPointsRecord> {
        self.records.get(&player_id)
    }

    pub fn tournaments_applied(&self) -> usize {
        self.applied.len()
    }

    pub fn is_applied(&self, tournament_id: TournamentId) -> bool {
        self.applied.contains(&tournament_id)
    }
}
