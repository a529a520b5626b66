//! In-memory roster of a single tournament.

use super::{
    errors::{TournamentError, TournamentResult},
    models::{ParticipantStatus, Player, PlayerId, TournamentId, TournamentParticipant},
};
use crate::{scoring::ScoringEntry, seating::SeatingCandidate};

/// Participants of one tournament and their progress
#[derive(Debug, Clone)]
pub struct TournamentRoster {
    tournament_id: TournamentId,
    participants: Vec<TournamentParticipant>,
}

impl TournamentRoster {
    /// Create an empty roster
    pub fn new(tournament_id: TournamentId) -> Self {
        Self {
            tournament_id,
            participants: Vec::new(),
        }
    }

    pub fn tournament_id(&self) -> TournamentId {
        self.tournament_id
    }

    pub fn participants(&self) -> &[TournamentParticipant] {
        &self.participants
    }

    pub fn get(&self, player_id: PlayerId) -> Option<&TournamentParticipant> {
        self.participants.iter().find(|p| p.player_id == player_id)
    }

    /// Number of participants still playing
    pub fn active_count(&self) -> usize {
        self.participants.iter().filter(|p| p.is_active()).count()
    }

    /// Enter a player
    ///
    /// # Arguments
    ///
    /// * `player` - League member to enter
    /// * `is_dealer_override` - Per-tournament dealer flag, defaults to the player's own flag
    pub fn add_player(
        &mut self,
        player: &Player,
        is_dealer_override: Option<bool>,
    ) -> TournamentResult<()> {
        if self.get(player.id).is_some() {
            return Err(TournamentError::AlreadyRegistered(player.id));
        }

        self.participants.push(TournamentParticipant {
            tournament_id: self.tournament_id,
            player_id: player.id,
            name: player.name.clone(),
            is_dealer: is_dealer_override.unwrap_or(player.is_dealer),
            status: ParticipantStatus::Active,
            position: None,
            buyin_paid: false,
            rebuy_count: 0,
            addon_count: 0,
        });

        Ok(())
    }

    /// Withdraw a player entirely (registration mistakes, no-shows)
    pub fn remove_player(&mut self, player_id: PlayerId) -> TournamentResult<TournamentParticipant> {
        let idx = self.index_of(player_id)?;
        Ok(self.participants.remove(idx))
    }

    /// Knock a player out at `position`
    pub fn eliminate(&mut self, player_id: PlayerId, position: i64) -> TournamentResult<()> {
        if position <= 0 {
            return Err(TournamentError::InvalidPosition(position));
        }
        if self.position_taken(position) {
            return Err(TournamentError::PositionTaken(position));
        }

        let participant = self.active_mut(player_id)?;
        participant.status = ParticipantStatus::Eliminated;
        participant.position = Some(position);

        log::info!(
            "Tournament {}: player {} eliminated in position {}",
            self.tournament_id,
            player_id,
            position
        );
        Ok(())
    }

    /// Record a rebuy and return the new count
    pub fn record_rebuy(&mut self, player_id: PlayerId) -> TournamentResult<u32> {
        let participant = self.participant_mut(player_id)?;
        participant.rebuy_count += 1;
        Ok(participant.rebuy_count)
    }

    /// Record an add-on and return the new count
    pub fn record_addon(&mut self, player_id: PlayerId) -> TournamentResult<u32> {
        let participant = self.participant_mut(player_id)?;
        participant.addon_count += 1;
        Ok(participant.addon_count)
    }

    pub fn mark_buyin_paid(&mut self, player_id: PlayerId) -> TournamentResult<()> {
        self.participant_mut(player_id)?.buyin_paid = true;
        Ok(())
    }

    /// Crown the last remaining player with position 1
    pub fn finish(&mut self) -> TournamentResult<PlayerId> {
        let remaining = self.active_count();
        if remaining != 1 {
            return Err(TournamentError::NoChampion { remaining });
        }
        if self.position_taken(1) {
            return Err(TournamentError::PositionTaken(1));
        }

        let tournament_id = self.tournament_id;
        let champion = self
            .participants
            .iter_mut()
            .find(|p| p.is_active())
            .ok_or(TournamentError::NoChampion { remaining: 0 })?;
        champion.status = ParticipantStatus::Champion;
        champion.position = Some(1);

        log::info!("Tournament {}: player {} wins", tournament_id, champion.player_id);
        Ok(champion.player_id)
    }

    /// Active players in the shape the seating engine consumes
    pub fn seating_candidates(&self) -> Vec<SeatingCandidate> {
        self.participants
            .iter()
            .filter(|p| p.is_active())
            .map(|p| SeatingCandidate::new(p.player_id, p.is_dealer))
            .collect()
    }

    /// Every participant in the shape the scoring engine consumes
    pub fn scoring_entries(&self) -> Vec<ScoringEntry> {
        self.participants.iter().map(ScoringEntry::from).collect()
    }

    /// Standings: active players by name, then finishers by position
    pub fn standings(&self) -> Vec<&TournamentParticipant> {
        let mut standings: Vec<&TournamentParticipant> = self.participants.iter().collect();
        standings.sort_by(|a, b| {
            b.is_active()
                .cmp(&a.is_active())
                .then_with(|| a.position.cmp(&b.position))
                .then_with(|| a.name.cmp(&b.name))
        });
        standings
    }

    fn position_taken(&self, position: i64) -> bool {
        self.participants
            .iter()
            .any(|p| p.position == Some(position))
    }

    fn index_of(&self, player_id: PlayerId) -> TournamentResult<usize> {
        self.participants
            .iter()
            .position(|p| p.player_id == player_id)
            .ok_or(TournamentError::PlayerNotFound(player_id))
    }

    fn participant_mut(&mut self, player_id: PlayerId) -> TournamentResult<&mut TournamentParticipant> {
        let idx = self.index_of(player_id)?;
        Ok(&mut self.participants[idx])
    }

    fn active_mut(&mut self, player_id: PlayerId) -> TournamentResult<&mut TournamentParticipant> {
        let participant = self.participant_mut(player_id)?;
        if !participant.is_active() {
            return Err(TournamentError::NotActive(player_id));
        }
        Ok(participant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster_with(n: i64, dealers: i64) -> TournamentRoster {
        let mut roster = TournamentRoster::new(1);
        for id in 1..=n {
            let player = Player::new(id, format!("Player {id}"), id <= dealers);
            roster.add_player(&player, None).unwrap();
        }
        roster
    }

    #[test]
    fn test_add_player_uses_dealer_override() {
        let mut roster = TournamentRoster::new(7);
        roster.add_player(&Player::new(1, "Jenny", true), Some(false)).unwrap();
        roster.add_player(&Player::new(2, "Mark", false), None).unwrap();

        assert!(!roster.get(1).unwrap().is_dealer);
        assert!(!roster.get(2).unwrap().is_dealer);
        assert_eq!(roster.get(1).unwrap().tournament_id, 7);
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut roster = roster_with(1, 0);
        let err = roster
            .add_player(&Player::new(1, "Player 1", false), None)
            .unwrap_err();
        assert_eq!(err, TournamentError::AlreadyRegistered(1));
    }

    #[test]
    fn test_eliminate_sets_position_and_status() {
        let mut roster = roster_with(3, 1);
        roster.eliminate(3, 3).unwrap();

        let p = roster.get(3).unwrap();
        assert_eq!(p.status, ParticipantStatus::Eliminated);
        assert_eq!(p.position, Some(3));
        assert_eq!(roster.active_count(), 2);
        assert_eq!(roster.seating_candidates().len(), 2);
    }

    #[test]
    fn test_eliminate_rejects_bad_positions() {
        let mut roster = roster_with(3, 0);
        assert_eq!(roster.eliminate(1, 0), Err(TournamentError::InvalidPosition(0)));
        assert_eq!(roster.eliminate(1, -2), Err(TournamentError::InvalidPosition(-2)));

        roster.eliminate(1, 3).unwrap();
        assert_eq!(roster.eliminate(2, 3), Err(TournamentError::PositionTaken(3)));
        assert_eq!(roster.eliminate(1, 2), Err(TournamentError::NotActive(1)));
        assert_eq!(roster.eliminate(9, 2), Err(TournamentError::PlayerNotFound(9)));
    }

    #[test]
    fn test_rebuys_and_addons_accumulate() {
        let mut roster = roster_with(2, 0);
        assert_eq!(roster.record_rebuy(1).unwrap(), 1);
        assert_eq!(roster.record_rebuy(1).unwrap(), 2);
        assert_eq!(roster.record_addon(2).unwrap(), 1);
        roster.mark_buyin_paid(2).unwrap();

        assert_eq!(roster.get(1).unwrap().rebuy_count, 2);
        assert!(roster.get(2).unwrap().buyin_paid);
        assert!(roster.record_addon(5).is_err());
    }

    #[test]
    fn test_finish_crowns_last_player() {
        let mut roster = roster_with(3, 0);
        assert_eq!(roster.finish(), Err(TournamentError::NoChampion { remaining: 3 }));

        roster.eliminate(1, 3).unwrap();
        roster.eliminate(2, 2).unwrap();
        assert_eq!(roster.finish(), Ok(3));

        let champion = roster.get(3).unwrap();
        assert_eq!(champion.status, ParticipantStatus::Champion);
        assert_eq!(champion.position, Some(1));
        assert_eq!(roster.finish(), Err(TournamentError::NoChampion { remaining: 0 }));
    }

    #[test]
    fn test_standings_order() {
        let mut roster = roster_with(4, 0);
        roster.eliminate(2, 4).unwrap();
        roster.eliminate(4, 3).unwrap();

        let order: Vec<PlayerId> = roster.standings().iter().map(|p| p.player_id).collect();
        assert_eq!(order, vec![1, 3, 4, 2]);
    }

    #[test]
    fn test_remove_player() {
        let mut roster = roster_with(2, 0);
        let removed = roster.remove_player(2).unwrap();
        assert_eq!(removed.player_id, 2);
        assert_eq!(roster.participants().len(), 1);
        assert_eq!(roster.remove_player(2).unwrap_err(), TournamentError::PlayerNotFound(2));
    }

    #[test]
    fn test_client_message_hides_ids() {
        let msg = TournamentError::PlayerNotFound(42).client_message();
        assert!(!msg.contains("42"));
    }
}
