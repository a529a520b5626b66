//! Tournament data models for league nights.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Player ID type
pub type PlayerId = i64;

/// Tournament ID type
pub type TournamentId = i64;

/// Table ID type
pub type TableId = i64;

/// League member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    /// Display name
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Global dealer flag, can be overridden per tournament
    pub is_dealer: bool,
    pub notes: Option<String>,
}

impl Player {
    /// Create a player with only the required fields set
    pub fn new(id: PlayerId, name: impl Into<String>, is_dealer: bool) -> Self {
        Self {
            id,
            name: name.into(),
            email: None,
            phone: None,
            is_dealer,
            notes: None,
        }
    }

    /// Apply the fields present in `patch`
    ///
    /// # Returns
    ///
    /// * `bool` - Whether any field changed
    pub fn apply_patch(&mut self, patch: PlayerPatch) -> bool {
        let mut changed = false;

        if let Some(name) = patch.name {
            changed |= self.name != name;
            self.name = name;
        }
        if let Some(email) = patch.email {
            changed |= self.email != email;
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            changed |= self.phone != phone;
            self.phone = phone;
        }
        if let Some(is_dealer) = patch.is_dealer {
            changed |= self.is_dealer != is_dealer;
            self.is_dealer = is_dealer;
        }
        if let Some(notes) = patch.notes {
            changed |= self.notes != notes;
            self.notes = notes;
        }

        changed
    }
}

/// Updatable player fields.
///
/// `None` leaves a field untouched. Nullable fields use a nested `Option` so a
/// patch can clear them (`Some(None)`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerPatch {
    pub name: Option<String>,
    pub email: Option<Option<String>>,
    pub phone: Option<Option<String>>,
    pub is_dealer: Option<bool>,
    pub notes: Option<Option<String>>,
}

impl PlayerPatch {
    /// Whether the patch carries no updates
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.is_dealer.is_none()
            && self.notes.is_none()
    }
}

/// Participant status within a tournament
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticipantStatus {
    /// Still playing
    Active,
    /// Knocked out, finishing position recorded
    Eliminated,
    /// Last player standing
    Champion,
}

impl std::fmt::Display for ParticipantStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParticipantStatus::Active => write!(f, "active"),
            ParticipantStatus::Eliminated => write!(f, "eliminated"),
            ParticipantStatus::Champion => write!(f, "champion"),
        }
    }
}

/// A player entered in one tournament.
///
/// `position` is set exactly when `status` is not [`ParticipantStatus::Active`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentParticipant {
    pub tournament_id: TournamentId,
    pub player_id: PlayerId,
    /// Copied from the player at registration for standings display
    pub name: String,
    /// Per-tournament dealer flag
    pub is_dealer: bool,
    pub status: ParticipantStatus,
    /// Finishing position (1 = winner)
    pub position: Option<i64>,
    pub buyin_paid: bool,
    pub rebuy_count: u32,
    pub addon_count: u32,
}

impl TournamentParticipant {
    /// Whether the participant is still in the tournament
    pub fn is_active(&self) -> bool {
        self.status == ParticipantStatus::Active
    }
}

/// Table used by a tournament
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub id: TableId,
    pub tournament_id: TournamentId,
    /// Dense table number starting at 1
    pub table_number: usize,
    /// Seat capacity, uniform across a tournament's tables
    pub max_seats: usize,
}

/// Binding of a participant to a seat.
///
/// Superseded assignments stay around with `is_current = false` for audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatAssignment {
    pub id: i64,
    pub tournament_id: TournamentId,
    pub table_number: usize,
    pub player_id: PlayerId,
    pub seat_number: usize,
    pub is_current: bool,
    pub assigned_at: DateTime<Utc>,
}

/// Season-long point accumulator for one player
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonPointsRecord {
    pub player_id: PlayerId,
    pub season_name: String,
    pub participation_points: i64,
    pub position_points: i64,
    pub rebuy_penalty_points: i64,
    pub total_points: i64,
    /// Number of tournaments that contributed to this record
    pub tournaments_played: u32,
    /// Best finishing position across contributing tournaments
    pub best_finish: Option<i64>,
}
