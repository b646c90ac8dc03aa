use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Number of guest rooms in the building
pub const TOTAL_ROOMS: u16 = 157;

pub type RoomNumber = u16;

// ============================================================================
// Status
// ============================================================================

/// Occupancy of a room for the current day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    #[default]
    Available,
    Occupied,
}

impl RoomStatus {
    /// Lowercase code used in CSS classes and the API
    pub fn code(&self) -> &'static str {
        match self {
            RoomStatus::Available => "available",
            RoomStatus::Occupied => "occupied",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RoomStatus::Available => "Available",
            RoomStatus::Occupied => "Occupied",
        }
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// Status map (GET /api/room_status)
// ============================================================================

/// Room number -> status, as returned by `/api/room_status`.
///
/// The wire format is a JSON object keyed by the stringified room number.
/// Rooms missing from the map are treated as available.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomStatusMap(pub BTreeMap<RoomNumber, RoomStatus>);

impl RoomStatusMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status_of(&self, room: RoomNumber) -> RoomStatus {
        self.0.get(&room).copied().unwrap_or_default()
    }

    pub fn set(&mut self, room: RoomNumber, status: RoomStatus) {
        self.0.insert(room, status);
    }

    /// Occupied rooms among `1..=total_rooms`
    pub fn occupied_count(&self, total_rooms: u16) -> usize {
        (1..=total_rooms)
            .filter(|n| self.status_of(*n) == RoomStatus::Occupied)
            .count()
    }

    pub fn available_count(&self, total_rooms: u16) -> usize {
        usize::from(total_rooms) - self.occupied_count(total_rooms)
    }
}

// ============================================================================
// Available rooms (GET /api/available_rooms)
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableRoomsResponse {
    pub available_rooms: Vec<RoomNumber>,
    pub total_rooms: u16,
    pub occupied_count: usize,
    pub available_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_map_from_api_json() {
        let json = r#"{"1":"occupied","2":"available","157":"occupied"}"#;
        let map: RoomStatusMap = serde_json::from_str(json).unwrap();
        assert_eq!(map.status_of(1), RoomStatus::Occupied);
        assert_eq!(map.status_of(2), RoomStatus::Available);
        assert_eq!(map.status_of(3), RoomStatus::Available);
        assert_eq!(map.occupied_count(TOTAL_ROOMS), 2);
        assert_eq!(map.available_count(TOTAL_ROOMS), 155);
    }

    #[test]
    fn test_counts_ignore_rooms_outside_range() {
        let mut map = RoomStatusMap::new();
        map.set(200, RoomStatus::Occupied);
        map.set(5, RoomStatus::Occupied);
        assert_eq!(map.occupied_count(10), 1);
        assert_eq!(map.available_count(10), 9);
    }

    #[test]
    fn test_available_rooms_response() {
        let json = r#"{"available_rooms":[2,3],"total_rooms":157,"occupied_count":155,"available_count":2}"#;
        let resp: AvailableRoomsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.available_rooms, vec![2, 3]);
        assert_eq!(resp.available_count, 2);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(RoomStatus::Occupied.to_string(), "occupied");
        assert_eq!(RoomStatus::Available.display_name(), "Available");
    }
}
