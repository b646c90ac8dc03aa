use crate::domain::a001_room::RoomNumber;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One guest stay shown on the calendar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingSummary {
    pub guest_name: String,
    pub room_number: RoomNumber,
    #[serde(default)]
    pub check_out: Option<NaiveDate>,
}

/// Bookings for a single calendar day.
///
/// The server embeds a `Vec<DayBookings>` for the shown month in a
/// `<script id="calendar-bookings" type="application/json">` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayBookings {
    pub date: NaiveDate,
    #[serde(default)]
    pub bookings: Vec<BookingSummary>,
}

impl DayBookings {
    /// Guest names joined for a hover tooltip
    pub fn tooltip(&self) -> String {
        self.bookings
            .iter()
            .map(|b| format!("{} (Room {})", b.guest_name, b.room_number))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_data_island() {
        let json = r#"[
            {"date": "2025-03-04", "bookings": [
                {"guest_name": "Asha Rao", "room_number": 12, "check_out": "2025-03-06"},
                {"guest_name": "Ravi Jain", "room_number": 40}
            ]},
            {"date": "2025-03-05"}
        ]"#;
        let days: Vec<DayBookings> = serde_json::from_str(json).unwrap();
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2025, 3, 4).unwrap());
        assert_eq!(days[0].bookings[1].check_out, None);
        assert!(days[1].bookings.is_empty());
        assert_eq!(
            days[0].tooltip(),
            "Asha Rao (Room 12), Ravi Jain (Room 40)"
        );
    }
}
