use chrono::{Datelike, Local, NaiveDate};
use contracts::domain::a003_booking::DayBookings;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Id of the `<script type="application/json">` block the server embeds
pub const BOOKING_ISLAND_ID: &str = "calendar-bookings";

/// A calendar month, shown as `YYYY-MM`. Always a month chrono can represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    /// 1..=12
    month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(Self::of)
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn today() -> Self {
        Self::of(Local::now().date_naive())
    }

    /// Move by `delta` months, rolling over years. `None` past chrono's range.
    pub fn shift(self, delta: i32) -> Option<Self> {
        let index = self
            .year
            .checked_mul(12)?
            .checked_add(self.month as i32 - 1)?
            .checked_add(delta)?;
        Self::new(index.div_euclid(12), index.rem_euclid(12) as u32 + 1)
    }

    pub fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    pub fn days(self) -> impl Iterator<Item = NaiveDate> {
        let month = self.month;
        self.first_day()
            .iter_days()
            .take_while(move |d| d.month() == month)
    }

    /// Human title, e.g. "March 2025"
    pub fn title(self) -> String {
        self.first_day().format("%B %Y").to_string()
    }

    pub fn calendar_url(self) -> String {
        let query = MonthQuery {
            month: Some(self.to_string()),
        };
        match serde_qs::to_string(&query) {
            Ok(qs) => format!("/calendar?{}", qs),
            Err(_) => format!("/calendar?month={}", self),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| format!("Invalid month: {}", s))?;
        let all_digits = |part: &str, len: usize| {
            part.len() == len && part.bytes().all(|b| b.is_ascii_digit())
        };
        if !all_digits(year, 4) || !all_digits(month, 2) {
            return Err(format!("Expected YYYY-MM, got {}", s));
        }
        let year = year
            .parse::<i32>()
            .map_err(|e| format!("Invalid year in {}: {}", s, e))?;
        let month = month
            .parse::<u32>()
            .map_err(|e| format!("Invalid month in {}: {}", s, e))?;
        YearMonth::new(year, month).ok_or_else(|| format!("Month out of range: {}", s))
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct MonthQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    month: Option<String>,
}

/// `month` from a location search string such as `?month=2025-03`
pub fn month_from_query(search: &str) -> Option<YearMonth> {
    let query: MonthQuery = serde_qs::from_str(search.trim_start_matches('?')).ok()?;
    query.month?.parse().ok()
}

/// Grid cells for a Monday-first month view; `None` pads the first week
pub fn month_grid(ym: YearMonth) -> Vec<Option<NaiveDate>> {
    let lead = ym.first_day().weekday().num_days_from_monday() as usize;
    std::iter::repeat(None)
        .take(lead)
        .chain(ym.days().map(Some))
        .collect()
}

pub fn parse_booking_island(text: &str) -> Result<Vec<DayBookings>, String> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(text).map_err(|e| format!("Invalid booking data: {}", e))
}

/// Bookings embedded in the page, empty when the server sent none
pub fn read_booking_island() -> Result<Vec<DayBookings>, String> {
    let text = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(BOOKING_ISLAND_ID))
        .and_then(|el| el.text_content())
        .unwrap_or_default();
    parse_booking_island(&text)
}

pub fn current_search() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

pub fn navigate_to(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(url) {
            log::error!("Navigation to {} failed: {:?}", url, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ym(year: i32, month: u32) -> YearMonth {
        YearMonth::new(year, month).unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("2025-03".parse::<YearMonth>(), Ok(ym(2025, 3)));
        assert_eq!(ym(2025, 3).to_string(), "2025-03");
        assert!("2025-13".parse::<YearMonth>().is_err());
        assert!("2025".parse::<YearMonth>().is_err());
        assert!("march".parse::<YearMonth>().is_err());
        assert!("200000000-03".parse::<YearMonth>().is_err());
        assert!("25-3".parse::<YearMonth>().is_err());
        assert!("2025-3".parse::<YearMonth>().is_err());
        assert!("+025-03".parse::<YearMonth>().is_err());
    }

    #[test]
    fn test_shift_rolls_over_years() {
        assert_eq!(ym(2024, 12).shift(1), Some(ym(2025, 1)));
        assert_eq!(ym(2025, 1).shift(-1), Some(ym(2024, 12)));
        assert_eq!(ym(2025, 6).shift(0), Some(ym(2025, 6)));
        assert_eq!(ym(2025, 6).shift(-18), Some(ym(2023, 12)));
    }

    #[test]
    fn test_shift_out_of_range() {
        assert_eq!(ym(2025, 6).shift(i32::MAX), None);
        assert_eq!(ym(2025, 6).shift(i32::MIN), None);
    }

    #[test]
    fn test_new_rejects_unrepresentable_months() {
        assert_eq!(YearMonth::new(2025, 0), None);
        assert_eq!(YearMonth::new(2025, 13), None);
        assert_eq!(YearMonth::new(200_000_000, 3), None);
        assert_eq!(ym(2025, 3).year(), 2025);
        assert_eq!(ym(2025, 3).month(), 3);
    }

    #[test]
    fn test_calendar_url() {
        assert_eq!(ym(2025, 3).calendar_url(), "/calendar?month=2025-03");
        assert_eq!(
            ym(2024, 12).shift(1).map(|m| m.calendar_url()),
            Some("/calendar?month=2025-01".to_string())
        );
    }

    #[test]
    fn test_month_from_query() {
        assert_eq!(month_from_query("?month=2025-03"), Some(ym(2025, 3)));
        assert_eq!(month_from_query("month=2024-11&x=1"), Some(ym(2024, 11)));
        assert_eq!(month_from_query("?month=bad"), None);
        assert_eq!(month_from_query(""), None);
        // falls back to today in the view model
        assert_eq!(month_from_query("?month=200000000-03"), None);
        assert_eq!(month_from_query("?month=25-3"), None);
        assert_eq!(month_from_query("?month=2025-3"), None);
    }

    #[test]
    fn test_month_grid() {
        // 1 March 2025 is a Saturday: five blanks before it
        let grid = month_grid(ym(2025, 3));
        assert_eq!(grid.iter().take_while(|c| c.is_none()).count(), 5);
        assert_eq!(grid.iter().filter(|c| c.is_some()).count(), 31);
        assert_eq!(grid[5], NaiveDate::from_ymd_opt(2025, 3, 1));

        // February in a leap year
        assert_eq!(ym(2024, 2).days().count(), 29);
        assert_eq!(ym(2023, 2).days().count(), 28);
    }

    #[test]
    fn test_title() {
        assert_eq!(ym(2025, 3).title(), "March 2025");
    }

    #[test]
    fn test_parse_booking_island() {
        assert_eq!(parse_booking_island("  "), Ok(Vec::new()));
        assert!(parse_booking_island("{oops").is_err());
        let days = parse_booking_island(
            r#"[{"date":"2025-03-04","bookings":[{"guest_name":"Asha","room_number":3}]}]"#,
        )
        .unwrap();
        assert_eq!(days[0].bookings[0].room_number, 3);
    }
}
