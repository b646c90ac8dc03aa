use super::model::{self, YearMonth};
use chrono::NaiveDate;
use contracts::domain::a003_booking::DayBookings;
use leptos::prelude::*;

const HOVER_STYLE: &str = "transform: scale(1.02); z-index: 10;";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarKeyAction {
    PreviousMonth,
    NextMonth,
    CloseDetails,
}

pub fn calendar_key_action(key: &str) -> Option<CalendarKeyAction> {
    match key {
        "ArrowLeft" => Some(CalendarKeyAction::PreviousMonth),
        "ArrowRight" => Some(CalendarKeyAction::NextMonth),
        "Escape" => Some(CalendarKeyAction::CloseDetails),
        _ => None,
    }
}

/// ViewModel for the month calendar
#[derive(Clone)]
pub struct CalendarViewModel {
    pub month: YearMonth,
    bookings: StoredValue<Vec<DayBookings>>,
    pub selected: RwSignal<Option<NaiveDate>>,
    pub hovered: RwSignal<Option<NaiveDate>>,
}

impl CalendarViewModel {
    pub fn new(month: YearMonth, bookings: Vec<DayBookings>) -> Self {
        Self {
            month,
            bookings: StoredValue::new(bookings),
            selected: RwSignal::new(None),
            hovered: RwSignal::new(None),
        }
    }

    /// Month from `?month=`, falling back to today
    pub fn from_location() -> Self {
        let month =
            model::month_from_query(&model::current_search()).unwrap_or_else(YearMonth::today);
        let bookings = model::read_booking_island().unwrap_or_else(|e| {
            log::warn!("{}", e);
            Vec::new()
        });
        log::debug!("Calendar for {} with {} booked days", month, bookings.len());
        Self::new(month, bookings)
    }

    pub fn cells(&self) -> Vec<Option<NaiveDate>> {
        model::month_grid(self.month)
    }

    pub fn bookings_for(&self, date: NaiveDate) -> Option<DayBookings> {
        self.bookings.with_value(|all| {
            all.iter()
                .find(|d| d.date == date && !d.bookings.is_empty())
                .cloned()
        })
    }

    pub fn has_bookings(&self, date: NaiveDate) -> bool {
        self.bookings_for(date).is_some()
    }

    /// Inline style for a day cell; only booked days react to hover
    pub fn day_style(&self, date: NaiveDate) -> &'static str {
        if self.hovered.get() == Some(date) && self.has_bookings(date) {
            HOVER_STYLE
        } else {
            ""
        }
    }

    pub fn navigate_month(&self, delta: i32) {
        let Some(target) = self.month.shift(delta) else {
            log::warn!("No month {} away from {}", delta, self.month);
            return;
        };
        let url = target.calendar_url();
        log::info!("Navigating to {}", url);
        model::navigate_to(&url);
    }

    pub fn select_day(&self, date: NaiveDate) {
        if self.has_bookings(date) {
            self.selected.set(Some(date));
        }
    }

    pub fn close_booking_details(&self) {
        self.selected.set(None);
    }

    pub fn selected_bookings(&self) -> Option<DayBookings> {
        self.selected.get().and_then(|d| self.bookings_for(d))
    }

    pub fn handle_key(&self, key: &str) {
        match calendar_key_action(key) {
            Some(CalendarKeyAction::PreviousMonth) => self.navigate_month(-1),
            Some(CalendarKeyAction::NextMonth) => self.navigate_month(1),
            Some(CalendarKeyAction::CloseDetails) => self.close_booking_details(),
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_booking::BookingSummary;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    fn vm() -> CalendarViewModel {
        CalendarViewModel::new(
            YearMonth::new(2025, 3).unwrap(),
            vec![
                DayBookings {
                    date: date(4),
                    bookings: vec![BookingSummary {
                        guest_name: "Asha Rao".to_string(),
                        room_number: 12,
                        check_out: None,
                    }],
                },
                DayBookings {
                    date: date(5),
                    bookings: Vec::new(),
                },
            ],
        )
    }

    #[test]
    fn test_calendar_key_action() {
        assert_eq!(
            calendar_key_action("ArrowLeft"),
            Some(CalendarKeyAction::PreviousMonth)
        );
        assert_eq!(
            calendar_key_action("ArrowRight"),
            Some(CalendarKeyAction::NextMonth)
        );
        assert_eq!(
            calendar_key_action("Escape"),
            Some(CalendarKeyAction::CloseDetails)
        );
        assert_eq!(calendar_key_action("a"), None);
    }

    #[test]
    fn test_has_bookings_ignores_empty_days() {
        let vm = vm();
        assert!(vm.has_bookings(date(4)));
        assert!(!vm.has_bookings(date(5)));
        assert!(!vm.has_bookings(date(6)));
    }

    #[test]
    fn test_select_and_close() {
        let vm = vm();
        vm.select_day(date(6));
        assert_eq!(vm.selected.get_untracked(), None);
        vm.select_day(date(4));
        assert_eq!(vm.selected.get_untracked(), Some(date(4)));
        vm.handle_key("Escape");
        assert_eq!(vm.selected.get_untracked(), None);
    }

    #[test]
    fn test_hover_style_only_on_booked_days() {
        let vm = vm();
        vm.hovered.set(Some(date(4)));
        assert_eq!(vm.day_style(date(4)), HOVER_STYLE);
        vm.hovered.set(Some(date(5)));
        assert_eq!(vm.day_style(date(5)), "");
        assert_eq!(vm.day_style(date(4)), "");
    }
}
