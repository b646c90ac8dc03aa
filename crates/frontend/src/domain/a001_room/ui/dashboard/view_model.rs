use super::model;
use crate::shared::config::AppConfig;
use crate::shared::notifications::{NotificationKind, NotificationService};
use contracts::domain::a001_room::{RoomNumber, RoomStatus, RoomStatusMap};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// One cell of the room grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomCell {
    pub number: RoomNumber,
    pub status: RoomStatus,
}

impl RoomCell {
    pub fn css_class(&self) -> String {
        format!("room-cell {}", self.status.code())
    }

    pub fn title(&self) -> String {
        format!("Room {}: {}", self.number, self.status.code())
    }
}

/// Cells for rooms `1..=total_rooms` in order
pub fn room_cells(statuses: &RoomStatusMap, total_rooms: u16) -> Vec<RoomCell> {
    (1..=total_rooms)
        .map(|number| RoomCell {
            number,
            status: statuses.status_of(number),
        })
        .collect()
}

/// Notification text and kind shown when a room is clicked
pub fn room_details(number: RoomNumber, status: RoomStatus) -> (String, NotificationKind) {
    let kind = match status {
        RoomStatus::Occupied => NotificationKind::Info,
        RoomStatus::Available => NotificationKind::Success,
    };
    (
        format!("Room {} is currently {}", number, status.display_name()),
        kind,
    )
}

/// ViewModel for the room occupancy dashboard
#[derive(Clone)]
pub struct DashboardViewModel {
    pub statuses: RwSignal<RoomStatusMap>,
    pub loading: RwSignal<bool>,
    pub total_rooms: u16,
    fetch_enabled: bool,
    api_base: String,
    notifications: NotificationService,
}

impl DashboardViewModel {
    pub fn new(config: &AppConfig, notifications: NotificationService) -> Self {
        Self {
            statuses: RwSignal::new(RoomStatusMap::new()),
            loading: RwSignal::new(false),
            total_rooms: config.total_rooms,
            fetch_enabled: config.room_status_fetch_enabled,
            api_base: config.api_base.clone(),
            notifications,
        }
    }

    pub fn cells(&self) -> Vec<RoomCell> {
        let total = self.total_rooms;
        self.statuses.with(|s| room_cells(s, total))
    }

    pub fn occupied_count(&self) -> usize {
        let total = self.total_rooms;
        self.statuses.with(|s| s.occupied_count(total))
    }

    pub fn available_count(&self) -> usize {
        let total = self.total_rooms;
        self.statuses.with(|s| s.available_count(total))
    }

    /// Fetch room status from the server, if enabled
    pub fn load_room_status(&self) {
        if !self.fetch_enabled {
            log::debug!("Room status loading is disabled; grid shows last known state");
            return;
        }

        let statuses = self.statuses;
        let loading = self.loading;
        let notifications = self.notifications;
        let api_base = self.api_base.clone();
        loading.set(true);
        spawn_local(async move {
            match model::fetch_room_status(&api_base).await {
                Ok(map) => {
                    log::debug!("Loaded room status for {} rooms", map.0.len());
                    statuses.set(map);
                }
                Err(e) => {
                    log::error!("Error loading room status: {}", e);
                    notifications.error("Failed to load room status");
                }
            }
            loading.set(false);
        });
    }

    /// Refresh button command
    pub fn refresh(&self) {
        self.load_room_status();
        self.notifications.success("Dashboard refreshed");
    }

    pub fn show_room_details(&self, number: RoomNumber) {
        let status = self.statuses.with_untracked(|s| s.status_of(number));
        let (message, kind) = room_details(number, status);
        self.notifications.notify(message, kind);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_cells_cover_every_room() {
        let mut map = RoomStatusMap::new();
        map.set(3, RoomStatus::Occupied);
        let cells = room_cells(&map, 157);
        assert_eq!(cells.len(), 157);
        assert_eq!(cells[0].number, 1);
        assert_eq!(cells[156].number, 157);
        assert_eq!(cells[2].status, RoomStatus::Occupied);
        assert_eq!(cells[2].css_class(), "room-cell occupied");
        assert_eq!(cells[0].title(), "Room 1: available");
    }

    #[test]
    fn test_room_details() {
        assert_eq!(
            room_details(12, RoomStatus::Occupied),
            (
                "Room 12 is currently Occupied".to_string(),
                NotificationKind::Info
            )
        );
        assert_eq!(
            room_details(7, RoomStatus::Available),
            (
                "Room 7 is currently Available".to_string(),
                NotificationKind::Success
            )
        );
    }
}
