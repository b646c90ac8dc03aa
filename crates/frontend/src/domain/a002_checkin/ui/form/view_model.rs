use super::model;
use crate::shared::config::AppConfig;
use crate::shared::form_validator::FormValidator;
use crate::shared::format::{compute_total, format_currency};
use crate::shared::notifications::NotificationService;
use contracts::domain::a001_room::RoomNumber;
use contracts::domain::a002_checkin::{CheckinDto, CHECKIN_RULES};
use gloo_timers::future::TimeoutFuture;
use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

pub const RESET_CONFIRM_MESSAGE: &str =
    "Are you sure you want to reset the form? All entered data will be lost.";

/// Text of the derived total line, if there is a positive total
pub fn total_label(paid: &str, remaining: &str) -> Option<String> {
    compute_total(paid, remaining).map(|total| format!("Total Amount: {}", format_currency(total)))
}

/// ViewModel for the guest check-in form
#[derive(Clone)]
pub struct CheckinFormViewModel {
    pub form: RwSignal<CheckinDto>,
    pub validator: FormValidator,
    pub available_rooms: RwSignal<Vec<RoomNumber>>,
    pub submitting: RwSignal<bool>,
    submit_fallback_ms: u32,
    api_base: String,
    notifications: NotificationService,
}

impl CheckinFormViewModel {
    pub fn new(config: &AppConfig, notifications: NotificationService) -> Self {
        Self {
            form: RwSignal::new(CheckinDto::default()),
            validator: FormValidator::new(CHECKIN_RULES, config.validation_debounce_ms),
            available_rooms: RwSignal::new(Vec::new()),
            submitting: RwSignal::new(false),
            submit_fallback_ms: config.submit_fallback_ms,
            api_base: config.api_base.clone(),
            notifications,
        }
    }

    /// Reactive value of one field
    pub fn field(&self, name: &'static str) -> Signal<String> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.field(name).unwrap_or_default().to_string()))
    }

    /// Setter callback for one field
    pub fn setter(&self, name: &'static str) -> Callback<String> {
        let form = self.form;
        Callback::new(move |value: String| {
            form.update(|f| {
                f.set_field(name, value);
            });
        })
    }

    pub fn total_label(&self) -> Option<String> {
        self.form
            .with(|f| total_label(&f.amount_paid_today, &f.remaining_amount))
    }

    /// Suggestions for the room number field
    pub fn load_available_rooms(&self) {
        let rooms = self.available_rooms;
        let notifications = self.notifications;
        let api_base = self.api_base.clone();
        spawn_local(async move {
            match model::fetch_available_rooms(&api_base).await {
                Ok(resp) => {
                    log::debug!(
                        "{} of {} rooms available",
                        resp.available_count,
                        resp.total_rooms
                    );
                    rooms.set(resp.available_rooms);
                }
                Err(e) => {
                    log::error!("Error loading available rooms: {}", e);
                    notifications.error("Failed to load available rooms");
                }
            }
        });
    }

    /// `submit` handler: validates, and lets the native post through only
    /// when every field passes
    pub fn submit_command(&self, ev: SubmitEvent) {
        let validator = self.validator;
        let notifications = self.notifications;
        let allowed = self
            .form
            .with_untracked(|f| validator.gate_submit(&ev, &notifications, |name| f.field(name)));
        if !allowed {
            return;
        }

        let submitting = self.submitting;
        let fallback_ms = self.submit_fallback_ms;
        submitting.set(true);
        spawn_local(async move {
            TimeoutFuture::new(fallback_ms).await;
            submitting.set(false);
        });
    }

    /// Reset after confirmation; focuses `first_field` afterwards
    pub fn reset_command(&self, first_field: NodeRef<html::Input>) {
        if !confirm(RESET_CONFIRM_MESSAGE) {
            return;
        }
        self.form.set(CheckinDto::default());
        self.validator.reset();
        if let Some(input) = first_field.get_untracked() {
            let _ = input.focus();
        }
        log::info!("Check-in form reset");
        self.notifications.info("Form has been reset");
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
