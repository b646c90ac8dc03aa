//! Reactive form validation on top of the shared rule tables.
//!
//! [`FormValidator`] keeps a [`FieldStatus`] per rule-bound field and decides
//! whether a submit may go ahead. [`ValidatedField`] is the input widget:
//! debounced validation while typing, immediate validation on blur, and an
//! inline `.field-error` message while the value is invalid.

use crate::shared::debounce::Debouncer;
use crate::shared::notifications::NotificationService;
use contracts::domain::a002_checkin::mask_digits;
use contracts::shared::validation::{
    find_rule, validate_form, validate_value, FieldRule, FormReport, FORM_INVALID_MESSAGE,
};
use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;
use std::collections::HashMap;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldStatus {
    #[default]
    Untouched,
    Valid,
    Invalid(String),
}

impl FieldStatus {
    pub fn css_class(&self) -> &'static str {
        match self {
            FieldStatus::Untouched => "",
            FieldStatus::Valid => "valid",
            FieldStatus::Invalid(_) => "invalid",
        }
    }

    pub fn error(&self) -> Option<String> {
        match self {
            FieldStatus::Invalid(message) => Some(message.clone()),
            _ => None,
        }
    }

    fn from_result<E: ToString>(result: &Result<(), E>) -> Self {
        match result {
            Ok(()) => FieldStatus::Valid,
            Err(e) => FieldStatus::Invalid(e.to_string()),
        }
    }
}

/// Validation state of one form, bound to a static rule table
#[derive(Clone, Copy)]
pub struct FormValidator {
    rules: &'static [FieldRule],
    statuses: RwSignal<HashMap<&'static str, FieldStatus>>,
    debounce_ms: u32,
}

impl FormValidator {
    pub fn new(rules: &'static [FieldRule], debounce_ms: u32) -> Self {
        Self {
            rules,
            statuses: RwSignal::new(HashMap::new()),
            debounce_ms,
        }
    }

    pub fn rule(&self, name: &str) -> Option<&'static FieldRule> {
        find_rule(self.rules, name)
    }

    pub fn debounce_ms(&self) -> u32 {
        self.debounce_ms
    }

    /// Current status of a field (tracked)
    pub fn status(&self, name: &str) -> FieldStatus {
        self.statuses
            .with(|m| m.get(name).cloned().unwrap_or_default())
    }

    /// Validate one field and record the outcome. Fields without a rule
    /// are always valid.
    pub fn validate_field(&self, name: &str, value: &str) -> bool {
        let Some(rule) = self.rule(name) else {
            return true;
        };
        let result = validate_value(rule, value);
        let valid = result.is_ok();
        self.statuses.update(|m| {
            m.insert(rule.name, FieldStatus::from_result(&result));
        });
        valid
    }

    /// Validate every present rule-bound field and record all outcomes
    pub fn validate_form<'a, F>(&self, lookup: F) -> FormReport
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        let report = validate_form(self.rules, lookup);

        for name in &report.valid {
            log::debug!("Field {}: VALID", name);
        }
        for e in &report.errors {
            log::debug!("Field {}: INVALID ({})", e.field, e.error);
        }
        for name in &report.skipped {
            log::debug!("Field {}: NOT FOUND in form", name);
        }
        log::debug!(
            "Form validation summary: valid={}, errors={:?}",
            report.is_valid(),
            report.invalid_fields()
        );

        self.statuses.update(|m| {
            for name in &report.valid {
                m.insert(*name, FieldStatus::Valid);
            }
            for e in &report.errors {
                m.insert(e.field, FieldStatus::Invalid(e.error.to_string()));
            }
        });
        report
    }

    /// Run on `submit`: blocks the native post when any field is invalid.
    /// Returns whether the submit may proceed.
    pub fn gate_submit<'a, F>(
        &self,
        ev: &SubmitEvent,
        notifications: &NotificationService,
        lookup: F,
    ) -> bool
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        let report = self.validate_form(lookup);
        if report.is_valid() {
            log::info!("Form validation passed, allowing submission");
            true
        } else {
            ev.prevent_default();
            log::warn!(
                "Form submission prevented, invalid fields: {:?}",
                report.invalid_fields()
            );
            notifications.error(FORM_INVALID_MESSAGE);
            false
        }
    }

    pub fn reset(&self) {
        self.statuses.set(HashMap::new());
    }
}

/// Labelled input bound to a [`FormValidator`] rule
#[component]
pub fn ValidatedField(
    validator: FormValidator,
    /// `name` and `id` of the input; must match a rule to be validated
    name: &'static str,
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    /// Input type, "text" by default
    #[prop(optional)]
    input_type: Option<&'static str>,
    /// Render a textarea instead of an input
    #[prop(optional)]
    multiline: bool,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Keep digits only, at most this many
    #[prop(optional_no_strip)]
    mask_len: Option<usize>,
    /// Applied to the value when the field loses focus
    #[prop(optional)]
    blur_transform: Option<fn(&str) -> String>,
    /// Display-only rendering, exposed as `data-formatted` and a hint line
    #[prop(optional)]
    display_format: Option<fn(&str) -> String>,
    /// Id of a `<datalist>` with suggestions
    #[prop(optional, into)]
    list: MaybeProp<String>,
    #[prop(optional)]
    node_ref: Option<NodeRef<html::Input>>,
) -> impl IntoView {
    let rule = validator.rule(name);
    let label = rule.map(|r| r.label).unwrap_or(name);
    let required = rule.map(|r| r.required).unwrap_or(false);
    let node_ref = node_ref.unwrap_or_else(NodeRef::new);
    let debouncer = StoredValue::new_local(Debouncer::new(validator.debounce_ms()));

    let handle_input = move |ev: leptos::ev::Event| {
        let mut next = event_target_value(&ev);
        if let Some(max_len) = mask_len {
            let masked = mask_digits(&next, max_len);
            if masked != next {
                if let Some(input) = ev
                    .target()
                    .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
                {
                    input.set_value(&masked);
                }
                next = masked;
            }
        }
        on_change.run(next.clone());
        debouncer.with_value(|d| {
            d.call(move || {
                validator.validate_field(name, &next);
            })
        });
    };

    let handle_blur = move |ev: leptos::ev::FocusEvent| {
        let mut current = event_target_value(&ev);
        if let Some(transform) = blur_transform {
            let transformed = transform(&current);
            if transformed != current {
                on_change.run(transformed.clone());
                current = transformed;
            }
        }
        debouncer.with_value(|d| d.cancel());
        validator.validate_field(name, &current);
    };

    let input_class = move || format!("form__input {}", validator.status(name).css_class());
    let formatted = move || display_format.map(|f| f(&value.get()));

    let control = if multiline {
        view! {
            <textarea
                id=name
                name=name
                class=input_class
                rows="2"
                placeholder=move || placeholder.get().unwrap_or_default()
                prop:value=move || value.get()
                on:input=handle_input
                on:blur=handle_blur
            />
        }
        .into_any()
    } else {
        view! {
            <input
                id=name
                name=name
                node_ref=node_ref
                class=input_class
                type=input_type.unwrap_or("text")
                placeholder=move || placeholder.get().unwrap_or_default()
                list=move || list.get()
                inputmode=mask_len.map(|_| "numeric")
                data-formatted=formatted
                prop:value=move || value.get()
                on:input=handle_input
                on:blur=handle_blur
            />
        }
        .into_any()
    };

    view! {
        <div class="form__group">
            <label class="form__label" for=name>
                {label}
                {required.then_some(" *")}
            </label>
            {control}
            {move || {
                formatted()
                    .filter(|f| !f.is_empty())
                    .map(|f| view! { <small class="form__hint">{f}</small> })
            }}
            {move || {
                validator
                    .status(name)
                    .error()
                    .map(|message| view! { <div class="field-error">{message}</div> })
            }}
        </div>
    }
}
