//! Declarative field validation shared by every form in the front desk.
//!
//! A form is described by a static table of [`FieldRule`]s. A single value is
//! checked with [`validate_value`]; a whole form with [`validate_form`].

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static SIX_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{6}$").expect("valid regex"));
static TEN_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{10}$").expect("valid regex"));
static TWELVE_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{12}$").expect("valid regex"));
static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

/// Message shown once when a submit is blocked by invalid fields
pub const FORM_INVALID_MESSAGE: &str = "Please fix the validation errors before submitting";

/// Format a field value must match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    SixDigits,
    TenDigits,
    TwelveDigits,
    Email,
}

impl Pattern {
    fn regex(self) -> &'static Regex {
        match self {
            Pattern::SixDigits => &SIX_DIGITS,
            Pattern::TenDigits => &TEN_DIGITS,
            Pattern::TwelveDigits => &TWELVE_DIGITS,
            Pattern::Email => &EMAIL,
        }
    }

    pub fn matches(self, value: &str) -> bool {
        self.regex().is_match(value)
    }
}

/// Validation rule for one named form field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRule {
    /// `name` attribute of the input
    pub name: &'static str,
    /// Human-readable label used in messages
    pub label: &'static str,
    pub required: bool,
    pub pattern: Option<Pattern>,
    /// Exact character count
    pub length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Overrides the default pattern-mismatch message
    pub message: Option<&'static str>,
}

impl FieldRule {
    pub const fn new(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            required: false,
            pattern: None,
            length: None,
            min: None,
            max: None,
            message: None,
        }
    }

    pub const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }

    pub const fn pattern(self, pattern: Pattern, message: &'static str) -> Self {
        Self {
            pattern: Some(pattern),
            message: Some(message),
            ..self
        }
    }

    pub const fn length(self, length: usize) -> Self {
        Self {
            length: Some(length),
            ..self
        }
    }

    pub const fn min(self, min: f64) -> Self {
        Self {
            min: Some(min),
            ..self
        }
    }

    pub const fn max(self, max: f64) -> Self {
        Self {
            max: Some(max),
            ..self
        }
    }

    fn is_bounded(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }
}

/// Why a single field value was rejected.
///
/// The `Display` text is the message shown next to the field.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{label} is required")]
    Required { label: &'static str },
    #[error("{message}")]
    Pattern { message: String },
    #[error("{label} must be exactly {length} characters")]
    Length { label: &'static str, length: usize },
    #[error("{label} must be a valid number")]
    NotANumber { label: &'static str },
    #[error("{label} must be at least {min}")]
    BelowMin { label: &'static str, min: f64 },
    #[error("{label} must not exceed {max}")]
    AboveMax { label: &'static str, max: f64 },
}

/// Check one value against its rule.
///
/// Checks run in a fixed order (required, pattern, length, min, max) and stop
/// at the first failure. The value is trimmed first. An empty value on an
/// optional field passes without further checks.
pub fn validate_value(rule: &FieldRule, raw: &str) -> Result<(), ValidationError> {
    let value = raw.trim();

    if value.is_empty() {
        if rule.required {
            return Err(ValidationError::Required { label: rule.label });
        }
        return Ok(());
    }

    if let Some(pattern) = rule.pattern {
        if !pattern.matches(value) {
            let message = match rule.message {
                Some(m) => m.to_string(),
                None => format!("Invalid {} format", rule.label),
            };
            return Err(ValidationError::Pattern { message });
        }
    }

    if let Some(length) = rule.length {
        if value.chars().count() != length {
            return Err(ValidationError::Length {
                label: rule.label,
                length,
            });
        }
    }

    if rule.is_bounded() {
        let number = value
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .ok_or(ValidationError::NotANumber { label: rule.label })?;

        if let Some(min) = rule.min {
            if number < min {
                return Err(ValidationError::BelowMin {
                    label: rule.label,
                    min,
                });
            }
        }
        if let Some(max) = rule.max {
            if number > max {
                return Err(ValidationError::AboveMax {
                    label: rule.label,
                    max,
                });
            }
        }
    }

    Ok(())
}

/// Find the rule for a field name
pub fn find_rule<'r>(rules: &'r [FieldRule], name: &str) -> Option<&'r FieldRule> {
    rules.iter().find(|r| r.name == name)
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: &'static str,
    pub error: ValidationError,
}

/// Outcome of validating every rule-bound field present in a form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormReport {
    /// Fields that were present and passed
    pub valid: Vec<&'static str>,
    /// Fields that were present and failed, in rule order
    pub errors: Vec<FieldError>,
    /// Fields with a rule but no input in the form
    pub skipped: Vec<&'static str>,
}

impl FormReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_for(&self, field: &str) -> Option<&ValidationError> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| &e.error)
    }

    pub fn invalid_fields(&self) -> Vec<&'static str> {
        self.errors.iter().map(|e| e.field).collect()
    }
}

/// Validate every field in `rules` that `lookup` reports as present.
///
/// `lookup` returns the current value of a field, or `None` when the form has
/// no such input. Absent fields never block a submit.
pub fn validate_form<'a, F>(rules: &[FieldRule], lookup: F) -> FormReport
where
    F: Fn(&str) -> Option<&'a str>,
{
    let mut report = FormReport::default();
    for rule in rules {
        match lookup(rule.name) {
            Some(value) => match validate_value(rule, value) {
                Ok(()) => report.valid.push(rule.name),
                Err(error) => report.errors.push(FieldError {
                    field: rule.name,
                    error,
                }),
            },
            None => report.skipped.push(rule.name),
        }
    }
    report
}
