use crate::errors::{ValidationError, DomainResult, DomainError};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;
use serde::{Serialize, Deserialize};

/// A trait that request schemas and settings implement for validation.
pub trait Validate {
    /// Validates the value and returns an error if validation fails.
    fn validate(&self) -> DomainResult<()>;
}

// Common regex patterns
fn email_regex() -> &'static Regex {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    EMAIL_REGEX.get_or_init(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap())
}

fn time_regex() -> &'static Regex {
    static TIME_REGEX: OnceLock<Regex> = OnceLock::new();
    TIME_REGEX.get_or_init(|| Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]$").unwrap())
}

/// Struct for configuring validations in a fluent style
#[derive(Default)]
pub struct ValidationBuilder<T> {
    field_name: String,
    value: Option<T>,
    errors: Vec<ValidationError>,
}

/// Generic validation implementations
impl<T> ValidationBuilder<T> {
    pub fn new(field_name: &str, value: Option<T>) -> Self {
        Self {
            field_name: field_name.to_string(),
            value,
            errors: Vec::new(),
        }
    }

    pub fn required(mut self) -> Self
    where T: Default + PartialEq {
        if self.value.is_none() || self.value == Some(T::default()) {
            self.errors.push(ValidationError::required(&self.field_name));
        }
        self
    }

    pub fn validate_with<F>(mut self, validator: F) -> Self
    where F: FnOnce(&T) -> Result<(), ValidationError> {
        if let Some(value) = &self.value {
            if let Err(err) = validator(value) {
                self.errors.push(err);
            }
        }
        self
    }

    /// Complete validation and return result
    pub fn validate(self) -> DomainResult<()> {
        match self.errors.into_iter().next() {
            None => Ok(()),
            // First failure wins; callers surface one message per field
            Some(err) => Err(DomainError::Validation(err)),
        }
    }
}

/// String-specific validations
impl ValidationBuilder<String> {
    pub fn min_length(mut self, min: usize) -> Self {
        if let Some(value) = &self.value {
            if value.chars().count() < min {
                self.errors.push(ValidationError::min_length(&self.field_name, min));
            }
        }
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        if let Some(value) = &self.value {
            if value.chars().count() > max {
                self.errors.push(ValidationError::max_length(&self.field_name, max));
            }
        }
        self
    }

    pub fn not_blank(mut self) -> Self {
        if let Some(value) = &self.value {
            if !value.is_empty() && value.trim().is_empty() {
                self.errors.push(ValidationError::required(&self.field_name));
            }
        }
        self
    }

    pub fn matches_pattern(mut self, pattern: &Regex, message: &str) -> Self {
        if let Some(value) = &self.value {
            if !pattern.is_match(value) {
                self.errors.push(ValidationError::format(&self.field_name, message));
            }
        }
        self
    }

    pub fn email(self) -> Self {
        self.matches_pattern(email_regex(), "must be a valid email address")
    }

    pub fn time_of_day(self) -> Self {
        self.matches_pattern(time_regex(), "must be a 24-hour time in the format HH:MM")
    }

    pub fn one_of(mut self, allowed_values: &[&str], message: Option<&str>) -> Self {
        if let Some(value) = &self.value {
            if !allowed_values.contains(&value.as_str()) {
                let reason = message.unwrap_or("must be one of the allowed values");
                self.errors.push(ValidationError::invalid_value(&self.field_name, reason));
            }
        }
        self
    }
}

/// Numeric validations
impl<T> ValidationBuilder<T>
where T: PartialOrd + std::fmt::Display
{
    pub fn min(mut self, min: T) -> Self {
        if let Some(value) = &self.value {
            if value < &min {
                self.errors.push(ValidationError::invalid_value(
                    &self.field_name,
                    &format!("must be at least {}", min),
                ));
            }
        }
        self
    }

    pub fn max(mut self, max: T) -> Self {
        if let Some(value) = &self.value {
            if value > &max {
                self.errors.push(ValidationError::invalid_value(
                    &self.field_name,
                    &format!("must be at most {}", max),
                ));
            }
        }
        self
    }

    pub fn range(mut self, min: T, max: T) -> Self {
        if let Some(value) = &self.value {
            if value < &min || value > &max {
                self.errors.push(ValidationError::range(&self.field_name, min, max));
            }
        }
        self
    }
}

/// Date validation helpers
impl ValidationBuilder<NaiveDate> {
    /// Rejects dates earlier than `today`; today itself is allowed
    pub fn not_in_past(mut self, today: NaiveDate) -> Self {
        if let Some(value) = &self.value {
            if value < &today {
                self.errors.push(ValidationError::invalid_value(
                    &self.field_name,
                    "cannot be in the past",
                ));
            }
        }
        self
    }
}

/// Strongly typed wrapper for a validated email address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct Email(pub String);

impl TryFrom<String> for Email {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Email::new(&value)
    }
}

/// Trimmed text that is guaranteed not to be blank
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct NonEmptyString(pub String);

impl NonEmptyString {
    pub fn new(value: &str) -> Result<Self, ValidationError> {
        let trimmed = value.trim();
        if !trimmed.is_empty() {
            Ok(NonEmptyString(trimmed.to_string()))
        } else {
            Err(ValidationError::required("value"))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for NonEmptyString {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        NonEmptyString::new(&value)
    }
}

impl AsRef<str> for NonEmptyString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Email {
    pub fn new(email: &str) -> Result<Self, ValidationError> {
        let trimmed = email.trim();
        if email_regex().is_match(trimmed) {
            Ok(Email(trimmed.to_string()))
        } else {
            Err(ValidationError::format("email", "must be a valid email address"))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Format checks shared by the request schemas
pub mod common {
    use super::*;

    pub fn parse_date(date_str: &str, field_name: &str) -> DomainResult<NaiveDate> {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| {
            DomainError::Validation(ValidationError::format(
                field_name,
                "must be in the format YYYY-MM-DD",
            ))
        })
    }

    pub fn validate_date_format(date_str: &str, field_name: &str) -> DomainResult<()> {
        parse_date(date_str, field_name).map(|_| ())
    }

    pub fn validate_time_format(time_str: &str, field_name: &str) -> DomainResult<()> {
        ValidationBuilder::new(field_name, Some(time_str.to_string()))
            .time_of_day()
            .validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(email_regex().is_match("donor@example.com"));
        assert!(email_regex().is_match("donor.name+tag@example.co.uk"));
        assert!(!email_regex().is_match("donor@"));
        assert!(!email_regex().is_match("@example.com"));
        assert!(!email_regex().is_match("donor@example"));

        // Test the wrapper
        assert!(Email::new("valid@example.com").is_ok());
        assert_eq!(Email::new("  padded@example.com ").unwrap().as_str(), "padded@example.com");
        assert!(Email::new("invalid@").is_err());
    }

    #[test]
    fn test_validation_builder() {
        let result = ValidationBuilder::new("name", Some("".to_string()))
            .required()
            .validate();
        assert!(result.is_err());

        let result = ValidationBuilder::new("name", Some("   ".to_string()))
            .required()
            .not_blank()
            .validate();
        assert!(result.is_err());

        let result = ValidationBuilder::new("name", Some("Ra".to_string()))
            .required()
            .min_length(3)
            .validate();
        assert!(result.is_err());

        let result = ValidationBuilder::new("hospital", Some("Dhaka Medical College".to_string()))
            .required()
            .min_length(3)
            .max_length(120)
            .validate();
        assert!(result.is_ok());

        let value: Option<String> = None;
        let result = ValidationBuilder::new("name", value)
            .required()
            .validate();
        assert!(result.is_err());
    }

    #[test]
    fn test_first_error_is_reported() {
        let result = ValidationBuilder::new("email", Some("".to_string()))
            .required()
            .email()
            .validate();
        match result {
            Err(DomainError::Validation(ValidationError::Required { field })) => assert_eq!(field, "email"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_numeric_validations() {
        assert!(ValidationBuilder::new("page_size", Some(0u32)).min(1).validate().is_err());
        assert!(ValidationBuilder::new("page_size", Some(250u32)).max(100).validate().is_err());
        assert!(ValidationBuilder::new("interval", Some(30u64)).range(5, 3600).validate().is_ok());
        assert!(ValidationBuilder::new("interval", Some(1u64)).range(5, 3600).validate().is_err());
    }

    #[test]
    fn test_one_of() {
        let ok = ValidationBuilder::new("level", Some("info".to_string()))
            .one_of(&["error", "warn", "info"], None)
            .validate();
        assert!(ok.is_ok());

        let err = ValidationBuilder::new("level", Some("loud".to_string()))
            .one_of(&["error", "warn", "info"], Some("unknown log level"))
            .validate();
        assert!(err.is_err());
    }

    #[test]
    fn test_date_and_time_formats() {
        assert!(common::validate_date_format("2025-07-17", "donation_date").is_ok());
        assert!(common::validate_date_format("17/07/2025", "donation_date").is_err());

        assert!(common::validate_time_format("09:30", "donation_time").is_ok());
        assert!(common::validate_time_format("23:59", "donation_time").is_ok());
        assert!(common::validate_time_format("24:00", "donation_time").is_err());
        assert!(common::validate_time_format("9:30", "donation_time").is_err());
    }

    #[test]
    fn test_not_in_past() {
        let today = NaiveDate::from_ymd_opt(2025, 7, 17).unwrap();
        let yesterday = NaiveDate::from_ymd_opt(2025, 7, 16).unwrap();
        let tomorrow = NaiveDate::from_ymd_opt(2025, 7, 18).unwrap();
        assert!(ValidationBuilder::new("donation_date", Some(today)).not_in_past(today).validate().is_ok());
        assert!(ValidationBuilder::new("donation_date", Some(tomorrow)).not_in_past(today).validate().is_ok());
        assert!(ValidationBuilder::new("donation_date", Some(yesterday)).not_in_past(today).validate().is_err());
    }

    #[test]
    fn test_email_checked_when_deserialized() {
        let email: Email = serde_json::from_str("\"donor@example.com\"").unwrap();
        assert_eq!(email.as_str(), "donor@example.com");
        assert!(serde_json::from_str::<Email>("\"not-an-email\"").is_err());
    }

    #[test]
    fn test_non_empty_string() {
        assert_eq!(NonEmptyString::new("  Rahim ").unwrap().as_str(), "Rahim");
        assert!(matches!(NonEmptyString::new("   "), Err(ValidationError::Required { .. })));
        assert!(serde_json::from_str::<NonEmptyString>("\"\"").is_err());
    }
}
