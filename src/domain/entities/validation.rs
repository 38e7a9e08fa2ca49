use std::borrow::Cow;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

static DOCUMENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9\-]{5,20}$").expect("document regex is valid")
});

static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?[0-9][0-9 ()\-]{6,19}$").expect("phone regex is valid")
});

pub fn new_validation_error(code: &'static str, msg: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(msg));
    err
}

/// Struct-level error reported against `field`.
pub fn field_validation_error(code: &'static str, field: &'static str, msg: &'static str) -> ValidationError {
    let mut err = new_validation_error(code, msg);
    err.add_param(Cow::Borrowed("field"), &field);
    err
}

pub fn validate_url(url: &str) -> Result<(), ValidationError> {
    match url::Url::parse(url) {
        Ok(parsed) => {
            if parsed.scheme() == "http" || parsed.scheme() == "https" {
                Ok(())
            } else {
                Err(new_validation_error("invalid_url_scheme", "URL must start with http:// or https://"))
            }
        }
        Err(_) => Err(new_validation_error("invalid_url", "Invalid URL format")),
    }
}

pub fn validate_document_number(value: &str) -> Result<(), ValidationError> {
    if DOCUMENT_RE.is_match(value) {
        Ok(())
    } else {
        Err(new_validation_error(
            "invalid_document",
            "Document number must be 5-20 letters, digits or hyphens",
        ))
    }
}

pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    if PHONE_RE.is_match(value) {
        Ok(())
    } else {
        Err(new_validation_error("invalid_phone", "Invalid phone number"))
    }
}

/// Rejects blank strings; `length(min = 1)` lets whitespace through.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(new_validation_error("blank", "Value cannot be blank"))
    } else {
        Ok(())
    }
}

pub fn validate_date_order(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<(), ValidationError> {
    match (start, end) {
        (Some(start), Some(end)) if end < start => Err(field_validation_error(
            "date_order",
            "end_date",
            "End date must not be before start date",
        )),
        _ => Ok(()),
    }
}

/// Normalizes free text coming from forms: trims and maps blank to `None`.
pub fn clean_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_and_phone_formats() {
        assert!(validate_document_number("1023456789").is_ok());
        assert!(validate_document_number("CE-99881").is_ok());
        assert!(validate_document_number("12 34").is_err());

        assert!(validate_phone("+57 300 123 4567").is_ok());
        assert!(validate_phone("(604) 555-1234").is_err());
        assert!(validate_phone("abc").is_err());
    }

    #[test]
    fn date_order_only_checks_complete_ranges() {
        let start = NaiveDate::from_ymd_opt(2020, 1, 1);
        let end = NaiveDate::from_ymd_opt(2019, 12, 31);
        assert!(validate_date_order(start, end).is_err());
        assert!(validate_date_order(start, None).is_ok());
        assert!(validate_date_order(end, start).is_ok());
    }

    #[test]
    fn clean_text_drops_blank_values() {
        assert_eq!(clean_text(Some("  Medellín ".into())), Some("Medellín".into()));
        assert_eq!(clean_text(Some("   ".into())), None);
        assert_eq!(clean_text(None), None);
    }
}
