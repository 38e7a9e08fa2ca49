use validator::ValidationError;
use zxcvbn::{zxcvbn, Score};

use crate::entities::validation::new_validation_error;

const MIN_LENGTH: usize = 8;
const SYMBOLS: &str = "!@#$%^&*()-_=+.,;:?¿¡";

/// Character-class rules first, then a zxcvbn estimate of at least `Three`.
pub fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < MIN_LENGTH {
        return Err(new_validation_error("password_length", "Must be at least 8 characters"));
    }

    let has_upper = password.chars().any(char::is_uppercase);
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| SYMBOLS.contains(c));

    if !(has_upper && has_digit && has_symbol) {
        return Err(new_validation_error(
            "password_complexity",
            "Must include uppercase, number, and symbol",
        ));
    }

    let estimate = zxcvbn(password, &[]);
    if estimate.score() < Score::Three {
        let mut error = new_validation_error("password_weak", "Password is too easy to guess");
        if let Some(warning) = estimate.feedback().and_then(|f| f.warning()) {
            error.message = Some(format!("Password is too easy to guess: {warning}").into());
        }
        return Err(error);
    }

    Ok(())
}
