use chrono::{Datelike, Local};
use thiserror::Error;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentDetails {
    pub holder: String,
    pub card_number: String,
    pub expiry: String,
    pub cvc: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Holder,
    CardNumber,
    Expiry,
    Cvc,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    #[error("El nombre del titular es obligatorio.")]
    HolderEmpty,
    #[error("El número de tarjeta debe tener 16 dígitos.")]
    CardNumberInvalid,
    #[error("La fecha debe tener el formato MM/AA.")]
    ExpiryFormat,
    #[error("La tarjeta está vencida.")]
    ExpiryPast,
    #[error("El CVC debe tener 3 o 4 dígitos.")]
    CvcInvalid,
}

/// Current (year, month), the reference point for expiry checks.
pub fn current_period() -> (i32, u32) {
    let now = Local::now();
    (now.year(), now.month())
}

impl PaymentDetails {
    /// True once every field has input. The submit action stays disabled
    /// until then; validation only runs on complete forms.
    pub fn is_complete(&self) -> bool {
        !self.holder.trim().is_empty()
            && !self.card_number.trim().is_empty()
            && !self.expiry.trim().is_empty()
            && !self.cvc.trim().is_empty()
    }

    /// Validates every field against `now = (year, month)`. Advisory only:
    /// nothing is persisted and errors clear as the fields are fixed.
    pub fn validate(&self, now: (i32, u32)) -> Vec<(Field, CardError)> {
        let mut errors = Vec::new();
        if let Err(e) = validate_holder(&self.holder) {
            errors.push((Field::Holder, e));
        }
        if let Err(e) = validate_card_number(&self.card_number) {
            errors.push((Field::CardNumber, e));
        }
        if let Err(e) = validate_expiry(&self.expiry, now) {
            errors.push((Field::Expiry, e));
        }
        if let Err(e) = validate_cvc(&self.cvc) {
            errors.push((Field::Cvc, e));
        }
        errors
    }
}

pub fn validate_holder(holder: &str) -> Result<(), CardError> {
    if holder.trim().is_empty() {
        Err(CardError::HolderEmpty)
    } else {
        Ok(())
    }
}

/// Spaces are stripped first; exactly 16 digits must remain.
pub fn validate_card_number(number: &str) -> Result<(), CardError> {
    let digits: Vec<char> = number.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.len() == 16 && digits.iter().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(CardError::CardNumberInvalid)
    }
}

/// `MM/AA`, not in the past. The current month is still accepted.
pub fn validate_expiry(expiry: &str, now: (i32, u32)) -> Result<(), CardError> {
    let (month, year) = parse_expiry(expiry).ok_or(CardError::ExpiryFormat)?;
    let (current_year, current_month) = now;
    if year < current_year || (year == current_year && month < current_month) {
        Err(CardError::ExpiryPast)
    } else {
        Ok(())
    }
}

fn parse_expiry(expiry: &str) -> Option<(u32, i32)> {
    let (mm, yy) = expiry.trim().split_once('/')?;
    if mm.len() != 2 || yy.len() != 2 {
        return None;
    }
    let month: u32 = mm.parse().ok()?;
    let year: i32 = yy.parse().ok()?;
    if !(1..=12).contains(&month) {
        return None;
    }
    Some((month, 2000 + year))
}

pub fn validate_cvc(cvc: &str) -> Result<(), CardError> {
    let trimmed = cvc.trim();
    if (3..=4).contains(&trimmed.len()) && trimmed.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(CardError::CvcInvalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: (i32, u32) = (2026, 8);

    fn valid_details() -> PaymentDetails {
        PaymentDetails {
            holder: "María Rodríguez".to_string(),
            card_number: "4111 1111 1111 1111".to_string(),
            expiry: "08/27".to_string(),
            cvc: "123".to_string(),
        }
    }

    #[test]
    fn a_fully_valid_form_passes() {
        assert!(valid_details().validate(NOW).is_empty());
    }

    #[test]
    fn short_card_number_is_rejected_even_when_everything_else_is_valid() {
        let mut details = valid_details();
        details.card_number = "4111 1111 1111 111".to_string();
        let errors = details.validate(NOW);
        assert_eq!(errors, vec![(Field::CardNumber, CardError::CardNumberInvalid)]);
    }

    #[test]
    fn card_number_accepts_spaces_but_not_letters_or_extra_digits() {
        assert!(validate_card_number("4111111111111111").is_ok());
        assert!(validate_card_number("4111 1111 1111 1111").is_ok());
        assert!(validate_card_number("4111 1111 1111 11x1").is_err());
        assert!(validate_card_number("4111 1111 1111 1111 1").is_err());
        assert!(validate_card_number("").is_err());
    }

    #[test]
    fn expiry_in_the_current_month_is_accepted() {
        assert!(validate_expiry("08/26", NOW).is_ok());
    }

    #[test]
    fn expiry_earlier_in_the_current_year_is_rejected_as_past() {
        assert_eq!(validate_expiry("07/26", NOW), Err(CardError::ExpiryPast));
        assert_eq!(validate_expiry("12/25", NOW), Err(CardError::ExpiryPast));
    }

    #[test]
    fn expiry_in_a_later_year_is_accepted() {
        assert!(validate_expiry("01/27", NOW).is_ok());
    }

    #[test]
    fn malformed_expiry_is_a_format_error() {
        for bad in ["8/26", "08-26", "13/27", "00/27", "08/2026", "", "aa/bb"] {
            assert_eq!(
                validate_expiry(bad, NOW),
                Err(CardError::ExpiryFormat),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn cvc_accepts_three_or_four_digits_only() {
        assert!(validate_cvc("123").is_ok());
        assert!(validate_cvc("1234").is_ok());
        assert!(validate_cvc("12").is_err());
        assert!(validate_cvc("12345").is_err());
        assert!(validate_cvc("12a").is_err());
    }

    #[test]
    fn blank_holder_is_rejected() {
        assert_eq!(validate_holder("   "), Err(CardError::HolderEmpty));
        assert!(validate_holder("Ana").is_ok());
    }

    #[test]
    fn is_complete_requires_input_in_every_field() {
        let mut details = valid_details();
        assert!(details.is_complete());
        details.cvc = String::new();
        assert!(!details.is_complete());
    }
}
