// src/validate.rs
//
// Best-effort syntactic address check. Catches obvious junk before we spend
// a network round trip; it does not guarantee the address resolves — the
// property API has the final say.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    fn ok() -> Self {
        Self { is_valid: true, error: None }
    }
    fn fail(msg: impl Into<String>) -> Self {
        Self { is_valid: false, error: Some(msg.into()) }
    }
}

/// Split on commas, trim each part. At least two parts are required, and the
/// first part (the street line) must contain both a house number and a name.
pub fn validate_address(input: &str) -> ValidationResult {
    let parts: Vec<&str> = input.split(',').map(str::trim).collect();

    if parts.len() < 2 {
        return ValidationResult::fail(
            "Address should look like \"street, city\" — add a comma-separated city or region",
        );
    }

    let street = parts[0];
    let has_digit = street.chars().any(|c| c.is_ascii_digit());
    let has_letter = street.chars().any(|c| c.is_alphabetic());
    if !has_digit || !has_letter {
        return ValidationResult::fail(
            "Street line should contain a house number and a street name",
        );
    }

    ValidationResult::ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_part_fails() {
        assert!(!validate_address("abc").is_valid);
        assert!(!validate_address("1600 Amphitheatre Parkway").is_valid);
        assert!(!validate_address("").is_valid);
    }

    #[test]
    fn street_without_number_fails() {
        let r = validate_address("Amphitheatre Parkway, Mountain View");
        assert!(!r.is_valid);
        assert!(r.error.is_some());
    }

    #[test]
    fn street_without_name_fails() {
        assert!(!validate_address("1600, Mountain View").is_valid);
        assert!(!validate_address("12-34, Springfield").is_valid);
    }

    #[test]
    fn full_address_passes() {
        let r = validate_address("1600 Amphitheatre Parkway, Mountain View, CA 94043");
        assert!(r.is_valid);
        assert!(r.error.is_none());
    }

    #[test]
    fn parts_are_trimmed() {
        assert!(validate_address("  12 Main St  ,  Springfield  ").is_valid);
    }
}
