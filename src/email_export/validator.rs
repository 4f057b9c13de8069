use regex::Regex;

/// Syntactic checks for contact fields. Nothing here touches the network;
/// an address that matches is plausible, not deliverable.
pub struct ContactValidator {
    email_regex: Regex,
    phone_regex: Regex,
}

impl ContactValidator {
    pub fn new() -> Self {
        Self {
            email_regex: Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap(),
            phone_regex: Regex::new(r"^[0-9\s()+-]+$").unwrap(),
        }
    }

    /// Full-string match: local part, '@', domain, a final dot and a TLD of
    /// two or more letters. Surrounding whitespace or embedded newlines fail.
    pub fn is_valid_email(&self, candidate: &str) -> bool {
        self.email_regex.is_match(candidate)
    }

    /// Digits, whitespace, '+', '-' and parentheses only, with at least
    /// seven digits overall.
    pub fn is_valid_phone(&self, candidate: &str) -> bool {
        self.phone_regex.is_match(candidate)
            && candidate.chars().filter(char::is_ascii_digit).count() >= 7
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_addresses() {
        let validator = ContactValidator::new();
        for candidate in [
            "a@b.com",
            "c@d.io",
            "ahmet@example.com",
            "user.name+tag@example-domain.co",
            "A_1%x@sub.domain.org",
        ] {
            assert!(validator.is_valid_email(candidate), "{}", candidate);
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        let validator = ContactValidator::new();
        for candidate in [
            "",
            "not-an-email",
            "missing-at.example.com",
            "user@localhost",
            "a@@b.com",
            "a@b.c",
            "@example.com",
            "user@.com",
        ] {
            assert!(!validator.is_valid_email(candidate), "{}", candidate);
        }
    }

    #[test]
    fn rejects_surrounding_whitespace_and_newlines() {
        let validator = ContactValidator::new();
        for candidate in [" a@b.com", "a@b.com ", "a@b.com\n", "a@\nb.com", "\ta@b.com"] {
            assert!(!validator.is_valid_email(candidate), "{:?}", candidate);
        }
    }

    #[test]
    fn accepts_plausible_phone_numbers() {
        let validator = ContactValidator::new();
        for candidate in ["5551234567", "+90 (555) 123-4567", "0555 987 65 43"] {
            assert!(validator.is_valid_phone(candidate), "{}", candidate);
        }
    }

    #[test]
    fn rejects_short_or_lettered_phone_numbers() {
        let validator = ContactValidator::new();
        for candidate in ["", "123-456", "555-CALL-NOW", "phone"] {
            assert!(!validator.is_valid_phone(candidate), "{}", candidate);
        }
    }
}
