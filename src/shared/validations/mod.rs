//! Shape checks for user-supplied identity fields

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w.-]+@[\w.-]+\.\w+$").expect("email regex"));

static USERNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]{3,}$").expect("username regex"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("phone regex"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Letters and whitespace only.
pub fn is_valid_name(name: &str) -> bool {
    name.chars().all(|c| c.is_alphabetic() || c.is_whitespace())
}

pub fn is_valid_username(username: &str) -> bool {
    USERNAME_RE.is_match(username)
}

/// Exactly ten ASCII digits.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emails() {
        assert!(is_valid_email("asha.k@example.co.in"));
        assert!(is_valid_email("a_b-c@mail.org"));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("user@nodot"));
        assert!(!is_valid_email("user name@example.com"));
    }

    #[test]
    fn names_allow_letters_and_spaces() {
        assert!(is_valid_name("Asha Kulkarni"));
        assert!(is_valid_name("José"));
        assert!(!is_valid_name("R2D2"));
        assert!(!is_valid_name("o'neil"));
    }

    #[test]
    fn usernames() {
        assert!(is_valid_username("asha_99"));
        assert!(!is_valid_username("ab"));
        assert!(!is_valid_username("asha.k"));
    }

    #[test]
    fn phones() {
        assert!(is_valid_phone("9876543210"));
        assert!(!is_valid_phone("987654321"));
        assert!(!is_valid_phone("98765432101"));
        assert!(!is_valid_phone("98765-4321"));
    }
}
