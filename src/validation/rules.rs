//! Reusable field rules

use super::Validator;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Characters accepted as the "special character" of a strong password
pub const PASSWORD_SPECIAL_CHARS: &str = "-!@#$%^&*+";

/// Address shape: dot-atom-ish local part, one or more domain labels, alphabetic TLD.
/// The leading-dot and double-dot checks live in [`EmailShape`] since `regex` has no lookahead.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i-u)^[a-z0-9_'+\-.]*[a-z0-9_+\-]@([a-z0-9][a-z0-9\-]*\.)+[a-z]{2,}$")
        .expect("email pattern is valid")
});

/// A rule that did not hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RuleViolation {
    #[error("value is empty")]
    Empty,
    #[error("shorter than {min} characters")]
    TooShort { min: usize },
    #[error("longer than {max} characters")]
    TooLong { max: usize },
    #[error("missing a lowercase letter, uppercase letter, digit or special character")]
    WeakPassword,
    #[error("not an email address")]
    InvalidEmail,
    #[error("not one of the allowed values")]
    NotAllowed,
    #[error("must be accepted")]
    NotAccepted,
}

/// Non-empty string
#[derive(Debug, Clone, Copy)]
pub struct Required;

impl Validator<str> for Required {
    fn validate(&self, input: &str) -> Result<(), RuleViolation> {
        if input.is_empty() {
            Err(RuleViolation::Empty)
        } else {
            Ok(())
        }
    }
}

/// Length bounds, inclusive, counted in characters
#[derive(Debug, Clone, Copy)]
pub struct Length {
    pub min: usize,
    pub max: usize,
}

impl Validator<str> for Length {
    fn validate(&self, input: &str) -> Result<(), RuleViolation> {
        let len = input.chars().count();
        if len < self.min {
            Err(RuleViolation::TooShort { min: self.min })
        } else if len > self.max {
            Err(RuleViolation::TooLong { max: self.max })
        } else {
            Ok(())
        }
    }
}

/// At least one lowercase, uppercase, digit and special character, 8 to 30 characters,
/// no line breaks
#[derive(Debug, Clone, Copy)]
pub struct PasswordStrength;

impl Validator<str> for PasswordStrength {
    fn validate(&self, input: &str) -> Result<(), RuleViolation> {
        let len = input.chars().count();
        let strong = (8..=30).contains(&len)
            && !input.contains(['\n', '\r'])
            && input.chars().any(|c| c.is_ascii_lowercase())
            && input.chars().any(|c| c.is_ascii_uppercase())
            && input.chars().any(|c| c.is_ascii_digit())
            && input.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c));
        if strong {
            Ok(())
        } else {
            Err(RuleViolation::WeakPassword)
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct EmailShape;

impl Validator<str> for EmailShape {
    fn validate(&self, input: &str) -> Result<(), RuleViolation> {
        if input.starts_with('.') || input.contains("..") || !EMAIL_RE.is_match(input) {
            Err(RuleViolation::InvalidEmail)
        } else {
            Ok(())
        }
    }
}

/// Value must be one of a fixed set
#[derive(Debug, Clone, Copy)]
pub struct OneOf(pub &'static [&'static str]);

impl Validator<str> for OneOf {
    fn validate(&self, input: &str) -> Result<(), RuleViolation> {
        if self.0.iter().any(|allowed| *allowed == input) {
            Ok(())
        } else {
            Err(RuleViolation::NotAllowed)
        }
    }
}

/// Checkbox that must be ticked
#[derive(Debug, Clone, Copy)]
pub struct Accepted;

impl Validator<bool> for Accepted {
    fn validate(&self, input: &bool) -> Result<(), RuleViolation> {
        if *input {
            Ok(())
        } else {
            Err(RuleViolation::NotAccepted)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod required {
        use super::*;

        #[test]
        fn test_empty_fails() {
            assert_eq!(Required.validate(""), Err(RuleViolation::Empty));
        }

        #[test]
        fn test_whitespace_counts_as_value() {
            assert!(Required.validate(" ").is_ok());
        }
    }

    mod length {
        use super::*;

        const RULE: Length = Length { min: 8, max: 30 };

        #[test]
        fn test_bounds_are_inclusive() {
            assert!(RULE.validate("abcdefgh").is_ok());
            assert!(RULE.validate(&"a".repeat(30)).is_ok());
        }

        #[test]
        fn test_too_short() {
            assert_eq!(
                RULE.validate("abc"),
                Err(RuleViolation::TooShort { min: 8 })
            );
        }

        #[test]
        fn test_too_long() {
            assert_eq!(
                RULE.validate(&"a".repeat(31)),
                Err(RuleViolation::TooLong { max: 30 })
            );
        }

        #[test]
        fn test_counts_characters_not_bytes() {
            assert!(RULE.validate("ééééééé").is_err());
            assert!(RULE.validate("éééééééé").is_ok());
        }
    }

    mod password_strength {
        use super::*;

        #[test]
        fn test_strong_password() {
            assert!(PasswordStrength.validate("Passw0rd!").is_ok());
        }

        #[test]
        fn test_missing_uppercase() {
            assert_eq!(
                PasswordStrength.validate("alllowercase1!"),
                Err(RuleViolation::WeakPassword)
            );
        }

        #[test]
        fn test_missing_special() {
            assert!(PasswordStrength.validate("Passw0rdd").is_err());
        }

        #[test]
        fn test_special_outside_set_does_not_count() {
            assert!(PasswordStrength.validate("Passw0rd?").is_err());
        }

        #[test]
        fn test_every_special_char_is_accepted() {
            for c in PASSWORD_SPECIAL_CHARS.chars() {
                let password = format!("Passw0rd{c}");
                assert!(PasswordStrength.validate(&password).is_ok(), "{password}");
            }
        }

        #[test]
        fn test_line_break_rejected() {
            assert!(PasswordStrength.validate("Passw0rd!\n").is_err());
        }
    }

    mod email_shape {
        use super::*;

        #[test]
        fn test_valid_addresses() {
            for email in ["alice@example.com", "a.b+c@mail.example.org", "o'neil@x.io"] {
                assert!(EmailShape.validate(email).is_ok(), "{email}");
            }
        }

        #[test]
        fn test_invalid_addresses() {
            for email in [
                "",
                "alice",
                "alice@",
                "@example.com",
                "alice@example",
                ".alice@example.com",
                "al..ice@example.com",
                "alice.@example.com",
                "alice@example.c",
                "alice@-example.com",
            ] {
                assert!(EmailShape.validate(email).is_err(), "{email}");
            }
        }

        #[test]
        fn test_non_ascii_letters_that_fold_to_ascii_rejected() {
            // KELVIN SIGN folds to 'k', LATIN SMALL LETTER LONG S folds to 's'
            for email in ["alice@example.\u{212A}\u{212A}", "\u{17F}am@example.com"] {
                assert_eq!(
                    EmailShape.validate(email),
                    Err(RuleViolation::InvalidEmail),
                    "{email}"
                );
            }
            assert!(EmailShape.validate("ALICE@EXAMPLE.COM").is_ok());
        }
    }

    #[test]
    fn test_one_of() {
        let rule = OneOf(&["male", "female", "other"]);
        assert!(rule.validate("other").is_ok());
        assert_eq!(rule.validate("Male"), Err(RuleViolation::NotAllowed));
    }

    #[test]
    fn test_accepted() {
        assert!(Accepted.validate(&true).is_ok());
        assert_eq!(Accepted.validate(&false), Err(RuleViolation::NotAccepted));
    }
}
