use crate::PasswordPolicy;
use core::fmt;

/// Outcome of [`check_strength`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PasswordStrength {
    /// 0 (very weak) to 4 (very strong). A policy violation scores 1.
    pub score: u8,
    /// Either the strength label or the first policy violation.
    pub label: String,
}

impl PasswordStrength {
    fn new(score: u8, label: impl Into<String>) -> Self {
        Self {
            score,
            label: label.into(),
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}/4)", self.label, self.score)
    }
}

/// Scores `text` against `policy`.
///
/// The policy is checked first, in order of length, uppercase, digits and
/// special characters, where special is anything that is not an ASCII letter
/// or digit. The first violation is reported with a score of 1. A compliant
/// password scores one point each for a length of at least 8 and for having
/// at least one uppercase letter, digit and special character.
///
/// # Example
/// ```
/// use conjure::{PasswordPolicy, check_strength};
///
/// let strength = check_strength("Tr0ub4dor&3", &PasswordPolicy::default());
/// assert_eq!(strength.score, 4);
/// assert_eq!(strength.label, "Very Strong");
/// ```
pub fn check_strength(text: &str, policy: &PasswordPolicy) -> PasswordStrength {
    if text.is_empty() {
        return PasswordStrength::new(0, "Very Weak");
    }

    let length = text.chars().count();
    let uppercase = text.chars().filter(char::is_ascii_uppercase).count();
    let digits = text.chars().filter(char::is_ascii_digit).count();
    let special = text.chars().filter(|c| !c.is_ascii_alphanumeric()).count();

    if length < policy.length {
        return PasswordStrength::new(
            1,
            format!("Password must be at least {} characters long", policy.length),
        );
    }
    if uppercase < policy.uppercase {
        return PasswordStrength::new(
            1,
            format!("Password must contain {} uppercase letter", policy.uppercase),
        );
    }
    if digits < policy.digits {
        return PasswordStrength::new(1, format!("Password must contain {} number", policy.digits));
    }
    if special < policy.symbols {
        return PasswordStrength::new(
            1,
            format!("Password must contain {} special character", policy.symbols),
        );
    }

    let score = [length >= 8, uppercase >= 1, digits >= 1, special >= 1]
        .into_iter()
        .filter(|&point| point)
        .count() as u8;
    let label = match score {
        4 => "Very Strong",
        3 => "Strong",
        2 => "Medium",
        1 => "Weak",
        _ => "Very Weak",
    };
    PasswordStrength::new(score, label)
}
