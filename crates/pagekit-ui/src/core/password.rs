//! Password strength heuristic and complexity hints.
//!
//! # Design
//! - Five independent checks, one point each; no weighting.
//! - Character classes are ASCII-only, matching the server-side rules.

/// Symbols that earn the symbol point.
pub const SYMBOLS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Default minimum length that earns the length point.
pub const DEFAULT_MIN_LENGTH: usize = 8;

/// Score a password against the default policy.
#[must_use]
pub fn check_password_strength(password: &str) -> u8 {
    PasswordPolicy::default().score(password)
}

/// Complexity rule a password can fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PasswordRule {
    /// Shorter than the minimum length.
    MinLength(usize),
    /// No uppercase letter.
    Uppercase,
    /// No lowercase letter.
    Lowercase,
    /// No digit.
    Digit,
}

impl PasswordRule {
    /// Hint shown next to the password field.
    #[must_use]
    pub fn hint(self) -> String {
        match self {
            Self::MinLength(min) => format!("Password must be at least {min} characters long"),
            Self::Uppercase => "Password must contain at least one uppercase letter".to_string(),
            Self::Lowercase => "Password must contain at least one lowercase letter".to_string(),
            Self::Digit => "Password must contain at least one number".to_string(),
        }
    }
}

/// Coarse label for a strength score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthLevel {
    /// Score 0 or 1.
    VeryWeak,
    /// Score 2.
    Weak,
    /// Score 3.
    Fair,
    /// Score 4.
    Good,
    /// Score 5.
    Strong,
}

impl StrengthLevel {
    /// Map a score to its level; scores above five saturate.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            0 | 1 => Self::VeryWeak,
            2 => Self::Weak,
            3 => Self::Fair,
            4 => Self::Good,
            _ => Self::Strong,
        }
    }

    /// Display label for meter widgets.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::VeryWeak => "very weak",
            Self::Weak => "weak",
            Self::Fair => "fair",
            Self::Good => "good",
            Self::Strong => "strong",
        }
    }
}

/// Length threshold used by the heuristic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PasswordPolicy {
    /// Minimum number of characters that earns the length point.
    pub min_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
        }
    }
}

impl PasswordPolicy {
    /// Score `password` in `0..=5`.
    #[must_use]
    pub fn score(self, password: &str) -> u8 {
        let checks = [
            self.long_enough(password),
            password.chars().any(|ch| ch.is_ascii_lowercase()),
            password.chars().any(|ch| ch.is_ascii_uppercase()),
            password.chars().any(|ch| ch.is_ascii_digit()),
            password.chars().any(|ch| SYMBOLS.contains(ch)),
        ];
        checks.into_iter().map(u8::from).sum()
    }

    /// Server-side complexity rules that `password` fails, in display order.
    #[must_use]
    pub fn violations(self, password: &str) -> Vec<PasswordRule> {
        let mut failed = Vec::new();
        if !self.long_enough(password) {
            failed.push(PasswordRule::MinLength(self.min_length));
        }
        if !password.chars().any(char::is_uppercase) {
            failed.push(PasswordRule::Uppercase);
        }
        if !password.chars().any(char::is_lowercase) {
            failed.push(PasswordRule::Lowercase);
        }
        if !password.chars().any(|ch| ch.is_ascii_digit()) {
            failed.push(PasswordRule::Digit);
        }
        failed
    }

    fn long_enough(self, password: &str) -> bool {
        password.chars().count() >= self.min_length
    }
}

#[cfg(test)]
mod tests {
    use super::{
        PasswordPolicy, PasswordRule, StrengthLevel, check_password_strength,
    };

    #[test]
    fn empty_password_scores_zero() {
        assert_eq!(check_password_strength(""), 0);
    }

    #[test]
    fn all_classes_score_five() {
        assert_eq!(check_password_strength("Abcdef1!"), 5);
    }

    #[test]
    fn each_check_contributes_one_point() {
        assert_eq!(check_password_strength("a"), 1);
        assert_eq!(check_password_strength("A"), 1);
        assert_eq!(check_password_strength("7"), 1);
        assert_eq!(check_password_strength("#"), 1);
        assert_eq!(check_password_strength("        "), 1);
    }

    #[test]
    fn repeated_classes_do_not_add_points() {
        assert_eq!(check_password_strength("aaaaaaaaaaaaaaaaaaaa"), 2);
    }

    #[test]
    fn score_is_order_independent_and_monotonic() {
        let steps = ["a", "aB", "aB3", "aB3?", "aB3?xxxx"];
        let mut previous = 0;
        for step in steps {
            let score = check_password_strength(step);
            assert!(score >= previous, "{step} dropped the score");
            previous = score;
        }
        assert_eq!(previous, 5);
        assert_eq!(check_password_strength("?3Baxxxx"), 5);
    }

    #[test]
    fn non_ascii_letters_do_not_count_as_classes() {
        assert_eq!(check_password_strength("é"), 0);
        assert_eq!(check_password_strength("~"), 0);
    }

    #[test]
    fn custom_min_length_shifts_length_point() {
        let policy = PasswordPolicy { min_length: 12 };
        assert_eq!(policy.score("Abcdef1!"), 4);
        assert_eq!(policy.score("Abcdef1!abcd"), 5);
    }

    #[test]
    fn violations_mirror_server_rules() {
        let policy = PasswordPolicy::default();
        assert_eq!(
            policy.violations("abc"),
            vec![
                PasswordRule::MinLength(8),
                PasswordRule::Uppercase,
                PasswordRule::Digit
            ]
        );
        assert!(policy.violations("Abcdefg1").is_empty());
        assert_eq!(
            PasswordRule::MinLength(8).hint(),
            "Password must be at least 8 characters long"
        );
    }

    #[test]
    fn levels_cover_score_range() {
        assert_eq!(StrengthLevel::from_score(0), StrengthLevel::VeryWeak);
        assert_eq!(StrengthLevel::from_score(3).label(), "fair");
        assert_eq!(StrengthLevel::from_score(5), StrengthLevel::Strong);
        assert_eq!(StrengthLevel::from_score(9), StrengthLevel::Strong);
        assert!(StrengthLevel::Weak < StrengthLevel::Good);
    }
}
