//! Violation message rendering.

use crate::policy::RuleKind;

/// The offending value carried by a violation: the numeric threshold for
/// count-based rules, the matched needle for containment rules, nothing
/// for exact-match rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum OffendingValue {
    Count(usize),
    Needle(String),
    None,
}

/// Record of one failed rule for one password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Violation {
    pub(crate) kind: RuleKind,
    pub(crate) value: OffendingValue,
}

impl Violation {
    /// Renders the violation into its human-readable message. The plural
    /// placeholder resolves to "s" when the value is a count greater
    /// than one.
    pub(crate) fn render(&self) -> String {
        let (value, plural) = match &self.value {
            OffendingValue::Count(n) => (n.to_string(), if *n > 1 { "s" } else { "" }),
            OffendingValue::Needle(needle) => (needle.clone(), ""),
            OffendingValue::None => (String::new(), ""),
        };
        match self.kind {
            RuleKind::MinLength => {
                format!("Password must be at least {value} character{plural} long")
            }
            RuleKind::MaxLength => {
                format!("Password must be at most {value} character{plural} long")
            }
            RuleKind::MinDigit => format!("Password must contain at least {value} digit{plural}"),
            RuleKind::MinSpecialChar => {
                format!("Password must contain at least {value} special character{plural}")
            }
            RuleKind::MinUpperCase => {
                format!("Password must contain at least {value} uppercase character{plural}")
            }
            RuleKind::MinLowerCase => {
                format!("Password must contain at least {value} lowercase character{plural}")
            }
            RuleKind::Occurrences => {
                format!("Password can not contain {value} occurrence{plural} of the same character")
            }
            RuleKind::Sequential => {
                format!("Password can not contain {value} sequential{plural} letters or numbers")
            }
            RuleKind::CantContain => format!("Password can not contain `{value}`"),
            RuleKind::BlackList => "Password contains a blacklisted word".to_string(),
            RuleKind::NotIn => "You can not reuse a previous password".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singular_count() {
        let v = Violation {
            kind: RuleKind::MinDigit,
            value: OffendingValue::Count(1),
        };
        assert_eq!(v.render(), "Password must contain at least 1 digit");
    }

    #[test]
    fn test_plural_count() {
        let v = Violation {
            kind: RuleKind::MinLength,
            value: OffendingValue::Count(12),
        };
        assert_eq!(v.render(), "Password must be at least 12 characters long");
    }

    #[test]
    fn test_needle_is_never_pluralized() {
        let v = Violation {
            kind: RuleKind::CantContain,
            value: OffendingValue::Needle("admin".to_string()),
        };
        assert_eq!(v.render(), "Password can not contain `admin`");
    }

    #[test]
    fn test_valueless_messages() {
        let blacklist = Violation {
            kind: RuleKind::BlackList,
            value: OffendingValue::None,
        };
        assert_eq!(blacklist.render(), "Password contains a blacklisted word");

        let not_in = Violation {
            kind: RuleKind::NotIn,
            value: OffendingValue::None,
        };
        assert_eq!(not_in.render(), "You can not reuse a previous password");
    }

    #[test]
    fn test_uppercase_and_lowercase_have_distinct_messages() {
        let upper = Violation {
            kind: RuleKind::MinUpperCase,
            value: OffendingValue::Count(2),
        };
        let lower = Violation {
            kind: RuleKind::MinLowerCase,
            value: OffendingValue::Count(2),
        };
        assert!(upper.render().contains("uppercase"));
        assert!(lower.render().contains("lowercase"));
    }
}
