//! Validation engine - evaluates a password against a policy.

use secrecy::{ExposeSecret, SecretString};

use crate::checks::{counter, repeats, sequential};
use crate::policy::{PasswordPolicy, Rule};
use crate::report::{OffendingValue, Violation};

/// Outcome of one validation call.
///
/// `passed` is true iff no rule was violated. The messages keep the
/// policy's rule insertion order. Each call produces a fresh result, so
/// repeated calls with the same inputs yield identical contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    violations: Vec<String>,
}

impl ValidationResult {
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }

    /// The rendered violation messages, in rule insertion order.
    pub fn errors(&self) -> &[String] {
        &self.violations
    }

    pub fn into_errors(self) -> Vec<String> {
        self.violations
    }
}

/// Validates `password` against `policy` and returns every violated rule.
///
/// Rules are evaluated in the policy's insertion order, and evaluation
/// never stops at the first failure. A policy with no configured rules is
/// evaluated as [`PasswordPolicy::default`]. Rules configured with a zero
/// value or an empty list are skipped.
///
/// # Example
///
/// ```rust
/// use pwd_policy::{PasswordPolicy, validate_password};
/// use secrecy::SecretString;
///
/// let policy = PasswordPolicy::builder()
///     .min_length(8)
///     .min_digit(1)
///     .build();
/// let password = SecretString::new("Tr0ub4dor!".to_string().into());
///
/// let result = validate_password(&password, &policy);
/// assert!(result.passed());
/// ```
pub fn validate_password(password: &SecretString, policy: &PasswordPolicy) -> ValidationResult {
    let pwd = password.expose_secret();
    let pwd_len = pwd.chars().count();
    let mut violations: Vec<Violation> = Vec::new();

    for rule in policy.effective_rules() {
        let violation = match rule {
            Rule::MinLength(n) => (*n > 0 && pwd_len < *n).then(|| count_violation(rule, *n)),
            Rule::MaxLength(n) => (*n > 0 && pwd_len > *n).then(|| count_violation(rule, *n)),
            Rule::MinDigit(n) => {
                (*n > 0 && counter::below_minimum(pwd, counter::is_digit, *n))
                    .then(|| count_violation(rule, *n))
            }
            Rule::MinSpecialChar(n) => {
                (*n > 0 && counter::below_minimum(pwd, counter::is_special, *n))
                    .then(|| count_violation(rule, *n))
            }
            Rule::MinUpperCase(n) => {
                (*n > 0 && counter::below_minimum(pwd, counter::is_upper, *n))
                    .then(|| count_violation(rule, *n))
            }
            Rule::MinLowerCase(n) => {
                (*n > 0 && counter::below_minimum(pwd, counter::is_lower, *n))
                    .then(|| count_violation(rule, *n))
            }
            Rule::Occurrences(n) => {
                (*n > 0 && repeats::has_repeated_run(pwd, *n)).then(|| count_violation(rule, *n))
            }
            Rule::Sequential(n) => {
                (*n > 0 && sequential::has_sequential_run(pwd, *n))
                    .then(|| count_violation(rule, *n))
            }
            Rule::CantContain(needles) => {
                contained_needle(pwd, needles).map(|needle| Violation {
                    kind: rule.kind(),
                    value: OffendingValue::Needle(needle),
                })
            }
            Rule::BlackList(entries) => {
                entries.iter().any(|e| e == pwd).then(|| Violation {
                    kind: rule.kind(),
                    value: OffendingValue::None,
                })
            }
            Rule::NotIn { previous, hashed } => {
                // the hashed list, when supplied, replaces the primary list
                let reference = match hashed {
                    Some(h) if !h.is_empty() => h,
                    _ => previous,
                };
                reference.iter().any(|e| e == pwd).then(|| Violation {
                    kind: rule.kind(),
                    value: OffendingValue::None,
                })
            }
        };
        if let Some(v) = violation {
            violations.push(v);
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        violations = violations.len(),
        "password validation completed"
    );

    ValidationResult {
        violations: violations.iter().map(Violation::render).collect(),
    }
}

fn count_violation(rule: &Rule, n: usize) -> Violation {
    Violation {
        kind: rule.kind(),
        value: OffendingValue::Count(n),
    }
}

/// First needle contained in `text`, compared case-insensitively.
fn contained_needle(text: &str, needles: &[String]) -> Option<String> {
    let lowered = text.to_lowercase();
    needles
        .iter()
        .find(|needle| lowered.contains(&needle.to_lowercase()))
        .cloned()
}
