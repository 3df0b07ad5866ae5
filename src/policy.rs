//! Policy model - rules, the chainable builder and the frozen policy.

use std::sync::LazyLock;

/// One configured password constraint.
///
/// Count-valued rules with a value of zero and list-valued rules with an
/// empty list are treated as disabled by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Password must be at least this many characters long.
    MinLength(usize),
    /// Password must be at most this many characters long.
    MaxLength(usize),
    /// Password must contain at least this many ASCII digits.
    MinDigit(usize),
    /// Password must contain at least this many characters that are
    /// neither alphanumeric nor whitespace.
    MinSpecialChar(usize),
    /// Password must contain at least this many uppercase letters.
    MinUpperCase(usize),
    /// Password must contain at least this many lowercase letters.
    MinLowerCase(usize),
    /// Password must not repeat any single character this many times
    /// consecutively.
    Occurrences(usize),
    /// Password must not contain an ascending run of this many consecutive
    /// letters or digits in any supported script.
    Sequential(usize),
    /// Password must not contain any of these needles as a substring
    /// (case-insensitive).
    CantContain(Vec<String>),
    /// Password must not exactly equal any of these entries.
    BlackList(Vec<String>),
    /// Password must not exactly equal a previous password. When `hashed`
    /// is present it is the list actually checked; this crate never hashes
    /// anything itself, it only compares against what the caller supplies.
    NotIn {
        previous: Vec<String>,
        hashed: Option<Vec<String>>,
    },
}

impl Rule {
    pub fn kind(&self) -> RuleKind {
        match self {
            Rule::MinLength(_) => RuleKind::MinLength,
            Rule::MaxLength(_) => RuleKind::MaxLength,
            Rule::MinDigit(_) => RuleKind::MinDigit,
            Rule::MinSpecialChar(_) => RuleKind::MinSpecialChar,
            Rule::MinUpperCase(_) => RuleKind::MinUpperCase,
            Rule::MinLowerCase(_) => RuleKind::MinLowerCase,
            Rule::Occurrences(_) => RuleKind::Occurrences,
            Rule::Sequential(_) => RuleKind::Sequential,
            Rule::CantContain(_) => RuleKind::CantContain,
            Rule::BlackList(_) => RuleKind::BlackList,
            Rule::NotIn { .. } => RuleKind::NotIn,
        }
    }
}

/// Discriminant of a [`Rule`], used for overwrite-on-reconfigure and for
/// message lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    MinLength,
    MaxLength,
    MinDigit,
    MinSpecialChar,
    MinUpperCase,
    MinLowerCase,
    Occurrences,
    Sequential,
    CantContain,
    BlackList,
    NotIn,
}

/// Chainable builder for a [`PasswordPolicy`].
///
/// Each setter inserts or overwrites the rule of its kind. Configuring the
/// same kind twice keeps the later value at the original insertion
/// position, so evaluation order follows first configuration.
///
/// # Example
///
/// ```rust
/// use pwd_policy::PasswordPolicy;
///
/// let policy = PasswordPolicy::builder()
///     .min_length(10)
///     .min_digit(2)
///     .max_sequential(4)
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct PolicyBuilder {
    rules: Vec<Rule>,
}

impl PolicyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_length(self, value: usize) -> Self {
        self.set(Rule::MinLength(value))
    }

    pub fn max_length(self, value: usize) -> Self {
        self.set(Rule::MaxLength(value))
    }

    pub fn min_digit(self, value: usize) -> Self {
        self.set(Rule::MinDigit(value))
    }

    pub fn min_special_char(self, value: usize) -> Self {
        self.set(Rule::MinSpecialChar(value))
    }

    pub fn min_upper_case(self, value: usize) -> Self {
        self.set(Rule::MinUpperCase(value))
    }

    pub fn min_lower_case(self, value: usize) -> Self {
        self.set(Rule::MinLowerCase(value))
    }

    /// Disallows the given needles as substrings (case-insensitive).
    pub fn cant_contain<I, S>(self, needles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set(Rule::CantContain(
            needles.into_iter().map(Into::into).collect(),
        ))
    }

    /// Disallows exact matches against the given entries.
    pub fn black_list<I, S>(self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set(Rule::BlackList(
            entries.into_iter().map(Into::into).collect(),
        ))
    }

    /// Disallows reuse of a previous password. When `hashed` is `Some`,
    /// that list is checked instead of `previous`.
    pub fn not_in<I, S>(self, previous: I, hashed: Option<Vec<String>>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set(Rule::NotIn {
            previous: previous.into_iter().map(Into::into).collect(),
            hashed,
        })
    }

    /// Disallows `value` or more consecutive occurrences of one character.
    pub fn max_occurrences(self, value: usize) -> Self {
        self.set(Rule::Occurrences(value))
    }

    /// Disallows ascending runs of `value` consecutive letters or digits.
    pub fn max_sequential(self, value: usize) -> Self {
        self.set(Rule::Sequential(value))
    }

    /// Freezes the builder into an immutable policy.
    pub fn build(self) -> PasswordPolicy {
        PasswordPolicy { rules: self.rules }
    }

    fn set(mut self, rule: Rule) -> Self {
        match self.rules.iter_mut().find(|r| r.kind() == rule.kind()) {
            Some(slot) => *slot = rule,
            None => self.rules.push(rule),
        }
        self
    }
}

/// An immutable, ordered set of password rules.
///
/// Rule insertion order is evaluation order. A policy with no rules makes
/// the engine fall back to [`PasswordPolicy::default`]. Policies carry no
/// evaluation state, so one instance can be shared across concurrent
/// validation calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordPolicy {
    rules: Vec<Rule>,
}

impl PasswordPolicy {
    pub fn builder() -> PolicyBuilder {
        PolicyBuilder::new()
    }

    /// The configured rules in insertion order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The rules actually evaluated: the configured ones, or the default
    /// set when nothing was configured.
    pub(crate) fn effective_rules(&self) -> &[Rule] {
        if self.rules.is_empty() {
            DEFAULT_POLICY.rules()
        } else {
            &self.rules
        }
    }
}

impl Default for PasswordPolicy {
    /// The canonical default rule set: at least 8 characters, one digit,
    /// one special character, one uppercase letter, no character repeated
    /// 3+ times in a row, no ascending run of 3+ letters or digits.
    fn default() -> Self {
        PolicyBuilder::new()
            .min_length(8)
            .min_digit(1)
            .min_special_char(1)
            .min_upper_case(1)
            .max_occurrences(3)
            .max_sequential(3)
            .build()
    }
}

static DEFAULT_POLICY: LazyLock<PasswordPolicy> = LazyLock::new(PasswordPolicy::default);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_preserved() {
        let policy = PasswordPolicy::builder()
            .max_sequential(3)
            .min_length(8)
            .min_digit(1)
            .build();
        let kinds: Vec<RuleKind> = policy.rules().iter().map(Rule::kind).collect();
        assert_eq!(
            kinds,
            vec![RuleKind::Sequential, RuleKind::MinLength, RuleKind::MinDigit]
        );
    }

    #[test]
    fn test_last_write_wins_keeps_position() {
        let policy = PasswordPolicy::builder()
            .min_length(10)
            .min_digit(1)
            .min_length(4)
            .build();
        assert_eq!(policy.rules().len(), 2);
        assert_eq!(policy.rules()[0], Rule::MinLength(4));
        assert_eq!(policy.rules()[1], Rule::MinDigit(1));
    }

    #[test]
    fn test_default_policy_rule_order() {
        let kinds: Vec<RuleKind> = PasswordPolicy::default()
            .rules()
            .iter()
            .map(Rule::kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                RuleKind::MinLength,
                RuleKind::MinDigit,
                RuleKind::MinSpecialChar,
                RuleKind::MinUpperCase,
                RuleKind::Occurrences,
                RuleKind::Sequential,
            ]
        );
    }

    #[test]
    fn test_empty_policy_falls_back_to_default() {
        let policy = PasswordPolicy::builder().build();
        assert!(policy.is_empty());
        assert_eq!(policy.effective_rules(), PasswordPolicy::default().rules());
    }

    #[test]
    fn test_not_in_stores_hashed_list() {
        let policy = PasswordPolicy::builder()
            .not_in(vec!["old-password"], Some(vec!["$2y$abc".to_string()]))
            .build();
        assert_eq!(
            policy.rules()[0],
            Rule::NotIn {
                previous: vec!["old-password".to_string()],
                hashed: Some(vec!["$2y$abc".to_string()]),
            }
        );
    }
}
