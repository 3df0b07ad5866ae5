//! Password policy validation library
//!
//! This library validates a candidate password against a configurable,
//! ordered set of strength rules and reports every violated rule as a
//! human-readable message. It is a pure policy engine: it never stores,
//! hashes or transmits credentials, and any check against previous
//! passwords is a plain membership test over caller-supplied values.
//!
//! Rules are evaluated in configuration order and all failures are
//! collected, never just the first one. Sequential-character detection
//! covers the Latin alphabet, both common orderings of the Arabic abjad,
//! and ASCII as well as Arabic-Indic digits.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_POLICY_BLACKLIST_PATH`: Custom path to blacklist file
//!   (default: `./assets/blacklist.txt`)
//!
//! # Example
//!
//! ```rust
//! use pwd_policy::{PasswordPolicy, validate_password};
//! use secrecy::SecretString;
//!
//! let policy = PasswordPolicy::builder()
//!     .min_length(10)
//!     .min_digit(1)
//!     .min_upper_case(1)
//!     .cant_contain(vec!["admin"])
//!     .build();
//!
//! let password = SecretString::new("S3cure-enough".to_string().into());
//! let result = validate_password(&password, &policy);
//!
//! assert!(result.passed());
//! assert!(result.errors().is_empty());
//! ```
//!
//! An empty policy falls back to the default rule set: at least 8
//! characters, 1 digit, 1 special character, 1 uppercase letter, no
//! character repeated 3+ times in a row and no ascending run of 3+
//! letters or digits.

// Internal modules
mod blacklist;
mod checks;
mod engine;
mod policy;
mod report;

// Public API
pub use blacklist::{BlacklistError, blacklist_path, load_blacklist, load_blacklist_from_path};
pub use engine::{ValidationResult, validate_password};
pub use policy::{PasswordPolicy, PolicyBuilder, Rule, RuleKind};
