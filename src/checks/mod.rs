//! Password content checks
//!
//! Each check analyzes one aspect of the password's content. The engine
//! decides which checks to run and with what thresholds.

pub(crate) mod catalog;
pub(crate) mod counter;
pub(crate) mod repeats;
pub(crate) mod sequential;
