//! Reading of the CSV run logs written by the deployment data logger.
//!
//! The logger writes one row per control step with a header row naming every
//! column. This crate locates the columns it understands by name, parses the
//! rows into [`RunRecord`]s, and offers wall-clock window filtering and
//! contact detection on top.

pub mod contact;
pub mod error;
pub mod reader;
pub mod record;
pub mod time;

pub use contact::{DEFAULT_FORCE_THRESHOLD, contact_mask, leg_contacts};
pub use error::{Error, Result};
pub use reader::read_log;
pub use record::RunRecord;
pub use time::{TimeWindow, elapsed_seconds, parse_wall_time};
