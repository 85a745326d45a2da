//! General useful bits and bobs

use super::*;

mod attempt_any_to_string;
pub mod config;
mod filesystem;
mod lock_unpoisoned;
mod or_log;
mod short_type_name;
#[cfg(test)]
mod test_helpers;

pub use attempt_any_to_string::attempt_any_to_string;
pub use config::RequestLogFormat;
pub use filesystem::{real_filesystem, FileSource, Filesystem};
pub use lock_unpoisoned::lock_unpoisoned;
pub use or_log::OrLog;
pub use short_type_name::short_type_name;
#[cfg(test)]
pub use test_helpers::*;
