//! CLI command handling
//!
//! - Argument parsing structures
//! - Run orchestration
//! - Log verbosity
//! - Input validation

pub mod args;
pub mod help;
pub mod router;
pub mod validation;

pub use args::Cli;
pub use help::get_log_level;
pub use router::{execute, RunOptions};
pub use validation::parse_date;
