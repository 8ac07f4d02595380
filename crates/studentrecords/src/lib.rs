//! `studentrecords` - A single-user record manager for student records
//!
//! This library provides an in-memory table of students kept in sync with a
//! flat comma-separated file, and the interactive menu shell that drives it.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod shell;
pub mod store;
pub mod student;

pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use shell::Shell;
pub use store::RecordStore;
pub use student::Student;
