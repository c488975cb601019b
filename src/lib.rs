//! Fetch one JSON document from a public REST API and archive it to a local
//! file.
//!
//! Three stages run in order, once per process invocation:
//! [`fetcher::fetch`] issues a single blocking GET, [`validator::validate`]
//! checks the application-level status embedded in the body and picks the
//! sub-value worth keeping, and [`archiver::save_to_file`] writes it out as
//! 4-space-indented JSON. Every failure is terminal; no stage retries.

pub mod archiver;
pub mod error;
pub mod fetcher;
pub mod models;
pub mod validator;

pub use error::{FetchError, PersistError, ValidationError};
pub use models::{FetchJob, ResponseShape};
