//! # DataStore Module
//!
//! This module provides functionality for tracking the progress of note generation
//! jobs in a shared key-value status store.
//!
//! Each job owns a single record under `mindmap-requests/{request_id}` which is
//! written with partial-field updates, so callers can poll it while a job runs.

mod datastore;
mod domain;

pub use datastore::firebase::FirebaseStatusStore;
pub use datastore::{is_valid_request_id, StatusStore, REQUESTS_PATH};
pub use domain::{JobRecord, JobStatus, StatusUpdate};
