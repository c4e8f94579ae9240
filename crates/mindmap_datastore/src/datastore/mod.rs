use std::future::Future;

use crate::{JobRecord, StatusUpdate};

pub mod firebase;

/// Root under which every job record is keyed.
pub const REQUESTS_PATH: &str = "mindmap-requests";

/// Characters Firebase refuses in a key.
const FORBIDDEN_KEY_CHARS: [char; 6] = ['.', '$', '#', '[', ']', '/'];

/// Whether `request_id` can name a job record.
pub fn is_valid_request_id(request_id: &str) -> bool {
    !request_id.is_empty() && !request_id.contains(&FORBIDDEN_KEY_CHARS[..])
}

pub trait StatusStore {
    /// Applies a partial update to the record of `request_id`, creating it if needed.
    fn update_status(
        &self,
        request_id: &str,
        update: &StatusUpdate,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;

    /// Reads the current record of `request_id`, `None` if it was never written.
    fn fetch_status(
        &self,
        request_id: &str,
    ) -> impl Future<Output = anyhow::Result<Option<JobRecord>>> + Send;
}
