use std::sync::{Arc, Mutex};

use mindmap_datastore::{JobRecord, JobStatus, StatusStore, StatusUpdate};

#[derive(Clone, Default)]
pub struct MockStatusStore {
    pub updates: Arc<Mutex<Vec<(String, StatusUpdate)>>>,
    pub fail_with: Option<String>,
    pub fail_on: Option<JobStatus>,
}

impl MockStatusStore {
    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Default::default()
        }
    }

    /// Only updates moving the record to `status` fail.
    pub fn failing_on(status: JobStatus, msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            fail_on: Some(status),
            ..Default::default()
        }
    }

    pub fn statuses(&self) -> Vec<JobStatus> {
        self.updates
            .lock()
            .unwrap()
            .iter()
            .map(|(_, update)| update.status)
            .collect()
    }

    pub fn last_update(&self) -> Option<StatusUpdate> {
        self.updates
            .lock()
            .unwrap()
            .last()
            .map(|(_, update)| update.clone())
    }
}

impl StatusStore for MockStatusStore {
    async fn update_status(&self, request_id: &str, update: &StatusUpdate) -> anyhow::Result<()> {
        if let Some(ref msg) = self.fail_with {
            if self.fail_on.map_or(true, |status| status == update.status) {
                return Err(anyhow::anyhow!("{}", msg));
            }
        }
        self.updates
            .lock()
            .unwrap()
            .push((request_id.to_string(), update.clone()));
        Ok(())
    }

    async fn fetch_status(&self, request_id: &str) -> anyhow::Result<Option<JobRecord>> {
        let updates = self.updates.lock().unwrap();
        let record = updates
            .iter()
            .filter(|(id, _)| id == request_id)
            .fold(None, |record: Option<JobRecord>, (_, update)| match record {
                Some(mut record) => {
                    record.apply(update);
                    Some(record)
                }
                None => Some(JobRecord::from(update.clone())),
            });
        Ok(record)
    }
}
