//! Country lookup state owned by a mounted registration screen

use crate::lookup::{sort_options, CountryOption, LookupError};
use tokio::task::JoinHandle;

/// Result of a fetch, tagged with the lookup that started it
#[derive(Debug)]
pub struct LookupEvent {
    pub lookup_id: u64,
    pub result: Result<Vec<CountryOption>, LookupError>,
}

/// Loading flag and options for one screen mount.
///
/// Dropping the lookup aborts its fetch, so a screen that is popped off the
/// navigation stack never receives a late update.
#[derive(Debug)]
pub struct CountryLookup {
    id: u64,
    pub loading: bool,
    pub options: Vec<CountryOption>,
    task: Option<JoinHandle<()>>,
}

impl CountryLookup {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            loading: false,
            options: Vec::new(),
            task: None,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Record the in-flight fetch
    pub fn begin(&mut self, task: JoinHandle<()>) {
        self.loading = true;
        self.task = Some(task);
    }

    /// Apply a finished fetch. Options are kept sorted by label; failures are
    /// logged and leave the list empty.
    pub fn apply(&mut self, result: Result<Vec<CountryOption>, LookupError>) {
        self.loading = false;
        self.task = None;
        match result {
            Ok(mut options) => {
                sort_options(&mut options);
                self.options = options;
            }
            Err(err) => {
                tracing::error!("Error fetching countries: {err}");
                self.options.clear();
            }
        }
    }

    /// Abort an in-flight fetch
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            tracing::debug!(lookup_id = self.id, "country lookup cancelled");
        }
        self.loading = false;
    }
}

impl Drop for CountryLookup {
    fn drop(&mut self) {
        self.cancel();
    }
}
