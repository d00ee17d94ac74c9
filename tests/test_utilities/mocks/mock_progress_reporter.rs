use site_inspector::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock ProgressReporter for testing
///
/// Status lines are captured as text; counted progress is kept as `(current, total)`
/// pairs so tests can check a batch ran to completion.
#[derive(Default, Clone)]
pub struct MockProgressReporter {
    messages: Arc<Mutex<Vec<String>>>,
    progress: Arc<Mutex<Vec<(usize, usize)>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    /// True when any captured message contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.get_messages().iter().any(|m| m.contains(needle))
    }

    pub fn last_progress(&self) -> Option<(usize, usize)> {
        self.progress.lock().unwrap().last().copied()
    }

    pub fn progress_updates(&self) -> usize {
        self.progress.lock().unwrap().len()
    }

    fn push(&self, message: String) {
        self.messages.lock().unwrap().push(message);
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.push(message.to_string());
    }

    fn report_progress(&self, current: usize, total: usize, _message: Option<&str>) {
        self.progress.lock().unwrap().push((current, total));
    }

    fn report_error(&self, message: &str) {
        self.push(format!("Error: {}", message));
    }

    fn report_completion(&self, message: &str) {
        self.push(format!("Completed: {}", message));
    }
}
