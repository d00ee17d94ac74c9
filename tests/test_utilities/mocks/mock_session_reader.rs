use site_inspector::prelude::*;
use std::path::Path;

/// Mock SessionReader for testing that serves an in-memory session
///
/// The session is validated on every read, as the JSON reader does.
pub struct MockSessionReader {
    session: InspectionSession,
}

impl MockSessionReader {
    pub fn new(session: InspectionSession) -> Self {
        Self { session }
    }
}

impl SessionReader for MockSessionReader {
    fn read_session(&self, _path: &Path) -> Result<InspectionSession> {
        self.session.validate()?;
        Ok(self.session.clone())
    }
}
