//! Offline service caller.

use std::sync::Mutex;

use plantmon_app::ports::ServiceCaller;
use plantmon_domain::error::PlantMonError;
use plantmon_domain::service::ServiceCall;

/// [`ServiceCaller`] for offline runs: every call is logged and kept in
/// memory instead of being sent to a host.
#[derive(Debug, Default)]
pub struct RecordingServiceCaller {
    calls: Mutex<Vec<ServiceCall>>,
}

impl RecordingServiceCaller {
    /// Calls received so far, oldest first.
    #[must_use]
    pub fn calls(&self) -> Vec<ServiceCall> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

impl ServiceCaller for RecordingServiceCaller {
    async fn call_service(&self, call: ServiceCall) -> Result<(), PlantMonError> {
        tracing::info!(
            domain = %call.domain,
            service = %call.service,
            target = call.target(),
            "service call recorded"
        );
        self.calls
            .lock()
            .map_err(|err| PlantMonError::Host(err.to_string().into()))?
            .push(call);
        Ok(())
    }
}
