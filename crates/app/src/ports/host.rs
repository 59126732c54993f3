//! Host port — service invocation on the home-automation host.

use std::future::Future;

use plantmon_domain::error::PlantMonError;
use plantmon_domain::service::ServiceCall;

/// Forwards service calls (e.g. `switch.turn_on`) to the host.
///
/// Calls are fire-and-forget from the card's point of view: a successful
/// return only means the host accepted the request, not that the entity
/// already changed state.
pub trait ServiceCaller {
    /// Submit a service call.
    fn call_service(
        &self,
        call: ServiceCall,
    ) -> impl Future<Output = Result<(), PlantMonError>> + Send;
}

impl<T: ServiceCaller + Send + Sync> ServiceCaller for std::sync::Arc<T> {
    fn call_service(
        &self,
        call: ServiceCall,
    ) -> impl Future<Output = Result<(), PlantMonError>> + Send {
        (**self).call_service(call)
    }
}
