use crate::contract::{InvocationEvent, ResponseEnvelope};
use crate::data_client::{DataClientConfig, DataClientFactory};
use crate::diagnostics::emit_hello_test_line;

/// Handles one invocation. The event is accepted as-is and every call succeeds.
pub fn handle_event(
    _event: &InvocationEvent,
    data_clients: &dyn DataClientFactory,
) -> ResponseEnvelope {
    let data_client = data_clients.connect(&DataClientConfig::default());
    tracing::debug!(backend = data_client.backend(), "data client ready");

    emit_hello_test_line();

    ResponseEnvelope::hello()
}
