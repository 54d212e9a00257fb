//! Database access capability used by the handler.
//!
//! The handler acquires a client on every invocation but does not call into it
//! yet. Vendor SDK types stay behind [`DataClient`] so the core crate never
//! depends on them.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataClientConfig {}

pub trait DataClient {
    /// Storage backend name, used in log fields.
    fn backend(&self) -> &'static str;
}

pub trait DataClientFactory {
    /// Builds a client without opening a connection.
    fn connect(&self, config: &DataClientConfig) -> Box<dyn DataClient>;
}

/// Stand-in used when no real backend is wired, such as local runs.
pub struct NoopDataClient;

impl DataClient for NoopDataClient {
    fn backend(&self) -> &'static str {
        "noop"
    }
}

pub struct NoopDataClientFactory;

impl DataClientFactory for NoopDataClientFactory {
    fn connect(&self, _config: &DataClientConfig) -> Box<dyn DataClient> {
        Box::new(NoopDataClient)
    }
}
