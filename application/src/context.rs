//! [`Context`]-related definitions.

use std::sync::Arc;

use service::{domain::Listing, infra::host, Controller, Params};

/// Shared state of the HTTP handlers.
///
/// Cheap to clone: the catalog of [`Listing`]s is shared, never copied.
#[derive(Clone, Debug)]
pub struct Context {
    /// Catalog of [`Listing`]s being served.
    catalog: Arc<Vec<Listing>>,

    /// [`Controller`] configuration.
    config: service::Config,
}

impl Context {
    /// Creates a new [`Context`] serving the provided catalog of
    /// [`Listing`]s.
    #[must_use]
    pub fn new(catalog: Vec<Listing>, config: service::Config) -> Self {
        Self {
            catalog: Arc::new(catalog),
            config,
        }
    }

    /// Builds a [`Controller`] over the served catalog, with its state
    /// restored from the provided location `query`.
    #[must_use]
    pub fn controller(&self, query: &str) -> Controller<host::Log> {
        let mut controller =
            Controller::new(self.config, Arc::clone(&self.catalog), host::Log);
        controller.initialize(Params::parse(query));
        controller
    }
}
