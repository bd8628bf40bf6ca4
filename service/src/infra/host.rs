//! [`Host`]-related implementations.

use tracing as log;

use crate::event::Event;
#[cfg(doc)]
use crate::Controller;

/// Side of the page hosting a [`Controller`].
///
/// Receives the outward effects of the [`Controller`]'s state changes: the
/// canonical location to display and analytics notifications. Effects are
/// delivered synchronously, in the order they're produced, and must be
/// infallible, as the [`Controller`] never retries them.
pub trait Host {
    /// Replaces the displayed location query with the provided one.
    ///
    /// The query is the canonical serialization of the current state, with
    /// all-default state serialized as an empty string.
    fn sync_location(&mut self, query: &str);

    /// Delivers the provided analytics [`Event`].
    fn notify(&mut self, event: Event);
}

/// [`Host`] delivering both effects to the log.
///
/// Serves deployments without a dedicated analytics sink: every emission
/// becomes a structured log record instead.
#[derive(Clone, Copy, Debug, Default)]
pub struct Log;

impl Host for Log {
    fn sync_location(&mut self, query: &str) {
        log::info!("location synced: {query}");
    }

    fn notify(&mut self, event: Event) {
        log::info!("analytics `{event}` event: {event:?}");
    }
}
