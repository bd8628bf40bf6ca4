//! Analytics [`Event`] definitions.

use serde::Serialize;

use crate::domain::{Criteria, Tab};
#[cfg(doc)]
use crate::{domain::Listing, Controller};

/// Analytics event emitted by a [`Controller`].
///
/// The [`Display`] form is the wire name of the event (`filter_applied`),
/// while the [`Serialize`] form is the whole payload with the name under the
/// `event` key.
///
/// [`Display`]: std::fmt::Display
#[derive(Clone, Debug, Eq, PartialEq, Serialize, strum::Display)]
#[serde(rename_all = "snake_case", rename_all_fields = "camelCase")]
#[serde(tag = "event")]
#[strum(serialize_all = "snake_case")]
pub enum Event {
    /// Filtering criteria were changed and reapplied.
    FilterApplied {
        /// New active [`Criteria`].
        criteria: Criteria,

        /// Number of [`Listing`]s matching the new [`Criteria`].
        results_count: usize,
    },

    /// Current page was changed.
    PageChange {
        /// 1-based number of the new page.
        page: usize,

        /// Total number of pages at the moment of the change.
        total_pages: usize,
    },

    /// Active [`Tab`] was changed.
    TabChange {
        /// Newly selected [`Tab`].
        tab: Tab,
    },
}
