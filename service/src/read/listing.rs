//! [`Listing`]-related read definitions.

use common::Paging;

use crate::domain::listing;
#[cfg(doc)]
use crate::{domain::Listing, Controller};

/// Current page of [`Listing`]s, as seen by the presentation layer.
///
/// Produced by [`Controller::view()`]. Holds no references into the
/// [`Controller`], so it may outlive the state it was projected from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct View {
    /// [`listing::Id`]s on the current page, in display order.
    pub visible: Vec<listing::Id>,

    /// Pagination position of the current page.
    pub paging: Paging,

    /// Indicator whether no [`Listing`]s match the active criteria at all.
    ///
    /// Distinguishes "nothing matched" from a short last page.
    pub empty: bool,
}
