//! Service contains the business logic of the floor plans page.

#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod domain;
pub mod event;
pub mod infra;
pub mod params;
pub mod read;

use std::{cmp, num::NonZeroUsize, sync::Arc};

use common::{pagination::PageSize, Paging};
use smart_default::SmartDefault;
use tracing as log;

use self::{
    domain::{
        criteria::{self, SortBy},
        listing, Criteria, Listing, Tab,
    },
    read::View,
};

pub use self::{event::Event, infra::Host, params::Params};

/// Number of [`Listing`]s on a single page, unless configured otherwise.
const DEFAULT_PAGE_SIZE: PageSize = match PageSize::new(6) {
    Some(size) => size,
    None => unreachable!(),
};

/// [`Controller`] configuration.
#[derive(Clone, Copy, Debug, SmartDefault)]
pub struct Config {
    /// Number of [`Listing`]s on a single page.
    ///
    /// Fixed for the whole lifetime of a [`Controller`].
    #[default(DEFAULT_PAGE_SIZE)]
    pub page_size: PageSize,
}

/// State machine of the floor plans page: filters, orders and paginates an
/// immutable catalog of [`Listing`]s.
///
/// Owns all of its state. Every operation is synchronous and runs to
/// completion, with outward effects (location updates and analytics
/// [`Event`]s) delivered to the [`Host`] only. None of the operations fail:
/// malformed input degrades to defaults and out-of-range navigation is
/// rejected, keeping the state presentable at all times.
#[derive(Clone, Debug)]
pub struct Controller<H> {
    /// Configuration of this [`Controller`].
    config: Config,

    /// Source catalog of [`Listing`]s, in its presentation order.
    ///
    /// Shared, not copied, between [`Controller`]s over the same catalog.
    catalog: Arc<Vec<Listing>>,

    /// Active filtering and ordering [`Criteria`].
    criteria: Criteria,

    /// Active [`Tab`], if any.
    tab: Option<Tab>,

    /// 1-based number of the current page.
    ///
    /// Always within the range of pages of the filtered catalog.
    page: usize,

    /// Indices of the catalog [`Listing`]s matching the active [`Criteria`],
    /// in display order.
    filtered: Vec<usize>,

    /// [`Host`] receiving the outward effects.
    host: H,
}

impl<H> Controller<H> {
    /// Creates a new [`Controller`] over the provided catalog of
    /// [`Listing`]s.
    ///
    /// The catalog order is the presentation order of unsorted results, and
    /// a catalog already behind an [`Arc`] is shared, not copied. The
    /// created [`Controller`] shows the whole catalog from its first page:
    /// use [`Controller::initialize()`] to restore a persisted state.
    #[must_use]
    pub fn new(
        config: Config,
        catalog: impl Into<Arc<Vec<Listing>>>,
        host: H,
    ) -> Self {
        let catalog = catalog.into();
        let filtered = (0..catalog.len()).collect();
        Self {
            config,
            catalog,
            criteria: Criteria::default(),
            tab: None,
            page: 1,
            filtered,
            host,
        }
    }

    /// Restores this [`Controller`]'s state from the provided [`Params`].
    ///
    /// Filters are applied immediately, and an out-of-range persisted page
    /// is clamped into the valid range. No outward effects are produced, as
    /// restoring a state is not a change of it.
    pub fn initialize(&mut self, params: Params) {
        let Params { criteria, page, tab } = params;
        self.criteria = criteria;
        self.tab = tab;
        self.page = page.map_or(1, NonZeroUsize::get);
        self.apply_filters();
    }

    /// Recomputes the filtered catalog from the active [`Criteria`].
    ///
    /// Matching [`Listing`]s are collected in catalog order and then stably
    /// sorted by rent when [`SortBy`] is set, so equal rents keep their
    /// relative catalog order in both directions. The current page is
    /// re-clamped afterwards, as a narrower result set may have fewer pages.
    ///
    /// Idempotent: reapplying unchanged [`Criteria`] never changes the
    /// outcome.
    pub fn apply_filters(&mut self) {
        self.filtered = self
            .catalog
            .iter()
            .enumerate()
            .filter(|(_, listing)| self.criteria.matches(listing))
            .map(|(index, _)| index)
            .collect();
        match self.criteria.sort_by {
            Some(SortBy::RentLowHigh) => {
                self.filtered.sort_by_key(|&index| self.catalog[index].rent);
            }
            Some(SortBy::RentHighLow) => {
                self.filtered.sort_by_key(|&index| {
                    cmp::Reverse(self.catalog[index].rent)
                });
            }
            None => {}
        }
        self.page = self.paging().current();
    }

    /// Clears the active [`Criteria`] back to defaults.
    ///
    /// The whole catalog becomes visible again in its source order, and the
    /// current page resets to 1. No outward effects are produced.
    pub fn reset_filters(&mut self) {
        self.criteria = Criteria::default();
        self.page = 1;
        self.apply_filters();
    }

    /// Projects the current state of this [`Controller`] into a [`View`].
    #[must_use]
    pub fn view(&self) -> View {
        let paging = self.paging();
        View {
            visible: self
                .filtered
                .iter()
                .skip(paging.offset(self.config.page_size))
                .take(self.config.page_size.get())
                .map(|&index| self.catalog[index].id)
                .collect(),
            paging,
            empty: self.filtered.is_empty(),
        }
    }

    /// Builds a deep link to the details page of the provided [`Listing`].
    ///
    /// The link carries the active [`Criteria`] only: the page and the tab
    /// are list-local state and don't survive the jump. An all-default
    /// [`Criteria`] appends nothing.
    #[must_use]
    pub fn detail_link(&self, listing: &Listing) -> String {
        let mut link = listing.link.expand(listing.id);
        let query = Params {
            criteria: self.criteria.clone(),
            page: None,
            tab: None,
        }
        .to_query();
        if !query.is_empty() {
            link.push(if link.contains('?') { '&' } else { '?' });
            link.push_str(&query);
        }
        link
    }

    /// Returns the current state of this [`Controller`] as [`Params`].
    ///
    /// The first page is the default and is left unset.
    #[must_use]
    pub fn params(&self) -> Params {
        Params {
            criteria: self.criteria.clone(),
            page: NonZeroUsize::new(self.page).filter(|p| p.get() > 1),
            tab: self.tab.clone(),
        }
    }

    /// Returns the canonical location query of the current state.
    ///
    /// The all-default state serializes into an empty string.
    #[must_use]
    pub fn location(&self) -> String {
        self.params().to_query()
    }

    /// Returns [`Config`] of this [`Controller`].
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the active [`Criteria`] of this [`Controller`].
    #[must_use]
    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    /// Returns the active [`Tab`] of this [`Controller`], if any.
    #[must_use]
    pub fn tab(&self) -> Option<&Tab> {
        self.tab.as_ref()
    }

    /// Returns the [`Host`] of this [`Controller`].
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Returns the source catalog of [`Listing`]s, in its presentation
    /// order.
    #[must_use]
    pub fn listings(&self) -> &[Listing] {
        &self.catalog
    }

    /// Looks up a catalog [`Listing`] by the provided ID.
    #[must_use]
    pub fn listing(&self, id: listing::Id) -> Option<&Listing> {
        self.catalog.iter().find(|l| l.id == id)
    }

    /// Returns the [`Paging`] of the current state.
    fn paging(&self) -> Paging {
        Paging::new(self.filtered.len(), self.config.page_size, self.page)
    }
}

impl<H: Host> Controller<H> {
    /// Merges the provided [`criteria::Update`] into the active [`Criteria`]
    /// and reapplies filters.
    ///
    /// The current page resets to 1, then the [`Host`] receives the new
    /// canonical location and an [`Event::FilterApplied`].
    pub fn set_criteria(&mut self, update: criteria::Update) {
        self.criteria.apply(update);
        self.page = 1;
        self.apply_filters();
        self.sync_location();
        let event = Event::FilterApplied {
            criteria: self.criteria.clone(),
            results_count: self.filtered.len(),
        };
        self.host.notify(event);
    }

    /// Navigates to the provided 1-based page of the current result set.
    ///
    /// An out-of-range `page` is rejected: the state stays untouched, a
    /// warning is logged, and no effects are emitted. An explicit request is
    /// never auto-redirected. On success the [`Host`] receives the new
    /// canonical location and an [`Event::PageChange`], even when `page` is
    /// the current page already.
    pub fn go_to_page(&mut self, page: usize) {
        let paging = self.paging();
        if !paging.contains(page) {
            log::warn!(
                "rejected navigation to page {page}: out of range 1..={}",
                paging.total(),
            );
            return;
        }
        self.page = page;
        self.sync_location();
        let event = Event::PageChange {
            page,
            total_pages: paging.total(),
        };
        self.host.notify(event);
    }

    /// Selects the provided [`Tab`] as the active one.
    ///
    /// The [`Host`] receives the new canonical location and an
    /// [`Event::TabChange`].
    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = Some(tab.clone());
        self.sync_location();
        self.host.notify(Event::TabChange { tab });
    }

    /// Pushes the canonical location of the current state to the [`Host`].
    fn sync_location(&mut self) {
        let query = self.location();
        self.host.sync_location(&query);
    }
}
