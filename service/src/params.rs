//! Location query [`Params`] definitions.

use std::{fmt, num::NonZeroUsize, str::FromStr};

use common::urlencoded;
use tracing as log;

use crate::domain::{Criteria, Tab};
#[cfg(doc)]
use crate::Controller;

/// Location query keys recognized by [`Params`].
mod key {
    /// Exact number of bedrooms.
    pub(super) const BEDROOMS: &str = "bedrooms";

    /// Monthly rent range in its `min-max` canonical form.
    pub(super) const PRICE: &str = "price";

    /// Move-in date filter text.
    pub(super) const MOVING_DATE: &str = "moving-date";

    /// Ordering token.
    pub(super) const SORT: &str = "sort";

    /// 1-based number of the current page.
    pub(super) const PAGE: &str = "page";

    /// Active tab.
    pub(super) const TAB: &str = "tab";
}

/// State of a [`Controller`] carried in the page location.
///
/// The parsed form of a query like
/// `bedrooms=2&price=1500-2000&moving-date=Dec+2026&sort=rent-low-high&page=2`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Params {
    /// Filtering and ordering [`Criteria`].
    pub criteria: Criteria,

    /// 1-based number of the requested page.
    ///
    /// [`None`] means the first page.
    pub page: Option<NonZeroUsize>,

    /// Active [`Tab`].
    pub tab: Option<Tab>,
}

impl Params {
    /// Parses a [`Params`] out of the provided location query (or hash
    /// fragment).
    ///
    /// Parsing is lenient: unrecognized keys are ignored, an empty value
    /// means "unset", a malformed value degrades its key to the default with
    /// a warning, and the last occurrence of a duplicated key wins. Any
    /// input, including an empty one, yields a usable [`Params`].
    #[must_use]
    pub fn parse(query: &str) -> Self {
        let mut params = Self::default();
        for (k, value) in urlencoded::parse(query) {
            match k.as_str() {
                key::BEDROOMS => {
                    params.criteria.bedrooms = parsed(key::BEDROOMS, &value);
                }
                key::PRICE => {
                    params.criteria.rent = parsed(key::PRICE, &value);
                }
                key::MOVING_DATE => {
                    params.criteria.moving_date =
                        parsed(key::MOVING_DATE, &value);
                }
                key::SORT => {
                    params.criteria.sort_by = parsed(key::SORT, &value);
                }
                key::PAGE => {
                    params.page = parsed(key::PAGE, &value);
                }
                key::TAB => {
                    params.tab = parsed(key::TAB, &value);
                }
                unknown => {
                    log::debug!("ignored unknown `{unknown}` query key");
                }
            }
        }
        params
    }

    /// Returns this [`Params`] as canonically ordered key-value pairs.
    ///
    /// Unset fields are omitted entirely.
    #[must_use]
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let Self { criteria, page, tab } = self;

        let mut pairs = Vec::with_capacity(6);
        if let Some(bedrooms) = criteria.bedrooms {
            pairs.push((key::BEDROOMS, bedrooms.to_string()));
        }
        if let Some(rent) = &criteria.rent {
            pairs.push((key::PRICE, rent.to_string()));
        }
        if let Some(moving_date) = &criteria.moving_date {
            pairs.push((key::MOVING_DATE, moving_date.to_string()));
        }
        if let Some(sort_by) = criteria.sort_by {
            pairs.push((key::SORT, sort_by.to_string()));
        }
        if let Some(page) = page {
            pairs.push((key::PAGE, page.to_string()));
        }
        if let Some(tab) = tab {
            pairs.push((key::TAB, tab.to_string()));
        }
        pairs
    }

    /// Serializes this [`Params`] into its canonical location query.
    ///
    /// Unset fields are omitted, so the all-default [`Params`] serializes
    /// into an empty string. [`Params::parse()`] of the result returns the
    /// same [`Params`] back.
    #[must_use]
    pub fn to_query(&self) -> String {
        urlencoded::serialize(self.pairs())
    }
}

/// Parses the provided value of the provided location query key, degrading
/// to [`None`] on malformed input.
///
/// An empty value means "unset" and is not reported as malformed.
fn parsed<T>(key: &str, value: &str) -> Option<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    if value.is_empty() {
        return None;
    }
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            log::warn!("malformed `{key}` value {value:?}: {e}");
            None
        }
    }
}
