//! Abstractions for page-number pagination.

use std::num::NonZeroUsize;

/// Number of items on a single page.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    /// Creates a new [`PageSize`] by checking the provided value is positive.
    #[must_use]
    pub const fn new(size: usize) -> Option<Self> {
        match NonZeroUsize::new(size) {
            Some(s) => Some(Self(s)),
            None => None,
        }
    }

    /// Returns this [`PageSize`] as a plain number of items.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl From<NonZeroUsize> for PageSize {
    fn from(size: NonZeroUsize) -> Self {
        Self(size)
    }
}

/// Position within a paginated list.
///
/// A [`Paging`] always describes at least one page: an empty list degrades to
/// a single empty page rather than to zero pages.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Paging {
    /// 1-based number of the current page.
    current: usize,

    /// Total number of pages.
    total: usize,
}

impl Paging {
    /// Distance from the current page within which numbered [`Control`]s are
    /// rendered.
    const WINDOW: usize = 2;

    /// Creates a new [`Paging`] over `total_items` items split into pages of
    /// the provided [`PageSize`].
    ///
    /// The `requested` page is clamped into the valid range, so the returned
    /// [`Paging`] always points at an existing page. Callers that must reject
    /// an out-of-range request instead of being redirected should consult
    /// [`Paging::contains()`] first.
    #[must_use]
    pub fn new(total_items: usize, size: PageSize, requested: usize) -> Self {
        let total = total_items.div_ceil(size.get()).max(1);
        Self {
            current: requested.clamp(1, total),
            total,
        }
    }

    /// Returns the 1-based number of the current page.
    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    /// Returns the total number of pages.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Indicates whether the provided page number exists in this [`Paging`].
    #[must_use]
    pub const fn contains(&self, page: usize) -> bool {
        page >= 1 && page <= self.total
    }

    /// Indicates whether a page precedes the current one.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.current > 1
    }

    /// Indicates whether a page follows the current one.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.current < self.total
    }

    /// Returns the number of items preceding the current page, given the
    /// [`PageSize`] this [`Paging`] was built with.
    #[must_use]
    pub const fn offset(&self, size: PageSize) -> usize {
        (self.current - 1) * size.get()
    }

    /// Returns the pagination bar for this [`Paging`], in rendering order.
    ///
    /// The bar is empty when there is a single page only. Otherwise it's a
    /// [`Control::Previous`], then numbered pages windowed to the first page,
    /// the last page and two neighbors on either side of the current page
    /// (with a [`Control::Ellipsis`] marking each elided run), then a
    /// [`Control::Next`].
    #[must_use]
    pub fn controls(&self) -> Vec<Control> {
        if self.total <= 1 {
            return Vec::new();
        }

        let mut bar = vec![Control::Previous {
            enabled: self.has_previous(),
        }];
        for number in 1..=self.total {
            if number == 1
                || number == self.total
                || (number + Self::WINDOW >= self.current
                    && number <= self.current + Self::WINDOW)
            {
                bar.push(Control::Page {
                    number,
                    active: number == self.current,
                });
            } else if number + Self::WINDOW + 1 == self.current
                || number == self.current + Self::WINDOW + 1
            {
                bar.push(Control::Ellipsis);
            }
        }
        bar.push(Control::Next {
            enabled: self.has_next(),
        });
        bar
    }
}

/// Single element of a pagination bar.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Control {
    /// Button leading to the previous page.
    Previous {
        /// Indicator whether the button is clickable.
        enabled: bool,
    },

    /// Button leading to the page with the provided number.
    Page {
        /// 1-based number of the page.
        number: usize,

        /// Indicator whether the page is the current one.
        active: bool,
    },

    /// Placeholder for a run of pages elided from the bar.
    Ellipsis,

    /// Button leading to the next page.
    Next {
        /// Indicator whether the button is clickable.
        enabled: bool,
    },
}
