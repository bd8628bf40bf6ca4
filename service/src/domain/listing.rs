//! [`Listing`] definitions.

use common::Money;
use derive_more::{AsRef, Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};

/// Floor plan listed for rent.
///
/// [`Listing`]s are immutable once loaded from the content source: filtering
/// and sorting never mutate them, only reorder references to them.
#[derive(Clone, Debug)]
pub struct Listing {
    /// ID of this [`Listing`].
    pub id: Id,

    /// [`Name`] of this [`Listing`].
    pub name: Name,

    /// Number of bedrooms in this [`Listing`].
    pub bedrooms: Bedrooms,

    /// Monthly rent of this [`Listing`].
    pub rent: Money,

    /// [`Availability`] descriptor of this [`Listing`].
    pub availability: Availability,

    /// [`LinkTemplate`] of this [`Listing`]'s details page.
    pub link: LinkTemplate,
}

/// ID of a [`Listing`].
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
pub struct Id(u64);

/// Name of a [`Listing`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(forward)]
pub struct Name(String);

impl Name {
    /// Creates a new [`Name`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `name` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Creates a new [`Name`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`Name`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name && !name.is_empty() && name.len() <= 512
    }
}

impl FromStr for Name {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Name`")
    }
}

/// Number of bedrooms in a [`Listing`].
///
/// `0` means a studio.
pub type Bedrooms = u8;

/// Availability descriptor of a [`Listing`].
///
/// Free-form marketing text (`Available Dec 2026`, `Available Now`), not a
/// parsed date: move-in filters match it by plain substring containment.
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(forward)]
pub struct Availability(String);

impl Availability {
    /// Creates a new [`Availability`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `text` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Creates a new [`Availability`] if the given `text` is valid.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        Self::check(&text).then_some(Self(text))
    }

    /// Checks whether the given `text` is a valid [`Availability`].
    fn check(text: impl AsRef<str>) -> bool {
        let text = text.as_ref();
        text.trim() == text && !text.is_empty() && text.len() <= 512
    }
}

impl FromStr for Availability {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Availability`")
    }
}

/// Template of a [`Listing`]'s details page URL.
///
/// Contains an `{id}` placeholder substituted with the [`Listing`]'s [`Id`]
/// on [`expansion`](LinkTemplate::expand).
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(forward)]
pub struct LinkTemplate(String);

impl LinkTemplate {
    /// Placeholder substituted with a [`Listing`]'s [`Id`].
    const PLACEHOLDER: &'static str = "{id}";

    /// Creates a new [`LinkTemplate`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `template` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    /// Creates a new [`LinkTemplate`] if the given `template` is valid.
    #[must_use]
    pub fn new(template: impl Into<String>) -> Option<Self> {
        let template = template.into();
        Self::check(&template).then_some(Self(template))
    }

    /// Expands this [`LinkTemplate`] into a URL of the details page of a
    /// [`Listing`] with the provided [`Id`].
    #[must_use]
    pub fn expand(&self, id: Id) -> String {
        self.0.replace(Self::PLACEHOLDER, &id.to_string())
    }

    /// Checks whether the given `template` is a valid [`LinkTemplate`].
    fn check(template: impl AsRef<str>) -> bool {
        let template = template.as_ref();
        template.trim() == template
            && template.contains(Self::PLACEHOLDER)
            && template.len() <= 512
    }
}

impl FromStr for LinkTemplate {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `LinkTemplate`")
    }
}
