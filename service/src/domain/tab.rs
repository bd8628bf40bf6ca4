//! [`Tab`] definitions.

use std::str::FromStr;

use derive_more::{AsRef, Display};
use serde::Serialize;

/// Section tab of the floor plans page (`2-bedroom`, `penthouse`).
///
/// Tabs come from the page markup, so the set isn't fixed at compile time:
/// any well-formed identifier is accepted and echoed back.
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq, Serialize)]
#[as_ref(forward)]
pub struct Tab(String);

impl Tab {
    /// Creates a new [`Tab`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `tab` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(tab: impl Into<String>) -> Self {
        Self(tab.into())
    }

    /// Creates a new [`Tab`] if the given `tab` is valid.
    #[must_use]
    pub fn new(tab: impl Into<String>) -> Option<Self> {
        let tab = tab.into();
        Self::check(&tab).then_some(Self(tab))
    }

    /// Checks whether the given `tab` is a valid [`Tab`].
    fn check(tab: impl AsRef<str>) -> bool {
        let tab = tab.as_ref();
        tab.trim() == tab && !tab.is_empty() && tab.len() <= 512
    }
}

impl FromStr for Tab {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Tab`")
    }
}
