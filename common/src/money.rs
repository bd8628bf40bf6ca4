//! [`Money`]-related definitions.

use std::{fmt, str::FromStr};

use derive_more::Into;

/// Amount of money in whole US dollars.
///
/// Rents are advertised as whole-dollar amounts, so no fractional part is
/// representable. Parses from a plain non-negative integer (`1500`), while
/// displaying the way listings advertise it: a `$` sign and thousands
/// separated by commas (`$1,500`).
#[derive(Clone, Copy, Debug, Eq, Hash, Into, Ord, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(transparent)
)]
pub struct Money(u32);

impl Money {
    /// Creates a new [`Money`] amount of the provided whole dollars.
    #[must_use]
    pub const fn new(dollars: u32) -> Self {
        Self(dollars)
    }

    /// Returns this [`Money`] amount in whole dollars.
    #[must_use]
    pub const fn dollars(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write as _;

        let digits = self.0.to_string();
        f.write_str("$")?;
        for (i, c) in digits.chars().enumerate() {
            if i != 0 && (digits.len() - i) % 3 == 0 {
                f.write_char(',')?;
            }
            f.write_char(c)?;
        }
        Ok(())
    }
}

impl FromStr for Money {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self).map_err(|_| "invalid money amount")
    }
}
