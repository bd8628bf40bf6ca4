//! [`Criteria`]-related definitions.

use std::{fmt, str::FromStr};

use common::Money;
use derive_more::{AsRef, Display};
use serde::{Serialize, Serializer};

use super::listing::{Availability, Bedrooms, Listing};

/// Filtering and ordering criteria over [`Listing`]s.
///
/// The [`Default`] value matches every [`Listing`] and keeps the source
/// order.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Criteria {
    /// Exact number of bedrooms to match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<Bedrooms>,

    /// Inclusive monthly rent range to match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rent: Option<RentRange>,

    /// Text to look for in [`Listing`]s' [`Availability`] descriptors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moving_date: Option<MovingDate>,

    /// Ordering of the matched [`Listing`]s.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortBy>,
}

impl Criteria {
    /// Indicates whether the provided [`Listing`] satisfies every set field
    /// of this [`Criteria`].
    ///
    /// [`SortBy`] doesn't participate in matching.
    #[must_use]
    pub fn matches(&self, listing: &Listing) -> bool {
        if let Some(bedrooms) = self.bedrooms {
            if listing.bedrooms != bedrooms {
                return false;
            }
        }
        if let Some(rent) = &self.rent {
            if !rent.contains(listing.rent) {
                return false;
            }
        }
        if let Some(moving_date) = &self.moving_date {
            if !moving_date.matches(&listing.availability) {
                return false;
            }
        }
        true
    }

    /// Applies the provided [`Update`] to this [`Criteria`].
    pub fn apply(&mut self, update: Update) {
        let Update {
            bedrooms,
            rent,
            moving_date,
            sort_by,
        } = update;
        if let Some(bedrooms) = bedrooms {
            self.bedrooms = bedrooms;
        }
        if let Some(rent) = rent {
            self.rent = rent;
        }
        if let Some(moving_date) = moving_date {
            self.moving_date = moving_date;
        }
        if let Some(sort_by) = sort_by {
            self.sort_by = sort_by;
        }
    }
}

/// Partial change of a [`Criteria`].
///
/// Every field is a double [`Option`]: [`None`] keeps the current value,
/// `Some(None)` clears it, and `Some(Some(_))` replaces it.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Update {
    /// Change of [`Criteria::bedrooms`].
    pub bedrooms: Option<Option<Bedrooms>>,

    /// Change of [`Criteria::rent`].
    pub rent: Option<Option<RentRange>>,

    /// Change of [`Criteria::moving_date`].
    pub moving_date: Option<Option<MovingDate>>,

    /// Change of [`Criteria::sort_by`].
    pub sort_by: Option<Option<SortBy>>,
}

/// Inclusive monthly rent range.
///
/// The canonical text form is `min-max` (`1500-2000`), or a bare `min`
/// (`2000`) when unbounded above. An inverted range (`min` above `max`) is
/// well-formed and simply matches nothing.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct RentRange {
    /// Lower bound of this [`RentRange`].
    pub min: Money,

    /// Upper bound of this [`RentRange`], if any.
    pub max: Option<Money>,
}

impl RentRange {
    /// Indicates whether the provided [`Money`] amount falls into this
    /// [`RentRange`].
    ///
    /// Both bounds are inclusive.
    #[must_use]
    pub fn contains(&self, amount: Money) -> bool {
        amount >= self.min && self.max.is_none_or(|max| amount <= max)
    }
}

impl fmt::Display for RentRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.min.dollars())?;
        if let Some(max) = self.max {
            write!(f, "-{}", max.dollars())?;
        }
        Ok(())
    }
}

impl FromStr for RentRange {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const ERROR: &str = "invalid `RentRange`";

        let (min, max) = match s.split_once('-') {
            Some((min, max)) => (min, Some(max)),
            None => (s, None),
        };
        Ok(Self {
            min: min.parse().map_err(|_| ERROR)?,
            max: max.map(str::parse).transpose().map_err(|_| ERROR)?,
        })
    }
}

impl Serialize for RentRange {
    fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        ser.collect_str(self)
    }
}

/// Move-in date filter text.
///
/// Matched by plain case-sensitive substring containment against
/// [`Availability`] descriptors, exactly as typed.
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq, Serialize)]
#[as_ref(forward)]
pub struct MovingDate(String);

impl MovingDate {
    /// Creates a new [`MovingDate`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `text` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Creates a new [`MovingDate`] if the given `text` is valid.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        Self::check(&text).then_some(Self(text))
    }

    /// Indicates whether the provided [`Availability`] mentions this
    /// [`MovingDate`].
    #[must_use]
    pub fn matches(&self, availability: &Availability) -> bool {
        let availability: &str = availability.as_ref();
        availability.contains(self.0.as_str())
    }

    /// Checks whether the given `text` is a valid [`MovingDate`].
    fn check(text: impl AsRef<str>) -> bool {
        let text = text.as_ref();
        text.trim() == text && !text.is_empty() && text.len() <= 512
    }
}

impl FromStr for MovingDate {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `MovingDate`")
    }
}

/// Ordering applied to matched [`Listing`]s.
///
/// Sorting is stable: [`Listing`]s with equal rents keep their relative
/// source order in both directions.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    Serialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SortBy {
    /// Cheapest rent first.
    RentLowHigh,

    /// Most expensive rent first.
    RentHighLow,
}

#[cfg(test)]
mod spec {
    use common::Money;

    use super::{Criteria, MovingDate, RentRange, SortBy, Update};
    use crate::domain::listing::{
        Availability, Id, LinkTemplate, Listing, Name,
    };

    fn listing(bedrooms: u8, rent: u32, availability: &str) -> Listing {
        Listing {
            id: Id::from(1),
            name: Name::new("The Maple").unwrap(),
            bedrooms,
            rent: Money::new(rent),
            availability: Availability::new(availability).unwrap(),
            link: LinkTemplate::new("/floor-plans/{id}").unwrap(),
        }
    }

    #[test]
    fn rent_range_parses_canonical_forms() {
        assert_eq!(
            "1500-2000".parse::<RentRange>().unwrap(),
            RentRange {
                min: Money::new(1500),
                max: Some(Money::new(2000)),
            },
        );
        assert_eq!(
            "2000".parse::<RentRange>().unwrap(),
            RentRange {
                min: Money::new(2000),
                max: None,
            },
        );
    }

    #[test]
    fn rent_range_rejects_malformed_input() {
        assert!("".parse::<RentRange>().is_err());
        assert!("1500-".parse::<RentRange>().is_err());
        assert!("-2000".parse::<RentRange>().is_err());
        assert!("abc".parse::<RentRange>().is_err());
        assert!("1500-abc".parse::<RentRange>().is_err());
        assert!("1500 - 2000".parse::<RentRange>().is_err());
    }

    #[test]
    fn rent_range_displays_canonically() {
        let bounded = RentRange {
            min: Money::new(1500),
            max: Some(Money::new(2000)),
        };
        let open = RentRange {
            min: Money::new(2000),
            max: None,
        };

        assert_eq!(bounded.to_string(), "1500-2000");
        assert_eq!(open.to_string(), "2000");
    }

    #[test]
    fn rent_range_bounds_are_inclusive() {
        let range = "1500-2000".parse::<RentRange>().unwrap();

        assert!(range.contains(Money::new(1500)));
        assert!(range.contains(Money::new(1750)));
        assert!(range.contains(Money::new(2000)));
        assert!(!range.contains(Money::new(1499)));
        assert!(!range.contains(Money::new(2001)));
    }

    #[test]
    fn open_rent_range_is_unbounded_above() {
        let range = "2000".parse::<RentRange>().unwrap();

        assert!(range.contains(Money::new(2000)));
        assert!(range.contains(Money::new(99_999)));
        assert!(!range.contains(Money::new(1999)));
    }

    #[test]
    fn inverted_rent_range_matches_nothing() {
        let range = "2000-1500".parse::<RentRange>().unwrap();

        assert!(!range.contains(Money::new(1500)));
        assert!(!range.contains(Money::new(1750)));
        assert!(!range.contains(Money::new(2000)));
    }

    #[test]
    fn moving_date_matches_substring_case_sensitively() {
        let date = MovingDate::new("Dec 2026").unwrap();
        let available = |text| Availability::new(text).unwrap();

        assert!(date.matches(&available("Available Dec 2026")));
        assert!(!date.matches(&available("Available Jan 2027")));
        assert!(!date.matches(&available("available dec 2026")));
    }

    #[test]
    fn sort_by_round_trips_wire_tokens() {
        assert_eq!(
            "rent-low-high".parse::<SortBy>().unwrap(),
            SortBy::RentLowHigh,
        );
        assert_eq!(
            "rent-high-low".parse::<SortBy>().unwrap(),
            SortBy::RentHighLow,
        );
        assert_eq!(SortBy::RentLowHigh.to_string(), "rent-low-high");
        assert_eq!(SortBy::RentHighLow.to_string(), "rent-high-low");
        assert!("rent".parse::<SortBy>().is_err());
    }

    #[test]
    fn default_criteria_matches_everything() {
        let criteria = Criteria::default();

        assert!(criteria.matches(&listing(0, 950, "Available Now")));
        assert!(criteria.matches(&listing(3, 9500, "Available Dec 2026")));
    }

    #[test]
    fn criteria_fields_narrow_conjunctively() {
        let criteria = Criteria {
            bedrooms: Some(2),
            rent: Some("1500-2000".parse().unwrap()),
            moving_date: Some(MovingDate::new("Dec 2026").unwrap()),
            sort_by: None,
        };

        assert!(criteria.matches(&listing(2, 1800, "Available Dec 2026")));
        assert!(!criteria.matches(&listing(1, 1800, "Available Dec 2026")));
        assert!(!criteria.matches(&listing(2, 2100, "Available Dec 2026")));
        assert!(!criteria.matches(&listing(2, 1800, "Available Now")));
    }

    #[test]
    fn sort_by_does_not_narrow_matching() {
        let criteria = Criteria {
            sort_by: Some(SortBy::RentHighLow),
            ..Criteria::default()
        };

        assert!(criteria.matches(&listing(1, 1200, "Available Now")));
    }

    #[test]
    fn update_retains_replaces_and_clears() {
        let mut criteria = Criteria {
            bedrooms: Some(2),
            rent: Some("1500-2000".parse().unwrap()),
            moving_date: None,
            sort_by: Some(SortBy::RentLowHigh),
        };

        criteria.apply(Update {
            bedrooms: Some(Some(3)),
            rent: Some(None),
            moving_date: None,
            sort_by: None,
        });

        assert_eq!(criteria.bedrooms, Some(3));
        assert_eq!(criteria.rent, None);
        assert_eq!(criteria.moving_date, None);
        assert_eq!(criteria.sort_by, Some(SortBy::RentLowHigh));
    }

    #[test]
    fn serializes_to_camel_case_json() {
        let criteria = Criteria {
            bedrooms: Some(2),
            rent: Some("1500-2000".parse().unwrap()),
            moving_date: Some(MovingDate::new("Dec 2026").unwrap()),
            sort_by: Some(SortBy::RentHighLow),
        };

        assert_eq!(
            serde_json::to_value(&criteria).unwrap(),
            serde_json::json!({
                "bedrooms": 2,
                "rent": "1500-2000",
                "movingDate": "Dec 2026",
                "sortBy": "rent-high-low",
            }),
        );
        assert_eq!(
            serde_json::to_value(Criteria::default()).unwrap(),
            serde_json::json!({}),
        );
    }
}
