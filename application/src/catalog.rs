//! Loading of the [`Listing`]s catalog.

use std::{collections::HashSet, fs, io};

use common::Money;
use derive_more::{Display, Error as StdError, From};
use serde::Deserialize;
use service::domain::{
    listing::{Availability, Bedrooms, Id, LinkTemplate, Name},
    Listing,
};
use tracerr::Traced;
use tracing as log;

/// Loads a catalog of [`Listing`]s from the JSON file at the provided
/// `path`.
///
/// # Errors
///
/// Errors if the file cannot be read, is not a valid JSON, or describes an
/// invalid or duplicated [`Listing`].
pub fn load(path: impl AsRef<str>) -> Result<Vec<Listing>, Traced<Error>> {
    let path = path.as_ref();
    let json = fs::read(path).map_err(tracerr::from_and_wrap!(=> Error))?;
    let listings = parse(&json).map_err(tracerr::wrap!())?;
    log::info!("loaded {} `Listing`(s) from `{path}`", listings.len());
    Ok(listings)
}

/// Parses a catalog of [`Listing`]s out of the provided JSON bytes.
///
/// An empty catalog is legal and parses into an empty [`Vec`].
///
/// # Errors
///
/// Errors if the bytes are not a valid JSON, describe an invalid
/// [`Listing`], or assign one ID to multiple [`Listing`]s.
pub fn parse(json: &[u8]) -> Result<Vec<Listing>, Traced<Error>> {
    let listings = serde_json::from_slice::<Vec<Record>>(json)
        .map_err(tracerr::from_and_wrap!(=> Error))?
        .into_iter()
        .map(Listing::try_from)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| tracerr::new!(e))?;
    let mut ids = HashSet::with_capacity(listings.len());
    for listing in &listings {
        if !ids.insert(listing.id) {
            return Err(tracerr::new!(Error::Duplicate(listing.id)));
        }
    }
    Ok(listings)
}

/// Single [`Listing`] record of a catalog file.
///
/// Unknown fields are ignored, so catalog files may carry extra
/// presentation data not used by this server.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Unique identifier of the [`Listing`].
    pub id: Id,

    /// Human-readable name of the [`Listing`].
    pub name: String,

    /// Number of bedrooms, with `0` meaning a studio.
    pub bedrooms: Bedrooms,

    /// Monthly rent, in whole dollars.
    pub rent: Money,

    /// Availability label, as shown on the page.
    pub availability: String,

    /// Details page link template with an `{id}` placeholder.
    #[serde(default = "Record::default_link")]
    pub link: String,
}

impl Record {
    /// Returns the default details page [`LinkTemplate`] of a [`Record`].
    fn default_link() -> String {
        "/floor-plans/{id}".to_owned()
    }
}

impl TryFrom<Record> for Listing {
    type Error = Error;

    fn try_from(record: Record) -> Result<Self, Self::Error> {
        let Record {
            id,
            name,
            bedrooms,
            rent,
            availability,
            link,
        } = record;
        let invalid = |reason| Error::Invalid { id, reason };
        Ok(Self {
            id,
            name: Name::new(name)
                .ok_or_else(|| invalid("malformed `Name`"))?,
            bedrooms,
            rent,
            availability: Availability::new(availability)
                .ok_or_else(|| invalid("malformed `Availability`"))?,
            link: LinkTemplate::new(link)
                .ok_or_else(|| invalid("malformed `LinkTemplate`"))?,
        })
    }
}

/// Error of loading a catalog of [`Listing`]s.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// Failed to read the catalog file.
    #[display("failed to read catalog: {_0}")]
    Read(io::Error),

    /// Catalog file is not a valid JSON.
    #[display("malformed catalog JSON: {_0}")]
    Parse(serde_json::Error),

    /// Catalog file describes an invalid [`Listing`].
    #[display("invalid `Listing` {id}: {reason}")]
    #[from(ignore)]
    Invalid {
        /// ID of the invalid [`Listing`].
        id: Id,

        /// Reason of the invalidity.
        reason: &'static str,
    },

    /// Catalog file assigns one ID to multiple [`Listing`]s.
    #[display("duplicated `Listing` {_0} in catalog")]
    #[from(ignore)]
    Duplicate(#[error(not(source))] Id),
}
