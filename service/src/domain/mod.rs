//! Domain definitions.

pub mod criteria;
pub mod listing;
pub mod tab;

pub use self::{criteria::Criteria, listing::Listing, tab::Tab};
