//! Read entities definitions.

pub mod listing;

pub use self::listing::View;
