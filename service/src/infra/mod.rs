//! Infrastructure layer.

pub mod host;

pub use self::host::Host;
