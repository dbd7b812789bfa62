//! Dialect handler implementations.

mod legacy;
mod primary;

pub use legacy::LegacyDialect;
pub use primary::PrimaryDialect;
