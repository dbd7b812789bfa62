//! Dialect registry for configuration-item extraction.
//!
//! Configuration exports carry interfaces in more than one schema dialect,
//! sometimes side by side in one document. Each dialect is an isolated
//! handler registered for its container tag; the registry runs them in
//! registration order.

mod config;
mod core;
mod handler;
pub mod handlers;

pub use config::create_interface_registry;
pub use core::DialectRegistry;
pub use handler::InterfaceDialect;
