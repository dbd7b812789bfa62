//! XML normalization, loading and lookup.

mod loader;
mod namespace;
mod query;
mod utils;

pub use loader::{load_document, NormalizedXml};
pub use namespace::strip_namespaces;
pub use query::{Selector, XmlQuery};
pub use utils::{attribute_or_empty, get_tag_name, get_text, has_tag};
