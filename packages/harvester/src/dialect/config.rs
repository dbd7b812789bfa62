//! Registry configuration for configuration exports.

use super::core::DialectRegistry;
use super::handlers::{LegacyDialect, PrimaryDialect};

/// Create the interface registry for configuration exports.
///
/// The primary dialect is registered first so its interfaces precede the
/// legacy ones in the output.
#[must_use]
pub fn create_interface_registry() -> DialectRegistry {
    let mut registry = DialectRegistry::new();
    registry.register(PrimaryDialect);
    registry.register(LegacyDialect);
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LEGACY_ITEM_TAG, PRIMARY_ITEM_TAG};

    #[test]
    fn test_primary_before_legacy() {
        let registry = create_interface_registry();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.item_tags(), vec![PRIMARY_ITEM_TAG, LEGACY_ITEM_TAG]);
    }
}
