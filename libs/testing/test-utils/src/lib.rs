//! Shared test utilities for domain testing
//!
//! - `TestMongo`: MongoDB container with automatic cleanup (feature: "mongo")
//! - `TestDataBuilder`: Deterministic test data generation (always available)
//! - `assertions`: Custom assertion helpers (always available)
//!
//! # Features
//!
//! - `mongo`: Enables MongoDB test infrastructure
//! - `all`: Enables all database test infrastructure
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { workspace = true, features = ["mongo"] }
//! ```
//!
//! ```rust,ignore
//! use test_utils::{TestDataBuilder, TestMongo};
//!
//! #[tokio::test]
//! async fn my_mongo_test() {
//!     let mongo = TestMongo::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_mongo_test");
//!
//!     let collection = builder.collection("products");
//!     let db = mongo.database();
//! }
//! ```

use uuid::Uuid;

#[cfg(feature = "mongo")]
mod mongo;

#[cfg(feature = "mongo")]
pub use mongo::TestMongo;

/// Builder for test data with deterministic randomization
///
/// Seeding from the test name keeps data reproducible across runs while
/// keeping tests that share a database from colliding.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Create a new builder with a seed (for deterministic tests)
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_product");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Deterministic UUID derived from the seed
    pub fn id(&self) -> Uuid {
        let bytes = self.seed.to_le_bytes();
        let mut uuid_bytes = [0u8; 16];
        uuid_bytes[..8].copy_from_slice(&bytes);
        uuid_bytes[8..16].copy_from_slice(&bytes);
        Uuid::from_bytes(uuid_bytes)
    }

    /// Unique name for a test resource
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(7);
    /// assert_eq!(builder.name("product", "main"), "test-product-7-main");
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// Category label scoped to this test
    pub fn category(&self, suffix: &str) -> String {
        self.name("category", suffix)
    }

    /// Collection name scoped to this test
    pub fn collection(&self, base: &str) -> String {
        format!("{}_{}", base, self.seed)
    }
}

/// Test assertion helpers
pub mod assertions {
    use uuid::Uuid;

    /// Assert that two UUIDs are equal with a nice error message
    pub fn assert_uuid_eq(actual: Uuid, expected: Uuid, context: &str) {
        assert_eq!(
            actual, expected,
            "{}: expected UUID {}, got {}",
            context, expected, actual
        );
    }

    /// Assert that a slice is ordered by `key`, newest (largest) first
    pub fn assert_descending_by<T, K: PartialOrd + std::fmt::Debug>(
        items: &[T],
        key: impl Fn(&T) -> K,
        context: &str,
    ) {
        for pair in items.windows(2) {
            let (a, b) = (key(&pair[0]), key(&pair[1]));
            assert!(a >= b, "{}: {:?} sorted before {:?}", context, a, b);
        }
    }

    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_builder_deterministic() {
        let builder1 = TestDataBuilder::new(42);
        let builder2 = TestDataBuilder::new(42);

        assert_eq!(builder1.id(), builder2.id());
        assert_eq!(
            builder1.name("product", "test"),
            builder2.name("product", "test")
        );
    }

    #[test]
    fn test_data_builder_from_name() {
        let builder1 = TestDataBuilder::from_test_name("my_test");
        let builder2 = TestDataBuilder::from_test_name("my_test");

        assert_eq!(builder1.id(), builder2.id());
        assert_eq!(builder1.collection("products"), builder2.collection("products"));
    }

    #[test]
    fn test_data_builder_different_names() {
        let builder1 = TestDataBuilder::from_test_name("test1");
        let builder2 = TestDataBuilder::from_test_name("test2");

        assert_ne!(builder1.id(), builder2.id());
        assert_ne!(builder1.category("a"), builder2.category("a"));
    }

    #[test]
    fn test_assert_descending_by() {
        assertions::assert_descending_by(&[3, 2, 2, 1], |v| *v, "numbers");
    }

    #[test]
    #[should_panic(expected = "numbers")]
    fn test_assert_descending_by_rejects_ascending() {
        assertions::assert_descending_by(&[1, 2], |v| *v, "numbers");
    }
}
