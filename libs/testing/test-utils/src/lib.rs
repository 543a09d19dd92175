//! Shared test utilities for domain and app testing
//!
//! - `InMemoryDocumentStore`: `DocumentStore` test double with available,
//!   unavailable and failing modes (always available)
//! - `TestMongo`: MongoDB container with automatic cleanup (feature: "mongo")
//! - `TestDataBuilder`: Deterministic test data generation (always available)
//! - `assertions`: Custom assertion helpers (always available)
//!
//! # Features
//!
//! - `mongo`: Enables MongoDB testcontainer infrastructure (requires Docker)
//! - `all`: Enables all container infrastructure
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use test_utils::{InMemoryDocumentStore, TestDataBuilder};
//!
//! let store = Arc::new(InMemoryDocumentStore::new());
//! let builder = TestDataBuilder::from_test_name("my_test");
//! let title = builder.title("phone");
//! ```
//!
//! ## MongoDB Testing
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { workspace = true, features = ["mongo"] }
//! ```
//!
//! ```rust,ignore
//! #[tokio::test]
//! #[ignore] // Requires Docker
//! async fn my_mongo_test() {
//!     let mongo = test_utils::TestMongo::new().await;
//!     let store = mongo.store();
//! }
//! ```

mod memory;

#[cfg(feature = "mongo")]
mod mongo;

pub use memory::{InMemoryDocumentStore, StoreMode};

#[cfg(feature = "mongo")]
pub use mongo::TestMongo;

/// Builder for test data with deterministic randomization
///
/// This ensures tests are reproducible by using seeded data.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// # Example
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

    /// A unique product title, e.g. `"test-phone-12345"`
    pub fn title(&self, prefix: &str) -> String {
        format!("test-{}-{}", prefix, self.seed)
    }

    /// A unique category name, distinct from `mobile`
    pub fn category(&self, suffix: &str) -> String {
        format!("test-category-{}-{}", self.seed, suffix)
    }

    /// A price in whole currency units between 100 and 1099
    pub fn price(&self) -> f64 {
        (100 + self.seed % 1000) as f64
    }
}

/// Test assertion helpers
pub mod assertions {
    /// Assert that `id` looks like an ObjectId rendered as hex
    pub fn assert_hex_id(id: &str, context: &str) {
        assert!(
            id.len() == 24 && id.chars().all(|c| c.is_ascii_hexdigit()),
            "{}: expected 24-char hex id, got {:?}",
            context,
            id
        );
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

        assert_eq!(builder1.title("phone"), builder2.title("phone"));
        assert_eq!(builder1.price(), builder2.price());
    }

    #[test]
    fn test_data_builder_different_names() {
        let builder1 = TestDataBuilder::from_test_name("test1");
        let builder2 = TestDataBuilder::from_test_name("test2");

        assert_ne!(builder1.title("phone"), builder2.title("phone"));
        assert_ne!(builder1.category("a"), "mobile");
    }

    #[test]
    fn test_assert_hex_id() {
        assertions::assert_hex_id("65f1c2a9e4b0a1b2c3d4e5f6", "valid");
    }

    #[test]
    #[should_panic(expected = "expected 24-char hex id")]
    fn test_assert_hex_id_rejects_short() {
        assertions::assert_hex_id("abc", "short");
    }
}
