use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Category whose listing falls back to the sample catalog
pub const MOBILE_CATEGORY: &str = "mobile";

/// Default page size for `GET /api/products`
pub const DEFAULT_LIMIT: i64 = 50;

/// A product as submitted by clients and as stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
pub struct Product {
    /// Product title
    #[validate(length(min = 1, max = 200, message = "title must be between 1 and 200 characters"))]
    #[schema(example = "Rohan X1 Pro")]
    pub title: String,

    #[serde(default)]
    #[validate(length(max = 2000, message = "description must be at most 2000 characters"))]
    pub description: String,

    /// Price, never negative
    #[validate(range(min = 0.0, message = "price must not be negative"))]
    #[schema(example = 699.0)]
    pub price: f64,

    #[validate(length(min = 1, max = 100, message = "category must be between 1 and 100 characters"))]
    #[schema(example = "mobile")]
    pub category: String,

    #[serde(default = "default_in_stock")]
    pub in_stock: bool,

    #[validate(url(message = "image_url must be a valid URL"))]
    #[serde(default)]
    pub image_url: Option<String>,
}

fn default_in_stock() -> bool {
    true
}

/// Query parameters for listing products
#[derive(Debug, Clone, Deserialize, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct ProductQuery {
    /// Only return products in this category
    pub category: Option<String>,

    /// Maximum number of products to return
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, message = "limit must be at least 1"))]
    #[param(default = 50, minimum = 1)]
    pub limit: i64,
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            category: None,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl ProductQuery {
    pub fn new(category: Option<&str>, limit: i64) -> Self {
        Self {
            category: category.map(str::to_string),
            limit,
        }
    }

    /// The category filter; an empty string filters nothing
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    /// Whether an empty or unavailable store should be answered with sample data
    ///
    /// Only an absent `category` or `mobile` qualifies. An explicit empty
    /// `category=` lists everything but never falls back.
    pub fn wants_sample_fallback(&self) -> bool {
        self.category.as_deref().is_none_or(|c| c == MOBILE_CATEGORY)
    }
}

/// Response body of a successful create
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreatedProduct {
    /// Store-assigned identifier as a string
    #[schema(example = "65f1c2a9e4b0a1b2c3d4e5f6")]
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid() -> Product {
        serde_json::from_value(json!({
            "title": "Rohan Lite",
            "price": 299.0,
            "category": "mobile"
        }))
        .unwrap()
    }

    #[test]
    fn test_defaults_applied() {
        let product = valid();
        assert_eq!(product.description, "");
        assert!(product.in_stock);
        assert!(product.image_url.is_none());
        assert!(product.validate().is_ok());
    }

    #[test]
    fn test_negative_price_rejected() {
        let product = Product {
            price: -0.01,
            ..valid()
        };
        let errors = product.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("price"));
    }

    #[test]
    fn test_title_bounds() {
        let empty = Product {
            title: String::new(),
            ..valid()
        };
        assert!(empty.validate().is_err());

        let long = Product {
            title: "x".repeat(201),
            ..valid()
        };
        assert!(long.validate().is_err());

        let max = Product {
            title: "x".repeat(200),
            ..valid()
        };
        assert!(max.validate().is_ok());
    }

    #[test]
    fn test_description_and_category_bounds() {
        let product = Product {
            description: "d".repeat(2001),
            category: "c".repeat(101),
            ..valid()
        };
        let errors = product.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("description"));
        assert!(fields.contains_key("category"));
    }

    #[test]
    fn test_image_url_must_be_url() {
        let bad = Product {
            image_url: Some("not a url".into()),
            ..valid()
        };
        assert!(bad.validate().is_err());

        let good = Product {
            image_url: Some("https://images.example.com/x.jpg".into()),
            ..valid()
        };
        assert!(good.validate().is_ok());
    }

    #[test]
    fn test_missing_required_field_fails_to_parse() {
        let result = serde_json::from_value::<Product>(json!({ "title": "X", "category": "mobile" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_query_category_handling() {
        assert!(ProductQuery::default().wants_sample_fallback());
        assert!(!ProductQuery::new(Some(""), 5).wants_sample_fallback());
        assert_eq!(ProductQuery::new(Some(""), 5).category(), None);
        assert!(ProductQuery::new(Some("mobile"), 5).wants_sample_fallback());
        assert!(!ProductQuery::new(Some("tablet"), 5).wants_sample_fallback());
    }

    #[test]
    fn test_query_limit_must_be_positive() {
        assert!(ProductQuery::new(None, 0).validate().is_err());
        assert!(ProductQuery::new(None, 1).validate().is_ok());
        assert_eq!(ProductQuery::default().limit, 50);
    }
}
