//! Built-in catalog served when the store is empty or unreachable.
//!
//! These products have no `id` and are never written to the store.

use crate::models::{MOBILE_CATEGORY, Product};

fn mobile(title: &str, description: &str, price: f64, image_url: &str) -> Product {
    Product {
        title: title.to_string(),
        description: description.to_string(),
        price,
        category: MOBILE_CATEGORY.to_string(),
        in_stock: true,
        image_url: Some(image_url.to_string()),
    }
}

/// The three sample mobiles, in display order
pub fn sample_mobiles() -> Vec<Product> {
    vec![
        mobile(
            "Rohan X1 Pro",
            "6.7\" AMOLED, 120Hz, 108MP camera, 5000mAh",
            699.0,
            "https://images.unsplash.com/photo-1511707171634-5f897ff02aa9?w=800&q=80",
        ),
        mobile(
            "Rohan Mini 5G",
            "Compact 5.8\" OLED, 5G, dual camera",
            499.0,
            "https://images.unsplash.com/photo-1510557880182-3d4d3cba35a5?w=800&q=80",
        ),
        mobile(
            "Rohan Ultra Max",
            "6.9\" LTPO, 200MP camera, 1TB, 6000mAh",
            1199.0,
            "https://images.unsplash.com/photo-1518779578993-ec3579fee39f?w=800&q=80",
        ),
    ]
}
