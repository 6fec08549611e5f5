use serde::{Deserialize, Serialize};

/// A single catalog entry as served by `GET /api/products`.
///
/// Products are immutable once fetched; the store replaces the whole
/// collection rather than editing records in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub category: String,
    /// 0.0 to 5.0
    pub rating: f64,
    /// Image URI
    pub image: String,
}

impl Product {
    /// Price formatted for display, always with two decimals (`$19.90`).
    pub fn price_label(&self) -> String {
        format!("${:.2}", self.price)
    }

    /// Rating formatted for display with one decimal (`⭐ 4.0`).
    pub fn rating_label(&self) -> String {
        format!("⭐ {:.1}", self.rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product {
            id: "1".to_string(),
            name: "Test Product".to_string(),
            price: 29.99,
            category: "electronics".to_string(),
            rating: 4.5,
            image: "https://example.com/image.jpg".to_string(),
        }
    }

    #[test]
    fn test_price_label_pads_to_two_decimals() {
        let product = Product {
            price: 19.9,
            ..sample()
        };
        assert_eq!(product.price_label(), "$19.90");
        assert_eq!(sample().price_label(), "$29.99");
    }

    #[test]
    fn test_rating_label_uses_one_decimal() {
        assert_eq!(sample().rating_label(), "⭐ 4.5");

        let product = Product {
            rating: 4.0,
            ..sample()
        };
        assert_eq!(product.rating_label(), "⭐ 4.0");
    }

    #[test]
    fn test_deserializes_wire_format() {
        let json = r#"{
            "id": "4",
            "name": "Wireless Mouse",
            "price": 29.99,
            "category": "electronics",
            "rating": 4.0,
            "image": "https://example.com/mouse.jpg"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, "4");
        assert_eq!(product.name, "Wireless Mouse");
        assert_eq!(product.price, 29.99);
        assert_eq!(product.image, "https://example.com/mouse.jpg");
    }
}
