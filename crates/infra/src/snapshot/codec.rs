//! Snapshot (de)serialization.
//!
//! The stored value is the JSON array of products with fields `id`, `name`,
//! `price`, `stock`, `limit`. Older snapshots must keep decoding, so the
//! field set is load-bearing.

use kirana_inventory::Product;

use super::store::SnapshotError;

pub fn encode(products: &[Product]) -> Result<String, SnapshotError> {
    serde_json::to_string(products).map_err(|e| SnapshotError::Encode(e.to_string()))
}

pub fn decode(raw: &str) -> Result<Vec<Product>, SnapshotError> {
    serde_json::from_str(raw).map_err(|e| SnapshotError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use kirana_core::ProductId;
    use kirana_inventory::ProductDraft;

    fn rice() -> Product {
        Product::new(ProductId::from_raw(1), ProductDraft::new("Rice", 50.0, 10, 5))
    }

    #[test]
    fn encode_then_decode_reproduces_the_sequence() {
        let products = vec![
            rice(),
            Product::new(ProductId::from_raw(2), ProductDraft::new("Oil", 100.0, 2, 5)),
        ];

        let raw = encode(&products).unwrap();
        let decoded = decode(&raw).unwrap();
        assert_eq!(decoded, products);
    }

    #[test]
    fn wire_format_uses_the_historical_field_names() {
        let raw = encode(&[rice()]).unwrap();
        assert_eq!(
            raw,
            r#"[{"id":1,"name":"Rice","price":50.0,"stock":10,"limit":5}]"#
        );
    }

    #[test]
    fn decode_accepts_the_historical_blob() {
        // Integer price, no whitespace: the shape older snapshots carry.
        let raw = r#"[{"id":1712345678901,"name":"Basmati Rice","price":85,"stock":12,"limit":4}]"#;
        let products = decode(raw).unwrap();

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name(), "Basmati Rice");
        assert_eq!(products[0].price(), 85.0);
    }

    #[test]
    fn decode_rejects_malformed_json() {
        assert!(decode("not json").is_err());
        assert!(decode(r#"{"id":1}"#).is_err());
        assert!(decode(r#"[{"name":"missing id"}]"#).is_err());
    }
}
