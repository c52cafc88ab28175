use rust_decimal::Decimal;
use serde::Deserialize;

/// Incoming create/update body. Fields stay optional so missing values
/// surface as field errors instead of a body-level reject.
#[derive(Debug, Deserialize)]
pub struct ProductPayload {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub product_type_id: Option<i64>,
}

/// Product payload after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub product_type_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_tolerates_missing_fields() {
        let parsed: ProductPayload = serde_json::from_str("{}").unwrap();
        assert!(parsed.name.is_none());
        assert!(parsed.description.is_none());
        assert!(parsed.price.is_none());
        assert!(parsed.product_type_id.is_none());
    }

    #[test]
    fn payload_parses_a_json_number_price() {
        let parsed: ProductPayload =
            serde_json::from_str(r#"{"name":"Perfume","price":99.99,"product_type_id":1}"#)
                .unwrap();
        assert_eq!(parsed.price, Some("99.99".parse().unwrap()));
        assert_eq!(parsed.product_type_id, Some(1));
    }
}
