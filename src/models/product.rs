use async_graphql::SimpleObject;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use utoipa::ToSchema;

/// # Product Record
///
/// Data-transfer shape of a catalogue item as it crosses the HTTP boundary
/// and is handed to a [`ProductRepository`].
///
/// Every field that a caller may omit is an `Option`, so "absent" never
/// collapses into zero or the empty string. The constraints on `name`,
/// `price` and `stock` are not enforced by deserialization; run
/// [`ProductRecord::validate`] before accepting a record.
///
/// `price` is read and written as a JSON number with its exact decimal
/// digits. A price with more precision than a `Decimal` holds is rejected
/// as malformed rather than rounded.
///
/// ## Example JSON
/// ```json
/// {
///   "id": 1,
///   "name": "Widget",
///   "description": "A small widget",
///   "price": 10.5,
///   "stock": 3,
///   "createdAt": "2024-03-10T15:30:45.123",
///   "updatedAt": "2024-03-10T15:30:45.123"
/// }
/// ```
///
/// [`ProductRepository`]: crate::repository::ProductRepository
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema, SimpleObject)]
#[serde(rename_all = "camelCase")]
#[graphql(name = "Product")]
pub struct ProductRecord {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, with = "exact_price")]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub stock: Option<i32>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

impl ProductRecord {
    /// Builds an unsaved record carrying only the constrained fields.
    pub fn new(name: impl Into<String>, price: Decimal, stock: i32) -> Self {
        Self {
            name: Some(name.into()),
            price: Some(price),
            stock: Some(stock),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

mod exact_price {
    use super::*;
    use serde::de::Error as _;
    use serde::ser::Error as _;
    use serde_json::value::RawValue;

    pub fn serialize<S: Serializer>(
        value: &Option<Decimal>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(price) => RawValue::from_string(price.to_string())
                .map_err(S::Error::custom)?
                .serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    /// Reads the number literal as written, never through `f64`.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Decimal>, D::Error> {
        let Some(raw) = Option::<Box<RawValue>>::deserialize(deserializer)? else {
            return Ok(None);
        };
        let literal = raw.get().trim();
        if !literal.starts_with(|c: char| c == '-' || c.is_ascii_digit()) {
            return Err(D::Error::custom(format!("price must be a number, got {literal}")));
        }
        parse_exact_decimal(literal)
            .map(Some)
            .map_err(|err| D::Error::custom(format!("price {literal} is not representable: {err}")))
    }
}

/// Parses a JSON number literal into a [`Decimal`] without rounding.
///
/// Plain and scientific notation are accepted. Digits beyond 28 decimal
/// places, or magnitudes beyond `Decimal::MAX`, are errors.
pub fn parse_exact_decimal(raw: &str) -> Result<Decimal, rust_decimal::Error> {
    let Some((mantissa, exponent)) = raw.split_once(['e', 'E']) else {
        return Decimal::from_str_exact(raw);
    };

    let mut value = Decimal::from_str_exact(mantissa)?;
    let exponent: i64 = exponent
        .strip_prefix('+')
        .unwrap_or(exponent)
        .parse()
        .map_err(|_| rust_decimal::Error::from(format!("invalid exponent in {raw}")))?;
    if value.is_zero() {
        return Ok(Decimal::ZERO);
    }

    let scale = i64::from(value.scale()) - exponent;
    if scale >= 0 {
        let scale = u32::try_from(scale)
            .map_err(|_| rust_decimal::Error::ScaleExceedsMaximumPrecision(u32::MAX))?;
        value.set_scale(scale)?;
        return Ok(value);
    }

    value.set_scale(0)?;
    for _ in 0..scale.unsigned_abs() {
        value = value
            .checked_mul(Decimal::TEN)
            .ok_or(rust_decimal::Error::ExceedsMaximumPossibleValue)?;
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    fn dec(value: &str) -> Decimal {
        value.parse().unwrap()
    }

    #[test]
    fn test_full_record_deserialization() {
        let json = r#"{
            "id": 7,
            "name": "Widget",
            "description": "Blue",
            "price": 10.50,
            "stock": 3,
            "createdAt": "2024-03-10T15:30:45.123",
            "updatedAt": null
        }"#;
        let record: ProductRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.id, Some(7));
        assert_eq!(record.name.as_deref(), Some("Widget"));
        assert_eq!(record.description.as_deref(), Some("Blue"));
        assert_eq!(record.price, Some(dec("10.5")));
        assert_eq!(record.stock, Some(3));
        assert!(record.created_at.is_some());
        assert!(record.updated_at.is_none());
    }

    #[test]
    fn test_missing_fields_are_absent_not_zero() {
        let record: ProductRecord = serde_json::from_str("{}").unwrap();

        assert_eq!(record, ProductRecord::default());
        assert!(record.price.is_none());
        assert!(record.stock.is_none());
    }

    #[test]
    fn test_explicit_zero_is_present() {
        let record: ProductRecord =
            serde_json::from_str(r#"{"name": "Widget", "price": 0, "stock": 0}"#).unwrap();

        assert_eq!(record.price, Some(Decimal::ZERO));
        assert_eq!(record.stock, Some(0));
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let result: Result<ProductRecord, _> = serde_json::from_str(r#"{"stock": "many"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serializes_camel_case_with_numeric_price() {
        let record = ProductRecord::new("Widget", dec("10.5"), 2).with_description("Blue");
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["name"], "Widget");
        assert_eq!(value["price"].to_string(), "10.5");
        assert_eq!(value["stock"], 2);
        assert_eq!(value["description"], "Blue");
        assert!(value.get("createdAt").is_some());
        assert!(value.get("created_at").is_none());
    }

    #[test]
    fn test_price_keeps_every_significant_digit() {
        let json = r#"{"name": "Widget", "price": 12345678901234567.89, "stock": 1}"#;
        let record: ProductRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.price, Some(dec("12345678901234567.89")));
        let out = serde_json::to_string(&record).unwrap();
        assert!(out.contains(r#""price":12345678901234567.89"#), "{out}");
    }

    #[test]
    fn test_price_trailing_zeros_survive() {
        let record: ProductRecord = serde_json::from_str(r#"{"price": 10.50}"#).unwrap();
        let out = serde_json::to_string(&record).unwrap();
        assert!(out.contains(r#""price":10.50"#), "{out}");
    }

    #[test]
    fn test_null_price_is_absent() {
        let record: ProductRecord = serde_json::from_str(r#"{"price": null}"#).unwrap();
        assert!(record.price.is_none());
        let out = serde_json::to_string(&record).unwrap();
        assert!(out.contains(r#""price":null"#), "{out}");
    }

    #[test]
    fn test_smallest_decimal_price_is_exact() {
        let record: ProductRecord = serde_json::from_str(r#"{"price": 1e-28}"#).unwrap();
        let price = record.price.unwrap();

        assert!(price > Decimal::ZERO);
        assert_eq!(price, Decimal::new(1, 28));
    }

    #[test]
    fn test_price_below_decimal_precision_is_rejected_not_zeroed() {
        for json in [
            r#"{"price": 1e-30}"#,
            r#"{"price": 0.00000000000000000000000000001}"#,
            r#"{"price": 1.5e-28}"#,
        ] {
            let result: Result<ProductRecord, _> = serde_json::from_str(json);
            let err = result.expect_err(json);
            assert!(err.to_string().contains("not representable"), "{err}");
        }
    }

    #[test]
    fn test_price_too_large_is_rejected() {
        let result: Result<ProductRecord, _> = serde_json::from_str(r#"{"price": 1e40}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_price_must_be_a_number() {
        let result: Result<ProductRecord, _> = serde_json::from_str(r#"{"price": "10.50"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_exact_decimal_scientific() {
        assert_eq!(parse_exact_decimal("1.25e2").unwrap(), dec("125"));
        assert_eq!(parse_exact_decimal("1.2E+10").unwrap(), dec("12000000000"));
        assert_eq!(parse_exact_decimal("-3e-2").unwrap(), dec("-0.03"));
        assert_eq!(parse_exact_decimal("0e-99").unwrap(), Decimal::ZERO);
        assert!(parse_exact_decimal("1e").is_err());
    }
}
