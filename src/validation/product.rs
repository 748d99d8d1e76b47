use crate::models::ProductRecord;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use thiserror::Error;
use utoipa::ToSchema;

pub const NAME_BLANK: &str = "Name darf nicht leer sein";
pub const PRICE_REQUIRED: &str = "Preis ist erforderlich";
pub const PRICE_NOT_POSITIVE: &str = "Preis muss positiv sein";
pub const STOCK_REQUIRED: &str = "Lagerbestand ist erforderlich";
pub const STOCK_NEGATIVE: &str = "Lagerbestand muss >= 0 sein";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum ViolationKind {
    /// A required attribute is absent (or blank, for text).
    MissingField,
    /// An attribute is present but breaks its numeric constraint.
    InvalidValue,
}

/// A single failed constraint, identified by the wire name of the field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Violation {
    pub field: &'static str,
    pub kind: ViolationKind,
    pub message: &'static str,
}

impl Violation {
    pub fn missing(field: &'static str, message: &'static str) -> Self {
        Self {
            field,
            kind: ViolationKind::MissingField,
            message,
        }
    }

    pub fn invalid(field: &'static str, message: &'static str) -> Self {
        Self {
            field,
            kind: ViolationKind::InvalidValue,
            message,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Non-empty set of violations found on one record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", join_messages(.0))]
pub struct ValidationErrors(pub Vec<Violation>);

impl ValidationErrors {
    pub fn violations(&self) -> &[Violation] {
        &self.0
    }
}

fn join_messages(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Checks a [`ProductRecord`] against the catalogue data contract.
///
/// Every rule runs independently, so the result holds all violations at once,
/// ordered `name`, `price`, `stock`. An empty vector means the record is valid.
/// `id`, `description` and the timestamps are never inspected.
///
/// # Examples
/// ```
/// use catalog_backend::models::ProductRecord;
/// use catalog_backend::validation::product::{validate_product, ViolationKind};
/// use rust_decimal::Decimal;
///
/// let record = ProductRecord::new("Widget", Decimal::new(-1, 0), -2);
/// let kinds: Vec<_> = validate_product(&record).iter().map(|v| (v.field, v.kind)).collect();
/// assert_eq!(
///     kinds,
///     vec![("price", ViolationKind::InvalidValue), ("stock", ViolationKind::InvalidValue)]
/// );
/// ```
pub fn validate_product(product: &ProductRecord) -> Vec<Violation> {
    [
        check_name(product.name.as_deref()),
        check_price(product.price),
        check_stock(product.stock),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn check_name(name: Option<&str>) -> Option<Violation> {
    match name {
        Some(name) if !name.trim().is_empty() => None,
        _ => Some(Violation::missing("name", NAME_BLANK)),
    }
}

fn check_price(price: Option<Decimal>) -> Option<Violation> {
    match price {
        None => Some(Violation::missing("price", PRICE_REQUIRED)),
        Some(price) if price <= Decimal::ZERO => Some(Violation::invalid("price", PRICE_NOT_POSITIVE)),
        Some(_) => None,
    }
}

fn check_stock(stock: Option<i32>) -> Option<Violation> {
    match stock {
        None => Some(Violation::missing("stock", STOCK_REQUIRED)),
        Some(stock) if stock < 0 => Some(Violation::invalid("stock", STOCK_NEGATIVE)),
        Some(_) => None,
    }
}

impl ProductRecord {
    /// Runs [`validate_product`] and turns a non-empty result into an error.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let violations = validate_product(self);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(violations))
        }
    }
}
