/// Checks a product record against the catalogue data contract.
///
/// Each rule is evaluated on its own, and the caller receives every
/// violation found rather than only the first:
/// - `name` must be present and not blank
/// - `price` must be present and strictly positive
/// - `stock` must be present and zero or positive
///
/// # Examples
/// ```
/// use catalog_backend::models::ProductRecord;
/// use catalog_backend::validation::product::validate_product;
/// use rust_decimal::Decimal;
///
/// let widget = ProductRecord::new("Widget", Decimal::new(1050, 2), 0);
/// assert!(validate_product(&widget).is_empty());
/// ```
pub mod product;

pub use product::{ValidationErrors, Violation, ViolationKind, validate_product};
