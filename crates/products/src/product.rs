use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;

use shopfront_core::{DomainError, DomainResult, Entity, ProductId, ValueObject};

use crate::validation::ValidFields;

/// A validated selling price: finite and strictly greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    pub fn new(value: f64) -> DomainResult<Self> {
        if !value.is_finite() {
            return Err(DomainError::validation("price must be a finite number"));
        }
        if value <= 0.0 {
            return Err(DomainError::validation("price must be greater than 0"));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl ValueObject for Price {}

/// Shortest text that parses back to the same price (`12.5`, `3`, `0.01`).
impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Price {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<f64>()
            .map_err(|e| DomainError::validation(format!("price {s:?} is not a number: {e}")))?;
        Self::new(value)
    }
}

/// A product record in the session catalog.
///
/// `id` and `created_at` are fixed at creation; the rest can be revised.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    id: ProductId,
    name: String,
    price: Price,
    image: String,
    desc: String,
    created_at: DateTime<Utc>,
}

impl Product {
    pub(crate) fn create(id: ProductId, fields: ValidFields, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: fields.name,
            price: fields.price,
            image: fields.image,
            desc: fields.desc,
            created_at,
        }
    }

    /// Overwrite the mutable fields, keeping identity and creation time.
    pub(crate) fn revise(&mut self, fields: ValidFields) {
        self.name = fields.name;
        self.price = fields.price;
        self.image = fields.image;
        self.desc = fields.desc;
    }

    pub fn product_id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    /// Image URL, if one was given. Not checked for reachability.
    pub fn image(&self) -> Option<&str> {
        non_empty(&self.image)
    }

    pub fn desc(&self) -> Option<&str> {
        non_empty(&self.desc)
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() { None } else { Some(s) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn test_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()
    }

    fn fields(name: &str, price: f64) -> ValidFields {
        ValidFields {
            name: name.to_string(),
            price: Price::new(price).unwrap(),
            image: String::new(),
            desc: String::new(),
        }
    }

    #[test]
    fn price_rejects_zero_negative_and_non_finite() {
        assert!(Price::new(0.0).is_err());
        assert!(Price::new(-1.0).is_err());
        assert!(Price::new(f64::NAN).is_err());
        assert!(Price::new(f64::INFINITY).is_err());
        assert_eq!(Price::new(0.01).unwrap().value(), 0.01);
    }

    #[test]
    fn price_parses_trimmed_decimal_text() {
        assert_eq!(" 12.50 ".parse::<Price>().unwrap().value(), 12.5);
        assert!("12abc".parse::<Price>().is_err());
        assert!("".parse::<Price>().is_err());
        assert!("inf".parse::<Price>().is_err());
    }

    #[test]
    fn price_displays_shortest_form() {
        assert_eq!(Price::new(12.5).unwrap().to_string(), "12.5");
        assert_eq!(Price::new(3.0).unwrap().to_string(), "3");
    }

    #[test]
    fn empty_optional_fields_read_as_none() {
        let product = Product::create(ProductId::new(), fields("Pen", 1.0), test_time());
        assert_eq!(product.image(), None);
        assert_eq!(product.desc(), None);
    }

    #[test]
    fn revise_keeps_identity_and_creation_time() {
        let id = ProductId::new();
        let mut product = Product::create(id, fields("Pen", 12.5), test_time());
        product.revise(fields("Pencil", 3.0));

        assert_eq!(*product.id(), id);
        assert_eq!(product.created_at(), test_time());
        assert_eq!(product.name(), "Pencil");
        assert_eq!(product.price().value(), 3.0);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let product = Product::create(ProductId::new(), fields("Pen", 12.5), test_time());
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["name"], "Pen");
        assert_eq!(json["price"], 12.5);
        assert_eq!(json["createdAt"], "2024-01-02T03:04:05Z");
    }
}
