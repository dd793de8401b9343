//! Form validation.
//!
//! Only one failure is ever reported, with a single fixed message, so the form
//! shows one banner instead of per-field errors.

use shopfront_core::{DomainError, DomainResult};

use crate::draft::DraftFields;
use crate::product::Price;

pub const INVALID_INPUT_MESSAGE: &str =
    "name and price must be correctly filled, price greater than 0";

/// Draft input that passed validation, trimmed and parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidFields {
    pub name: String,
    pub price: Price,
    pub image: String,
    pub desc: String,
}

fn invalid() -> DomainError {
    DomainError::validation(INVALID_INPUT_MESSAGE)
}

fn validate_name(name: &str) -> DomainResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(invalid());
    }
    Ok(name.to_string())
}

/// Check a name with an already-numeric price (e.g. a stored product's).
pub fn validate_priced(name: &str, price: f64) -> DomainResult<(String, Price)> {
    let name = validate_name(name)?;
    let price = Price::new(price).map_err(|_| invalid())?;
    Ok((name, price))
}

pub fn validate_fields(fields: &DraftFields) -> DomainResult<ValidFields> {
    let name = validate_name(&fields.name)?;
    let price = fields.price.parse::<Price>().map_err(|_| invalid())?;
    Ok(ValidFields {
        name,
        price,
        image: fields.image.trim().to_string(),
        desc: fields.desc.trim().to_string(),
    })
}
