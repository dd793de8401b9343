//! Products domain module (in-memory catalog form state).
//!
//! This crate contains the rules for the product list and its editing draft,
//! implemented purely as deterministic domain logic (no IO, no rendering, no
//! storage). Everything lives for as long as the owning session does.

pub mod draft;
pub mod format;
pub mod product;
pub mod store;
pub mod validation;

pub use draft::{Draft, DraftField, DraftFields, DraftTarget};
pub use format::{PriceStyle, format_price, format_rupiah};
pub use product::{Price, Product};
pub use store::{ProductStore, SubmitOutcome};
pub use validation::{INVALID_INPUT_MESSAGE, ValidFields, validate_fields, validate_priced};
