//! UI-session wiring for the product form.
//!
//! A [`ProductSession`] owns the [`ProductStore`](shopfront_products::ProductStore)
//! together with the capabilities the rendering layer provides (delete
//! confirmation) and projects the whole state into a serializable
//! [`ProductView`] after every action.

pub mod config;
pub mod confirm;
pub mod session;
pub mod view;

pub use config::SessionConfig;
pub use confirm::{AlwaysConfirm, Confirm, NeverConfirm};
pub use session::{DeleteOutcome, ProductSession};
pub use view::{FormMode, FormView, ProductCard, ProductView, SecondaryAction};
