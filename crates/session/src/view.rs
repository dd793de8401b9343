//! Serializable projection of the store for the rendering layer.
//!
//! The view holds no state of its own; it is recomputed from the store after
//! every action so the screen always reflects the store exactly.

use chrono::{DateTime, Utc};
use serde::Serialize;

use shopfront_core::{Clock, Entity, ProductId};
use shopfront_products::{DraftFields, Product, ProductStore, format_rupiah};

use crate::config::SessionConfig;

pub const EMPTY_LIST_TEXT: &str = "No products yet. Add one using the form.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormMode {
    Create,
    Edit,
}

/// The button next to "submit".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SecondaryAction {
    /// Clears the creation form.
    Reset,
    /// Abandons the edit draft.
    CancelEdit,
}

impl SecondaryAction {
    pub fn label(self) -> &'static str {
        match self {
            SecondaryAction::Reset => "Reset",
            SecondaryAction::CancelEdit => "Cancel Edit",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormView {
    pub mode: FormMode,
    pub heading: &'static str,
    pub submit_label: &'static str,
    pub secondary: SecondaryAction,
    pub secondary_label: &'static str,
    pub fields: DraftFields,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCard {
    pub id: ProductId,
    pub id_label: String,
    pub name: String,
    pub price: f64,
    pub price_text: String,
    pub created_at: DateTime<Utc>,
    pub created_at_text: String,
    pub desc: Option<String>,
    /// When absent, or when it fails to load, the renderer shows a placeholder glyph.
    pub image: Option<String>,
    pub is_being_edited: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductView {
    pub form: FormView,
    pub error: Option<String>,
    pub count: usize,
    pub products: Vec<ProductCard>,
    pub empty_text: Option<&'static str>,
}

impl ProductView {
    pub fn project<C: Clock>(store: &ProductStore<C>, config: &SessionConfig) -> Self {
        let editing = store.draft().editing_id();

        let form = match editing {
            None => FormView {
                mode: FormMode::Create,
                heading: "Add New Product",
                submit_label: "Add Product",
                secondary: SecondaryAction::Reset,
                secondary_label: SecondaryAction::Reset.label(),
                fields: store.draft().fields().clone(),
            },
            Some(_) => FormView {
                mode: FormMode::Edit,
                heading: "Edit Product",
                submit_label: "Save Changes",
                secondary: SecondaryAction::CancelEdit,
                secondary_label: SecondaryAction::CancelEdit.label(),
                fields: store.draft().fields().clone(),
            },
        };

        let products = store
            .list()
            .iter()
            .map(|p| card(p, config, editing))
            .collect();

        Self {
            form,
            error: store.error_message().map(str::to_string),
            count: store.len(),
            products,
            empty_text: store.is_empty().then_some(EMPTY_LIST_TEXT),
        }
    }
}

fn card(product: &Product, config: &SessionConfig, editing: Option<ProductId>) -> ProductCard {
    let id = *product.id();
    ProductCard {
        id,
        id_label: format!("#{id}"),
        name: product.name().to_string(),
        price: product.price().value(),
        price_text: format_rupiah(product.price(), config.price_style),
        created_at: product.created_at(),
        created_at_text: product.created_at().format("%d/%m/%Y %H.%M.%S").to_string(),
        desc: product.desc().map(str::to_string),
        image: product.image().map(str::to_string),
        is_being_edited: editing == Some(id),
    }
}
