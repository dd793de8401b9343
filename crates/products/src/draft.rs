//! Editing drafts: unsaved form input bound to a creation or an edit target.

use serde::{Deserialize, Serialize};

use shopfront_core::ProductId;

use crate::product::Product;

/// Raw form input. `price` stays text so half-typed values are representable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftFields {
    pub name: String,
    pub price: String,
    pub image: String,
    pub desc: String,
}

/// One input of the product form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftField {
    Name,
    Price,
    Image,
    Desc,
}

impl DraftFields {
    /// Copy a product into editable text form.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name().to_string(),
            price: product.price().to_string(),
            image: product.image().unwrap_or_default().to_string(),
            desc: product.desc().unwrap_or_default().to_string(),
        }
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Price => &self.price,
            DraftField::Image => &self.image,
            DraftField::Desc => &self.desc,
        }
    }

    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let slot = match field {
            DraftField::Name => &mut self.name,
            DraftField::Price => &mut self.price,
            DraftField::Image => &mut self.image,
            DraftField::Desc => &mut self.desc,
        };
        *slot = value.into();
    }

    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.price.is_empty() && self.image.is_empty() && self.desc.is_empty()
    }
}

/// What a submitted draft will do.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "id", rename_all = "lowercase")]
pub enum DraftTarget {
    /// Create a new product. An empty `New` draft means "no edit in progress".
    #[default]
    New,
    /// Overwrite the product with this id.
    Editing(ProductId),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Draft {
    target: DraftTarget,
    fields: DraftFields,
}

impl Draft {
    /// Empty creation draft.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn editing(product: &Product) -> Self {
        Self {
            target: DraftTarget::Editing(product.product_id()),
            fields: DraftFields::from_product(product),
        }
    }

    pub fn target(&self) -> DraftTarget {
        self.target
    }

    pub fn editing_id(&self) -> Option<ProductId> {
        match self.target {
            DraftTarget::Editing(id) => Some(id),
            DraftTarget::New => None,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id().is_some()
    }

    pub fn fields(&self) -> &DraftFields {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut DraftFields {
        &mut self.fields
    }
}
