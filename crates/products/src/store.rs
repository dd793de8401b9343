//! The product store: ordered collection + the single active draft.
//!
//! All mutation goes through `&mut self`; there is exactly one owner (the UI
//! session) and no ambient state.

use serde::Serialize;

use shopfront_core::{Clock, DomainError, DomainResult, Entity, ProductId, SystemClock};

use crate::draft::{Draft, DraftFields, DraftTarget};
use crate::product::Product;
use crate::validation::{self, ValidFields};

/// Result of [`ProductStore::submit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "id", rename_all = "snake_case")]
pub enum SubmitOutcome {
    /// A new product was prepended.
    Created(ProductId),
    /// An existing product was overwritten in place.
    Updated(ProductId),
    /// Validation failed; nothing changed and the draft was kept.
    Rejected,
    /// The edit target was deleted before the draft was submitted.
    TargetMissing(ProductId),
}

#[derive(Debug, Clone)]
pub struct ProductStore<C = SystemClock> {
    // Newest first.
    products: Vec<Product>,
    draft: Draft,
    error: Option<DomainError>,
    clock: C,
}

impl ProductStore<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for ProductStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> ProductStore<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            products: Vec::new(),
            draft: Draft::new(),
            error: None,
            clock,
        }
    }

    /// Validate a candidate and record the outcome as the current error state.
    ///
    /// Returns `true` (and clears the error) iff the name is non-blank and the
    /// price is a finite number greater than zero.
    pub fn validate(&mut self, candidate: &DraftFields) -> bool {
        self.check(validation::validate_fields(candidate)).is_some()
    }

    /// [`Self::validate`] for a candidate whose price is already a number.
    pub fn validate_priced(&mut self, name: &str, price: f64) -> bool {
        self.check(validation::validate_priced(name, price)).is_some()
    }

    /// Start composing a new product from an empty form.
    pub fn start_create(&mut self) {
        tracing::debug!("draft reset to new product");
        self.draft = Draft::new();
        self.error = None;
    }

    /// Clear the creation form. Same transition as [`Self::start_create`].
    pub fn reset(&mut self) {
        self.start_create();
    }

    /// Copy an existing product into an edit draft.
    ///
    /// Fails with [`DomainError::NotFound`] (store untouched) if `id` is unknown.
    pub fn start_edit(&mut self, id: ProductId) -> DomainResult<()> {
        let product = self
            .get(id)
            .ok_or_else(|| DomainError::not_found(format!("product {id}")))?;
        self.draft = Draft::editing(product);
        self.error = None;
        tracing::debug!(product_id = %id, "editing product");
        Ok(())
    }

    /// Drop the edit draft without applying it.
    pub fn cancel_edit(&mut self) {
        if let Some(id) = self.draft.editing_id() {
            tracing::debug!(product_id = %id, "edit cancelled");
        }
        self.draft = Draft::new();
        self.error = None;
    }

    /// Submit the active draft.
    pub fn submit(&mut self) -> SubmitOutcome {
        let Some(valid) = self.check(validation::validate_fields(self.draft.fields())) else {
            tracing::warn!(draft_target = ?self.draft.target(), "draft rejected by validation");
            return SubmitOutcome::Rejected;
        };

        match self.draft.target() {
            DraftTarget::New => {
                let id = self.allocate_id();
                let product = Product::create(id, valid, self.clock.now());
                tracing::info!(product_id = %id, product_name = product.name(), "product created");
                self.products.insert(0, product);
                self.draft = Draft::new();
                SubmitOutcome::Created(id)
            }
            DraftTarget::Editing(id) => self.apply_edit(id, valid),
        }
    }

    /// Remove a product. Absent ids are a silent no-op.
    ///
    /// Returns whether a product was removed. Callers are expected to have
    /// obtained user confirmation before calling this.
    pub fn delete_product(&mut self, id: ProductId) -> bool {
        let before = self.products.len();
        self.products.retain(|p| *p.id() != id);
        let removed = self.products.len() != before;

        if self.draft.editing_id() == Some(id) {
            self.draft = Draft::new();
        }
        if removed {
            tracing::info!(product_id = %id, "product deleted");
        }
        removed
    }

    /// Products in stored order, newest first.
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| *p.id() == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Input binding for the form fields. The draft target cannot be changed here.
    pub fn draft_mut(&mut self) -> &mut DraftFields {
        self.draft.fields_mut()
    }

    pub fn is_editing(&self) -> bool {
        self.draft.is_editing()
    }

    pub fn error(&self) -> Option<&DomainError> {
        self.error.as_ref()
    }

    /// Message for the error banner, if any.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_ref().map(DomainError::detail)
    }

    fn check<T>(&mut self, result: DomainResult<T>) -> Option<T> {
        match result {
            Ok(valid) => {
                self.error = None;
                Some(valid)
            }
            Err(err) => {
                self.error = Some(err);
                None
            }
        }
    }

    fn apply_edit(&mut self, id: ProductId, valid: ValidFields) -> SubmitOutcome {
        // The draft is finished either way: applied, or its target is gone.
        self.draft = Draft::new();

        match self.products.iter_mut().find(|p| *p.id() == id) {
            Some(product) => {
                product.revise(valid);
                tracing::info!(product_id = %id, "product updated");
                SubmitOutcome::Updated(id)
            }
            None => {
                tracing::warn!(product_id = %id, "edit target no longer exists");
                self.error = Some(DomainError::not_found(
                    "the product being edited no longer exists",
                ));
                SubmitOutcome::TargetMissing(id)
            }
        }
    }

    fn allocate_id(&self) -> ProductId {
        let id = ProductId::new();
        debug_assert!(self.get(id).is_none(), "product id collision");
        id
    }
}
