use serde::Serialize;

use shopfront_core::{Clock, DomainResult, ProductId, SystemClock};
use shopfront_products::{DraftField, ProductStore, SubmitOutcome};

use crate::config::SessionConfig;
use crate::confirm::Confirm;
use crate::view::ProductView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeleteOutcome {
    Deleted,
    /// The user answered "no"; the store was not touched.
    Declined,
    NotFound,
}

/// One user's form session: the store plus the environment's capabilities.
#[derive(Debug)]
pub struct ProductSession<F, C = SystemClock> {
    store: ProductStore<C>,
    confirm: F,
    config: SessionConfig,
}

impl<F: Confirm> ProductSession<F, SystemClock> {
    pub fn new(confirm: F, config: SessionConfig) -> Self {
        Self::with_store(ProductStore::new(), confirm, config)
    }
}

impl<F: Confirm, C: Clock> ProductSession<F, C> {
    pub fn with_store(store: ProductStore<C>, confirm: F, config: SessionConfig) -> Self {
        Self {
            store,
            confirm,
            config,
        }
    }

    pub fn store(&self) -> &ProductStore<C> {
        &self.store
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Current screen state.
    pub fn view(&self) -> ProductView {
        ProductView::project(&self.store, &self.config)
    }

    /// Keystroke into one of the form inputs.
    pub fn edit_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.store.draft_mut().set(field, value);
    }

    pub fn start_create(&mut self) {
        self.store.start_create();
    }

    pub fn reset(&mut self) {
        tracing::debug!("form reset");
        self.store.reset();
    }

    pub fn start_edit(&mut self, id: ProductId) -> DomainResult<()> {
        self.store.start_edit(id).inspect_err(|err| {
            tracing::warn!(product_id = %id, "cannot edit: {err}");
        })
    }

    pub fn cancel_edit(&mut self) {
        self.store.cancel_edit();
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        let outcome = self.store.submit();
        tracing::debug!(?outcome, count = self.store.len(), "form submitted");
        outcome
    }

    /// Delete after asking the confirmation capability.
    ///
    /// The store is only touched when the user agrees.
    pub fn request_delete(&mut self, id: ProductId) -> DeleteOutcome {
        if self.store.get(id).is_none() {
            return DeleteOutcome::NotFound;
        }
        if !self.confirm.confirm(&self.config.delete_prompt) {
            tracing::info!(product_id = %id, "delete declined");
            return DeleteOutcome::Declined;
        }
        if self.store.delete_product(id) {
            DeleteOutcome::Deleted
        } else {
            DeleteOutcome::NotFound
        }
    }
}
