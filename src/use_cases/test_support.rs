use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::{CatalogError, Product, ProductCatalog, ProductDraft, ProductUpdate};

// Requests observed by the fake catalog, in call order.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum CatalogCall {
    List,
    Get(i64),
    Create(ProductDraft),
    Update(ProductUpdate),
    Delete(i64),
}

#[derive(Clone, Copy, Default)]
pub(crate) struct FailureFlags {
    pub list: bool,
    pub get: bool,
    pub create: bool,
    pub update: bool,
    pub delete: bool,
}

// In-memory catalog that records every call. Clones share state.
#[derive(Clone, Default)]
pub(crate) struct RecordingCatalog {
    products: Arc<Mutex<Vec<Product>>>,
    calls: Arc<Mutex<Vec<CatalogCall>>>,
    failures: Arc<Mutex<FailureFlags>>,
}

impl RecordingCatalog {
    pub(crate) fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(Mutex::new(products)),
            ..Default::default()
        }
    }

    pub(crate) fn with_failures(self, failures: FailureFlags) -> Self {
        self.set_failures(failures);
        self
    }

    pub(crate) fn set_failures(&self, failures: FailureFlags) {
        *self.failures.lock().expect("failures mutex poisoned") = failures;
    }

    pub(crate) fn calls(&self) -> Vec<CatalogCall> {
        self.calls.lock().expect("calls mutex poisoned").clone()
    }

    fn record(&self, call: CatalogCall) -> FailureFlags {
        self.calls.lock().expect("calls mutex poisoned").push(call);
        *self.failures.lock().expect("failures mutex poisoned")
    }
}

fn server_error() -> CatalogError {
    CatalogError::Upstream {
        status: 500,
        message: None,
    }
}

fn not_found() -> CatalogError {
    CatalogError::Upstream {
        status: 404,
        message: Some("product not found".to_string()),
    }
}

#[async_trait]
impl ProductCatalog for RecordingCatalog {
    async fn list(&self) -> Result<Vec<Product>, CatalogError> {
        if self.record(CatalogCall::List).list {
            return Err(server_error());
        }

        Ok(self.products.lock().expect("products mutex poisoned").clone())
    }

    async fn get(&self, id: i64) -> Result<Product, CatalogError> {
        if self.record(CatalogCall::Get(id)).get {
            return Err(server_error());
        }

        let guard = self.products.lock().expect("products mutex poisoned");
        guard
            .iter()
            .find(|product| product.id == id)
            .cloned()
            .ok_or_else(not_found)
    }

    async fn create(&self, draft: ProductDraft) -> Result<Product, CatalogError> {
        if self.record(CatalogCall::Create(draft.clone())).create {
            return Err(server_error());
        }

        let mut guard = self.products.lock().expect("products mutex poisoned");
        let id = guard.iter().map(|product| product.id).max().unwrap_or(0) + 1;
        let product = Product {
            id,
            name: draft.name,
            price: draft.price.unwrap_or_default(),
            description: draft.description,
        };
        guard.push(product.clone());
        Ok(product)
    }

    async fn update(&self, update: ProductUpdate) -> Result<(), CatalogError> {
        if self.record(CatalogCall::Update(update.clone())).update {
            return Err(CatalogError::UnexpectedStatus { status: 200 });
        }

        let mut guard = self.products.lock().expect("products mutex poisoned");
        let product = guard
            .iter_mut()
            .find(|product| product.id == update.id)
            .ok_or_else(not_found)?;
        product.name = update.name;
        product.price = update.price.unwrap_or_default();
        product.description = update.description;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), CatalogError> {
        if self.record(CatalogCall::Delete(id)).delete {
            return Err(server_error());
        }

        let mut guard = self.products.lock().expect("products mutex poisoned");
        let before = guard.len();
        guard.retain(|product| product.id != id);
        if guard.len() == before {
            return Err(not_found());
        }
        Ok(())
    }
}
