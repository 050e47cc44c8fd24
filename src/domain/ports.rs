use async_trait::async_trait;

use crate::domain::errors::CatalogError;
use crate::domain::product::{Product, ProductDraft, ProductUpdate};

// Port for the products REST resource used by the page controller.
// The controller depends on this trait, not on the reqwest client.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    async fn list(&self) -> Result<Vec<Product>, CatalogError>;
    async fn get(&self, id: i64) -> Result<Product, CatalogError>;
    async fn create(&self, draft: ProductDraft) -> Result<Product, CatalogError>;
    // Succeeds only on 204 No Content.
    async fn update(&self, update: ProductUpdate) -> Result<(), CatalogError>;
    // Succeeds only on 204 No Content.
    async fn delete(&self, id: i64) -> Result<(), CatalogError>;
}
