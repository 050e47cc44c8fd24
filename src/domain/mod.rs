mod errors;
mod ports;
mod product;

// Re-export the domain boundary types and ports.
pub use errors::CatalogError;
pub use ports::ProductCatalog;
pub use product::{Product, ProductDraft, ProductUpdate};
