// Clients for external services.

pub mod products;
