use serde::{Deserialize, Serialize};

// Product record as served by the products API. The id is assigned server-side.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub description: String,
}

// Payload sent when creating a product.
// A price the form could not read is sent as null and left for the server to reject.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub price: Option<f64>,
    pub description: String,
}

// Payload sent when replacing an existing product.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub id: i64,
    pub name: String,
    pub price: Option<f64>,
    pub description: String,
}
