use crate::use_cases::{FormFields, RowClick};
use serde::Deserialize;

// Product form as posted by the browser; names match the page's element ids.
#[derive(Debug, Default, Deserialize)]
pub struct ProductFormPayload {
    #[serde(rename = "bookName", default)]
    pub book_name: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub description: String,
}

impl From<ProductFormPayload> for FormFields {
    fn from(payload: ProductFormPayload) -> Self {
        FormFields {
            name: payload.book_name,
            price: payload.price,
            description: payload.description,
        }
    }
}

// Row button click delegated through the product list.
// Row buttons submit the product form, so the current inputs ride along.
#[derive(Debug, Deserialize)]
pub struct RowClickPayload {
    pub target: String,
    #[serde(flatten)]
    pub form: ProductFormPayload,
}

impl RowClickPayload {
    pub fn row_click(&self) -> Option<RowClick> {
        RowClick::parse(&self.target)
    }
}

// Answer to the delete confirmation dialog.
#[derive(Debug, Deserialize)]
pub struct ConfirmPayload {
    // "true" when the user confirmed; anything else counts as cancel.
    #[serde(default)]
    pub confirmed: String,
    #[serde(flatten)]
    pub form: ProductFormPayload,
}

impl ConfirmPayload {
    pub fn is_confirmed(&self) -> bool {
        self.confirmed == "true"
    }
}
