use crate::domain::{Product, ProductCatalog};
use crate::use_cases::form::{FormFields, ProductForm};
use crate::use_cases::notice::{Confirmation, Notice};
use std::sync::Arc;

// Buttons rendered on every product row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowAction {
    Delete,
    Edit,
    View,
}

impl RowAction {
    // CSS class that identifies the button inside the product list.
    pub fn class(self) -> &'static str {
        match self {
            RowAction::Delete => "delete-btn",
            RowAction::Edit => "edit-btn",
            RowAction::View => "view-btn",
        }
    }

    pub fn from_class(class: &str) -> Option<Self> {
        match class {
            "delete-btn" => Some(RowAction::Delete),
            "edit-btn" => Some(RowAction::Edit),
            "view-btn" => Some(RowAction::View),
            _ => None,
        }
    }
}

// A click delegated from the product list: which button, on which row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowClick {
    pub action: RowAction,
    pub product_id: i64,
}

impl RowClick {
    // Encoded as `<class>:<id>`, e.g. `delete-btn:7`.
    pub fn target(&self) -> String {
        format!("{}:{}", self.action.class(), self.product_id)
    }

    pub fn parse(target: &str) -> Option<Self> {
        let (class, id) = target.split_once(':')?;
        Some(Self {
            action: RowAction::from_class(class.trim())?,
            product_id: id.trim().parse().ok()?,
        })
    }
}

// Everything the renderer needs for one page load.
#[derive(Clone, Debug, PartialEq)]
pub struct PageView {
    pub products: Vec<Product>,
    pub form: ProductForm,
    pub notices: Vec<Notice>,
    pub confirmation: Option<Confirmation>,
    pub detail: Option<Product>,
}

// Controller behind the products page. Each operation performs at most one
// mutation request and then updates the list, the form or the dialogs.
pub struct ProductPage {
    catalog: Arc<dyn ProductCatalog>,
    products: Vec<Product>,
    form: ProductForm,
    notices: Vec<Notice>,
    confirmation: Option<Confirmation>,
    detail: Option<Product>,
}

impl ProductPage {
    pub fn new(catalog: Arc<dyn ProductCatalog>) -> Self {
        Self {
            catalog,
            products: Vec::new(),
            form: ProductForm::default(),
            notices: Vec::new(),
            confirmation: None,
            detail: None,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn form(&self) -> &ProductForm {
        &self.form
    }

    pub fn pending_confirmation(&self) -> Option<&Confirmation> {
        self.confirmation.as_ref()
    }

    // Sync the inputs with what the browser posted.
    pub fn set_fields(&mut self, fields: FormFields) {
        self.form.fields = fields;
    }

    // Replace the table content with the current list. Failures keep the old rows.
    pub async fn refresh(&mut self) {
        match self.catalog.list().await {
            Ok(products) => {
                tracing::debug!(count = products.len(), "product list refreshed.");
                self.products = products;
            }
            Err(error) => tracing::error!(%error, "failed to fetch products."),
        }
    }

    pub async fn add(&mut self) {
        let draft = self.form.draft();
        match self.catalog.create(draft).await {
            Ok(product) => {
                tracing::info!(product_id = product.id, "product added.");
                self.notices
                    .push(Notice::success("Success", "Product added successfully!"));
                self.refresh().await;
                self.form.reset();
            }
            Err(error) => {
                tracing::error!(%error, "error adding product.");
                self.notices.push(Notice::error("Failed to add product."));
            }
        }
    }

    pub async fn update(&mut self) {
        let Some(update) = self.form.update_payload() else {
            self.notices
                .push(Notice::error("Please select a product to update."));
            return;
        };

        let product_id = update.id;
        match self.catalog.update(update).await {
            Ok(()) => {
                tracing::info!(product_id, "product updated.");
                self.notices
                    .push(Notice::success("Success", "Product updated successfully!"));
                self.refresh().await;
                self.form.reset();
            }
            Err(error) => {
                tracing::error!(product_id, %error, "error updating product.");
                self.notices.push(Notice::error("Failed to update product."));
            }
        }
    }

    // Ask for confirmation; nothing is sent until `resolve_delete`.
    pub fn request_delete(&mut self, product_id: i64) {
        self.confirmation = Some(Confirmation::delete(product_id));
    }

    pub async fn resolve_delete(&mut self, confirmed: bool) {
        let Some(confirmation) = self.confirmation.take() else {
            tracing::debug!("no pending confirmation; ignoring answer.");
            return;
        };
        let product_id = confirmation.product_id;
        if !confirmed {
            tracing::debug!(product_id, "delete cancelled.");
            return;
        }

        match self.catalog.delete(product_id).await {
            Ok(()) => {
                tracing::info!(product_id, "product deleted.");
                self.notices
                    .push(Notice::success("Deleted!", "Product has been deleted."));
                self.refresh().await;
            }
            Err(error) => {
                tracing::error!(product_id, %error, "error deleting product.");
                self.notices.push(Notice::error("Failed to delete product."));
            }
        }
    }

    pub async fn edit(&mut self, product_id: i64) {
        match self.catalog.get(product_id).await {
            Ok(product) => self.form.load(&product),
            Err(error) => tracing::error!(product_id, %error, "error loading product for edit."),
        }
    }

    pub async fn view(&mut self, product_id: i64) {
        match self.catalog.get(product_id).await {
            Ok(product) => self.detail = Some(product),
            Err(error) => {
                tracing::error!(product_id, %error, "error fetching product details.");
                self.notices
                    .push(Notice::error("Failed to load product details."));
            }
        }
    }

    pub fn reset_form(&mut self) {
        self.form.reset();
    }

    pub async fn row_click(&mut self, click: RowClick) {
        match click.action {
            RowAction::Delete => self.request_delete(click.product_id),
            RowAction::Edit => self.edit(click.product_id).await,
            RowAction::View => self.view(click.product_id).await,
        }
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn take_detail(&mut self) -> Option<Product> {
        self.detail.take()
    }

    // Snapshot for rendering. Notices and the detail modal are shown once;
    // a pending confirmation stays until it is answered.
    pub fn render_view(&mut self) -> PageView {
        PageView {
            products: self.products.clone(),
            form: self.form.clone(),
            notices: self.take_notices(),
            confirmation: self.confirmation.clone(),
            detail: self.take_detail(),
        }
    }
}
