// Use cases layer: the product page controller and its form/dialog state.

pub mod form;
pub mod notice;
pub mod page;

#[cfg(test)]
pub(crate) mod test_support;

pub use form::{FormFields, ProductForm};
pub use notice::{Confirmation, Notice, NoticeIcon};
pub use page::{PageView, ProductPage, RowAction, RowClick};
