// One-shot dialog state produced by the page controller.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeIcon {
    Success,
    Error,
    Warning,
}

impl NoticeIcon {
    // Icon name understood by the dialog library.
    pub fn as_str(self) -> &'static str {
        match self {
            NoticeIcon::Success => "success",
            NoticeIcon::Error => "error",
            NoticeIcon::Warning => "warning",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub title: String,
    pub text: String,
    pub icon: NoticeIcon,
}

impl Notice {
    pub fn success(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            icon: NoticeIcon::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            text: text.into(),
            icon: NoticeIcon::Error,
        }
    }
}

// Yes/cancel prompt guarding a product deletion.
#[derive(Clone, Debug, PartialEq)]
pub struct Confirmation {
    pub product_id: i64,
    pub title: String,
    pub text: String,
    pub icon: NoticeIcon,
    pub confirm_label: String,
}

impl Confirmation {
    pub fn delete(product_id: i64) -> Self {
        Self {
            product_id,
            title: "Are you sure?".to_string(),
            text: "You won't be able to revert this!".to_string(),
            icon: NoticeIcon::Warning,
            confirm_label: "Yes, delete it!".to_string(),
        }
    }
}
