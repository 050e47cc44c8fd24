use std::fmt;

// Failures reported by the product catalog port.
#[derive(Debug)]
pub enum CatalogError {
    // The request never produced a response (connect, TLS, timeout).
    Transport(String),
    // The backend answered with a non-success status.
    Upstream {
        status: u16,
        message: Option<String>,
    },
    // The backend answered 2xx, but not the status the operation expects.
    UnexpectedStatus { status: u16 },
    // The response body did not match the expected shape.
    Decode(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Transport(err) => write!(f, "products transport error: {err}"),
            CatalogError::Upstream { status, message } => {
                if let Some(message) = message {
                    write!(f, "products upstream error {status}: {message}")
                } else {
                    write!(f, "products upstream error {status}")
                }
            }
            CatalogError::UnexpectedStatus { status } => {
                write!(f, "products unexpected status {status}")
            }
            CatalogError::Decode(err) => write!(f, "products response decode error: {err}"),
        }
    }
}

impl std::error::Error for CatalogError {}
