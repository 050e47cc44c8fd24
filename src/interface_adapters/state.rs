use crate::domain::ProductCatalog;
use crate::use_cases::ProductPage;
use axum::http::{HeaderMap, HeaderValue, header};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "products_session";

// Shared application state for the HTTP handlers.
// Every browser session owns its own page; the catalog client is shared.
pub struct AppState {
    catalog: Arc<dyn ProductCatalog>,
    pages: Mutex<HashMap<String, Arc<Mutex<ProductPage>>>>,
}

// The page of one browser session.
// The page mutex serializes that session's actions, so overlapping clicks run
// one after another.
pub struct Session {
    pub id: String,
    pub page: Arc<Mutex<ProductPage>>,
    pub is_new: bool,
}

impl AppState {
    pub fn new(catalog: Arc<dyn ProductCatalog>) -> Self {
        Self {
            catalog,
            pages: Mutex::new(HashMap::new()),
        }
    }

    // Page for the session named by the request cookie. Unknown or missing ids
    // start a new session, whose list is loaded before it is first shown.
    pub async fn session(&self, headers: &HeaderMap) -> Session {
        if let Some(id) = session_id(headers) {
            if let Some(page) = self.pages.lock().await.get(id) {
                return Session {
                    id: id.to_string(),
                    page: page.clone(),
                    is_new: false,
                };
            }
        }

        let mut page = ProductPage::new(self.catalog.clone());
        page.refresh().await;

        let id = Uuid::new_v4().to_string();
        let page = Arc::new(Mutex::new(page));
        self.pages.lock().await.insert(id.clone(), page.clone());
        tracing::debug!(session_id = %id, "session started");

        Session {
            id,
            page,
            is_new: true,
        }
    }

    pub async fn session_count(&self) -> usize {
        self.pages.lock().await.len()
    }
}

impl Session {
    // `Set-Cookie` value for a session that the browser does not know yet.
    pub fn cookie(&self) -> Option<HeaderValue> {
        if !self.is_new {
            return None;
        }
        HeaderValue::from_str(&format!(
            "{SESSION_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax",
            self.id
        ))
        .ok()
    }
}

fn session_id(headers: &HeaderMap) -> Option<&str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|cookies| cookies.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, id)| id)
}
