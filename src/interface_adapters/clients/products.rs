use crate::domain::{CatalogError, Product, ProductCatalog, ProductDraft, ProductUpdate};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    // ASP.NET problem details carry the summary in `title`.
    #[serde(alias = "title")]
    message: String,
}

// Thin wrapper around reqwest for the products REST API.
#[derive(Clone)]
pub struct ProductsClient {
    http: Client,
    base_url: Url,
}

impl ProductsClient {
    pub fn new(
        base_url: Url,
        timeout: Duration,
        accept_invalid_certs: bool,
    ) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .timeout(timeout)
            .danger_accept_invalid_certs(accept_invalid_certs)
            .build()?;
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // `{base}/api/products` or `{base}/api/products/{id}`, keeping any base path prefix.
    fn products_url(&self, id: Option<i64>) -> Result<Url, CatalogError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                CatalogError::Transport(format!("base url cannot hold a path: {}", self.base_url))
            })?;
            segments.pop_if_empty().extend(["api", "products"]);
            if let Some(id) = id {
                segments.push(&id.to_string());
            }
        }
        Ok(url)
    }
}

async fn upstream_error(response: Response) -> CatalogError {
    let status = response.status().as_u16();
    let message = response
        .json::<ErrorResponse>()
        .await
        .ok()
        .map(|payload| payload.message);
    CatalogError::Upstream { status, message }
}

// Any 2xx is accepted; the body is decoded into `T`.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, CatalogError> {
    if !response.status().is_success() {
        return Err(upstream_error(response).await);
    }

    response
        .json::<T>()
        .await
        .map_err(|err| CatalogError::Decode(err.to_string()))
}

// Only 204 counts as success for PUT and DELETE.
async fn expect_no_content(response: Response) -> Result<(), CatalogError> {
    let status = response.status();
    if status == StatusCode::NO_CONTENT {
        return Ok(());
    }
    if status.is_success() {
        return Err(CatalogError::UnexpectedStatus {
            status: status.as_u16(),
        });
    }
    Err(upstream_error(response).await)
}

fn transport(err: reqwest::Error) -> CatalogError {
    CatalogError::Transport(err.to_string())
}

#[async_trait]
impl ProductCatalog for ProductsClient {
    async fn list(&self) -> Result<Vec<Product>, CatalogError> {
        let url = self.products_url(None)?;
        let response = self.http.get(url).send().await.map_err(transport)?;
        read_json(response).await
    }

    async fn get(&self, id: i64) -> Result<Product, CatalogError> {
        let url = self.products_url(Some(id))?;
        let response = self.http.get(url).send().await.map_err(transport)?;
        read_json(response).await
    }

    async fn create(&self, draft: ProductDraft) -> Result<Product, CatalogError> {
        let url = self.products_url(None)?;
        let response = self
            .http
            .post(url)
            .json(&draft)
            .send()
            .await
            .map_err(transport)?;
        read_json(response).await
    }

    async fn update(&self, update: ProductUpdate) -> Result<(), CatalogError> {
        let url = self.products_url(Some(update.id))?;
        let response = self
            .http
            .put(url)
            .json(&update)
            .send()
            .await
            .map_err(transport)?;
        expect_no_content(response).await
    }

    async fn delete(&self, id: i64) -> Result<(), CatalogError> {
        let url = self.products_url(Some(id))?;
        let response = self.http.delete(url).send().await.map_err(transport)?;
        expect_no_content(response).await
    }
}
