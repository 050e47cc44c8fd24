use crate::interface_adapters::protocol::{ConfirmPayload, ProductFormPayload, RowClickPayload};
use crate::interface_adapters::render::render_page;
use crate::interface_adapters::state::{AppState, Session};
use axum::{
    Form,
    extract::State,
    http::{HeaderMap, header},
    response::{Html, IntoResponse, Redirect, Response},
};
use std::sync::Arc;

// Every form post lands back on the page, which shows the outcome.
// A session started by this request also hands its cookie to the browser.
fn respond(session: &Session, body: impl IntoResponse) -> Response {
    match session.cookie() {
        Some(cookie) => ([(header::SET_COOKIE, cookie)], body).into_response(),
        None => body.into_response(),
    }
}

fn back_to_page(session: &Session) -> Response {
    respond(session, Redirect::to("/"))
}

#[tracing::instrument(name = "product_page", skip_all)]
pub async fn page(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    let session = state.session(&headers).await;
    let view = session.page.lock().await.render_view();
    respond(&session, Html(render_page(&view)))
}

#[tracing::instrument(name = "add_product", skip_all)]
pub async fn add(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Form(form): Form<ProductFormPayload>,
) -> Response {
    let session = state.session(&headers).await;
    {
        let mut page = session.page.lock().await;
        page.set_fields(form.into());
        page.add().await;
    }
    back_to_page(&session)
}

#[tracing::instrument(name = "update_product", skip_all)]
pub async fn update(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Form(form): Form<ProductFormPayload>,
) -> Response {
    let session = state.session(&headers).await;
    {
        let mut page = session.page.lock().await;
        page.set_fields(form.into());
        page.update().await;
    }
    back_to_page(&session)
}

// Shared by the reset and clear buttons; both leave edit mode with empty inputs.
#[tracing::instrument(name = "reset_form", skip_all)]
pub async fn reset(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    let session = state.session(&headers).await;
    session.page.lock().await.reset_form();
    back_to_page(&session)
}

#[tracing::instrument(name = "row_click", skip_all, fields(click_target = %body.target))]
pub async fn click(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Form(body): Form<RowClickPayload>,
) -> Response {
    let click = body.row_click();
    let session = state.session(&headers).await;
    {
        let mut page = session.page.lock().await;
        page.set_fields(body.form.into());
        match click {
            Some(click) => page.row_click(click).await,
            None => tracing::warn!("ignoring click on unknown row target."),
        }
    }
    back_to_page(&session)
}

#[tracing::instrument(name = "confirm_delete", skip_all, fields(confirmed = body.is_confirmed()))]
pub async fn confirm(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Form(body): Form<ConfirmPayload>,
) -> Response {
    let confirmed = body.is_confirmed();
    let session = state.session(&headers).await;
    {
        let mut page = session.page.lock().await;
        page.set_fields(body.form.into());
        page.resolve_delete(confirmed).await;
    }
    back_to_page(&session)
}
