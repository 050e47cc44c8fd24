// HTML rendering for the products page.
// Markup is built with leptos `view!` and rendered on the server with
// `to_html`, which escapes text and attribute values. Values placed in
// scripts go through `script_json`.

use crate::domain::Product;
use crate::use_cases::{Confirmation, Notice, PageView, ProductForm, RowAction, RowClick};
use leptos::prelude::*;
use serde_json::json;

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";
const BOOTSTRAP_JS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/js/bootstrap.bundle.min.js";
const SWEETALERT_JS: &str = "https://cdn.jsdelivr.net/npm/sweetalert2@11";

// JSON literal that is safe inside a <script> element.
pub fn script_json(value: &serde_json::Value) -> String {
    value.to_string().replace("</", "<\\/")
}

/// Row button; posts the product form together with its `"<class>:<id>"` target.
#[component]
fn RowButton(
    product_id: i64,
    action: RowAction,
    style: &'static str,
    label: &'static str,
) -> impl IntoView {
    let target = RowClick { action, product_id }.target();
    let class = format!("btn {style} {}", action.class());
    let data_id = product_id.to_string();

    view! {
        <button
            type="submit"
            form="productForm"
            formaction="/products/click"
            name="target"
            value=target
            data-id=data_id
            class=class
        >
            {label}
        </button>
    }
}

/// One `#productList` row: id, name, price, description and the row buttons.
#[component]
fn ProductRow(product: Product) -> impl IntoView {
    let Product {
        id,
        name,
        price,
        description,
    } = product;

    view! {
        <tr>
            <td>{id}</td>
            <td>{name}</td>
            <td>{price}</td>
            <td>{description}</td>
            <td>
                <RowButton product_id=id action=RowAction::Delete style="btn-danger" label="Delete" />
                <RowButton product_id=id action=RowAction::Edit style="btn-warning" label="Edit" />
                <RowButton product_id=id action=RowAction::View style="btn-primary" label="View" />
            </td>
        </tr>
    }
}

pub fn render_row(product: &Product) -> String {
    let product = product.clone();
    view! { <ProductRow product=product /> }.to_html()
}

// Body of `#productList`.
pub fn render_list(products: &[Product]) -> String {
    product_rows(products.to_vec()).to_html()
}

fn product_rows(products: Vec<Product>) -> Vec<impl IntoView> {
    products
        .into_iter()
        .map(|product| view! { <ProductRow product=product /> })
        .collect()
}

fn display(visible: bool) -> &'static str {
    if visible {
        "display: inline-block"
    } else {
        "display: none"
    }
}

#[component]
fn ProductFormView(form: ProductForm) -> impl IntoView {
    let ProductForm {
        fields,
        editing_id,
        add_visible,
        update_visible,
        clear_visible,
    } = form;
    let update_id = editing_id.map(|id| id.to_string());
    let add_style = display(add_visible);
    let update_style = display(update_visible);
    let clear_style = display(clear_visible);

    view! {
        <form id="productForm" method="post" action="/products/add" class="mb-4">
            <input type="hidden" name="confirmed" value="" />
            <div class="mb-2">
                <label class="form-label">
                    "Name"
                    <input type="text" id="bookName" name="bookName" value=fields.name class="form-control" />
                </label>
            </div>
            <div class="mb-2">
                <label class="form-label">
                    "Price"
                    <input type="text" id="price" name="price" value=fields.price class="form-control" />
                </label>
            </div>
            <div class="mb-2">
                <label class="form-label">
                    "Description"
                    <textarea id="description" name="description" class="form-control">
                        {fields.description}
                    </textarea>
                </label>
            </div>
            <button type="submit" id="btnAdd" formaction="/products/add" class="btn btn-success" style=add_style>
                "Add"
            </button>
            <button type="submit" id="btnUpdate" formaction="/products/update" data-id=update_id class="btn btn-warning" style=update_style>
                "Update"
            </button>
            <button type="submit" id="btnReset" formaction="/products/reset" class="btn btn-secondary">
                "Reset"
            </button>
            <button type="submit" id="btnClear" formaction="/products/clear" class="btn btn-outline-secondary" style=clear_style>
                "Clear"
            </button>
        </form>
    }
}

/// Detail modal; the spans stay empty until a product is viewed.
#[component]
fn DetailModal(detail: Option<Product>) -> impl IntoView {
    let (name, code, price, description) = match detail {
        Some(product) => (
            product.name,
            product.id.to_string(),
            product.price.to_string(),
            product.description,
        ),
        None => Default::default(),
    };

    view! {
        <div class="modal fade" id="modalViewDetailInfo" tabindex="-1" aria-hidden="true">
            <div class="modal-dialog">
                <div class="modal-content">
                    <div class="modal-header">
                        <h5 class="modal-title">"Product details"</h5>
                        <button type="button" class="btn-close" data-bs-dismiss="modal" aria-label="Close"></button>
                    </div>
                    <div class="modal-body">
                        <p>"Name: " <span class="fullName">{name}</span></p>
                        <p>"Id: " <span class="code">{code}</span></p>
                        <p>"Price: " <span class="dateOfBirth">{price}</span></p>
                        <p>"Description: " <span class="gender">{description}</span></p>
                    </div>
                </div>
            </div>
        </div>
    }
}

fn notice_call(notice: &Notice) -> String {
    format!(
        "Swal.fire({}, {}, {})",
        script_json(&json!(notice.title)),
        script_json(&json!(notice.text)),
        script_json(&json!(notice.icon.as_str())),
    )
}

fn confirmation_call(confirmation: &Confirmation) -> String {
    let options = json!({
        "title": confirmation.title,
        "text": confirmation.text,
        "icon": confirmation.icon.as_str(),
        "showCancelButton": true,
        "confirmButtonText": confirmation.confirm_label,
    });
    format!(
        r#"Swal.fire({}).then((result) => {{
    const form = document.getElementById("productForm");
    form.elements["confirmed"].value = result.isConfirmed ? "true" : "false";
    form.action = "/products/confirm";
    form.submit();
  }})"#,
        script_json(&options)
    )
}

// Dialog script run once the page has loaded: notices in order, then the
// pending confirmation, then the detail modal. None when nothing is pending.
fn render_dialog_script(view: &PageView) -> Option<String> {
    let mut steps: Vec<String> = view.notices.iter().map(notice_call).collect();
    if let Some(confirmation) = &view.confirmation {
        steps.push(confirmation_call(confirmation));
    }
    if view.detail.is_some() {
        steps.push(
            r#"bootstrap.Modal.getOrCreateInstance(document.getElementById("modalViewDetailInfo")).show()"#
                .to_string(),
        );
    }
    if steps.is_empty() {
        return None;
    }

    let chain: String = steps
        .iter()
        .map(|step| format!("\n  .then(() => {step})"))
        .collect();
    Some(format!(
        "\ndocument.addEventListener(\"DOMContentLoaded\", () => {{\n  Promise.resolve(){chain};\n}});\n"
    ))
}

pub fn render_page(page: &PageView) -> String {
    let rows = product_rows(page.products.clone());
    let form = page.form.clone();
    let detail = page.detail.clone();
    let dialogs =
        render_dialog_script(page).map(|script| view! { <script inner_html=script></script> });

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>"Products"</title>
                <link rel="stylesheet" href=BOOTSTRAP_CSS />
            </head>
            <body>
                <div class="container py-4">
                    <h1 class="mb-4">"Products"</h1>
                    <ProductFormView form=form />
                    <table class="table table-striped">
                        <thead>
                            <tr>
                                <th>"Id"</th>
                                <th>"Name"</th>
                                <th>"Price"</th>
                                <th>"Description"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody id="productList">{rows}</tbody>
                    </table>
                </div>
                <DetailModal detail=detail />
                <script src=BOOTSTRAP_JS></script>
                <script src=SWEETALERT_JS></script>
                {dialogs}
            </body>
        </html>
    }
    .to_html()
}
