use crate::domain::{Product, ProductDraft, ProductUpdate};

// Raw text values of the product form inputs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormFields {
    pub name: String,
    pub price: String,
    pub description: String,
}

// Product form state: the inputs, the product selected for editing and which
// buttons are shown.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductForm {
    pub fields: FormFields,
    // Id carried by the update button while a product is being edited.
    pub editing_id: Option<i64>,
    pub add_visible: bool,
    pub update_visible: bool,
    pub clear_visible: bool,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            fields: FormFields::default(),
            editing_id: None,
            add_visible: true,
            update_visible: true,
            clear_visible: false,
        }
    }
}

impl ProductForm {
    // Clear the inputs and leave edit mode.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    // Enter edit mode for `product`.
    pub fn load(&mut self, product: &Product) {
        self.fields = FormFields {
            name: product.name.clone(),
            price: product.price.to_string(),
            description: product.description.clone(),
        };
        self.editing_id = Some(product.id);
        self.add_visible = false;
        self.clear_visible = true;
    }

    pub fn draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.fields.name.clone(),
            price: parse_price(&self.fields.price),
            description: self.fields.description.clone(),
        }
    }

    // None when no product has been selected for editing.
    pub fn update_payload(&self) -> Option<ProductUpdate> {
        let id = self.editing_id?;
        Some(ProductUpdate {
            id,
            name: self.fields.name.clone(),
            price: parse_price(&self.fields.price),
            description: self.fields.description.clone(),
        })
    }
}

// Reads the leading number of the input and ignores whatever follows it, so
// "12.5 USD" is 12.5 and "12,50" is 12. No leading number, or an infinite
// one, yields None.
fn parse_price(raw: &str) -> Option<f64> {
    leading_number(raw.trim_start())
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

// Longest prefix shaped like `[sign] digits [. digits] [e [sign] digits]`.
fn leading_number(text: &str) -> &str {
    let bytes = text.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    let whole = count_digits(&bytes[end..]);
    end += whole;
    let mut mantissa = whole;
    if bytes.get(end) == Some(&b'.') {
        let fraction = count_digits(&bytes[end + 1..]);
        if whole + fraction > 0 {
            end += 1 + fraction;
            mantissa += fraction;
        }
    }
    if mantissa == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent_end = end + 1;
        if matches!(bytes.get(exponent_end), Some(b'+' | b'-')) {
            exponent_end += 1;
        }
        let exponent = count_digits(&bytes[exponent_end..]);
        if exponent > 0 {
            end = exponent_end + exponent;
        }
    }
    &text[..end]
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|byte| byte.is_ascii_digit()).count()
}
