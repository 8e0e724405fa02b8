//! Inquiry forms and how each one is rendered into an email.
//!
//! Fields are free-form and optional. Strings are taken verbatim, numbers and
//! booleans keep their JSON spelling, anything missing renders empty. Values
//! are interpolated into the HTML as-is.

use std::fmt;

use email::domain::EmailRequest;
use prometheus_client_derive_encode::EncodeLabelValue;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum InquiryKind {
    Landing,
    Contact,
    Product,
}

impl InquiryKind {
    /// Tag used in the subject line.
    pub fn label(self) -> &'static str {
        match self {
            InquiryKind::Landing => "Landing",
            InquiryKind::Contact => "Contact",
            InquiryKind::Product => "Product",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            InquiryKind::Landing => "Client Inquiry (Landing Page)",
            InquiryKind::Contact => "Client Inquiry (Contact Form)",
            InquiryKind::Product => "Client Inquiry (Product Page)",
        }
    }
}

impl fmt::Display for InquiryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn free_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;

    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string()),
    })
}

/// Absent and `null` fields render as the empty string.
fn text(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or_default()
}

/// A submitted form that can be relayed as an email.
pub trait Inquiry {
    const KIND: InquiryKind;

    fn name(&self) -> &str;

    /// Labelled values in display order.
    fn fields(&self) -> Vec<(&'static str, &str)>;

    fn subject(&self) -> String {
        format!("New Inquiry ({}) from {}", Self::KIND.label(), self.name())
    }

    fn html(&self) -> String {
        let mut html = format!("\n<h2>{}</h2>\n", Self::KIND.heading());
        for (label, value) in self.fields() {
            html.push_str(&format!("<p><strong>{label}:</strong> {value}</p>\n"));
        }
        html
    }

    fn to_email(&self) -> EmailRequest {
        EmailRequest {
            subject: self.subject(),
            html: self.html(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct LandingRequest {
    #[serde(default, deserialize_with = "free_text")]
    #[schema(example = "Alice")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "free_text")]
    #[schema(example = "alice@example.com")]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "free_text")]
    #[schema(example = "Widget")]
    pub product: Option<String>,
}

impl Inquiry for LandingRequest {
    const KIND: InquiryKind = InquiryKind::Landing;

    fn name(&self) -> &str {
        text(&self.name)
    }

    fn fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Name", text(&self.name)),
            ("Email", text(&self.email)),
            ("Product name", text(&self.product)),
        ]
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ContactRequest {
    #[serde(default, deserialize_with = "free_text")]
    #[schema(example = "Alice")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "free_text")]
    #[schema(example = "alice@example.com")]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "free_text")]
    #[schema(example = "Widget")]
    pub product: Option<String>,

    #[serde(default, deserialize_with = "free_text")]
    #[schema(example = "Need 500 units shipped to Berlin by March")]
    pub requirements: Option<String>,
}

impl Inquiry for ContactRequest {
    const KIND: InquiryKind = InquiryKind::Contact;

    fn name(&self) -> &str {
        text(&self.name)
    }

    fn fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Name", text(&self.name)),
            ("Email", text(&self.email)),
            ("Product name", text(&self.product)),
            ("Requirements", text(&self.requirements)),
        ]
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ProductRequest {
    #[serde(default, deserialize_with = "free_text")]
    #[schema(example = "Alice")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "free_text")]
    #[schema(example = "alice@example.com")]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "free_text")]
    #[schema(example = "Widget")]
    pub product: Option<String>,

    #[serde(default, deserialize_with = "free_text")]
    #[schema(example = "12")]
    pub quantity: Option<String>,
}

impl Inquiry for ProductRequest {
    const KIND: InquiryKind = InquiryKind::Product;

    fn name(&self) -> &str {
        text(&self.name)
    }

    fn fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Name", text(&self.name)),
            ("Email", text(&self.email)),
            ("Product", text(&self.product)),
            ("Quantity", text(&self.quantity)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn landing_email_lists_every_field() {
        let req: LandingRequest = serde_json::from_value(json!({
            "name": "Alice",
            "email": "a@x.com",
            "product": "Widget",
        }))
        .unwrap();

        let email = req.to_email();

        assert_eq!(email.subject, "New Inquiry (Landing) from Alice");
        assert!(email.html.contains("<h2>Client Inquiry (Landing Page)</h2>"));
        assert!(email.html.contains("<p><strong>Name:</strong> Alice</p>"));
        assert!(email.html.contains("<p><strong>Email:</strong> a@x.com</p>"));
        assert!(email.html.contains("<p><strong>Product name:</strong> Widget</p>"));
    }

    #[test]
    fn contact_email_includes_requirements() {
        let req: ContactRequest = serde_json::from_value(json!({
            "name": "Bob",
            "email": "b@x.com",
            "product": "Gadget",
            "requirements": "Blue, please",
        }))
        .unwrap();

        let email = req.to_email();

        assert_eq!(email.subject, "New Inquiry (Contact) from Bob");
        assert!(email.html.contains("<h2>Client Inquiry (Contact Form)</h2>"));
        assert!(email.html.contains("<p><strong>Requirements:</strong> Blue, please</p>"));
    }

    #[test]
    fn product_quantity_accepts_numbers() {
        let req: ProductRequest = serde_json::from_value(json!({
            "name": "Carol",
            "product": "Widget",
            "quantity": 12,
        }))
        .unwrap();

        let email = req.to_email();

        assert_eq!(email.subject, "New Inquiry (Product) from Carol");
        assert!(email.html.contains("<h2>Client Inquiry (Product Page)</h2>"));
        assert!(email.html.contains("<p><strong>Product:</strong> Widget</p>"));
        assert!(email.html.contains("<p><strong>Quantity:</strong> 12</p>"));
    }

    #[test]
    fn missing_and_null_fields_render_empty() {
        let req: ProductRequest =
            serde_json::from_value(json!({ "email": null, "unknown": "ignored" })).unwrap();

        let email = req.to_email();

        assert_eq!(email.subject, "New Inquiry (Product) from ");
        assert!(email.html.contains("<p><strong>Email:</strong> </p>"));
        assert!(email.html.contains("<p><strong>Quantity:</strong> </p>"));
    }

    #[test]
    fn values_are_interpolated_verbatim() {
        let req = LandingRequest {
            name: Some("<b>Dan</b>".into()),
            ..Default::default()
        };

        assert!(req.html().contains("<p><strong>Name:</strong> <b>Dan</b></p>"));
    }

    #[test]
    fn subject_always_contains_the_name() {
        for name in ["Alice", "Zoë", "O'Brien", "  spaced  ", ""] {
            let body = json!({ "name": name });

            let landing: LandingRequest = serde_json::from_value(body.clone()).unwrap();
            let contact: ContactRequest = serde_json::from_value(body.clone()).unwrap();
            let product: ProductRequest = serde_json::from_value(body).unwrap();

            assert!(landing.subject().contains(name));
            assert!(contact.subject().contains(name));
            assert!(product.subject().contains(name));
        }
    }
}
