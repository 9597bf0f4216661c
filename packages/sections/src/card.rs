//! Nested sub-records carried by certain section variants.
//!
//! Card-bearing sections (feature card grids, info cards, media
//! placeholders) hold an ordered list of [`Card`] records, each with its
//! own stable id. Sliders hold [`Slide`]s, galleries hold
//! [`GalleryImage`]s, and contact forms hold [`FormField`]s.

use serde::{Deserialize, Serialize};

use crate::media::MediaKind;

/// One repeatable card inside a card-bearing section.
///
/// Call-to-action fields are optional: media placeholder cards carry only
/// media and copy, while grid cards carry the full CTA set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    #[serde(default)]
    pub media_url: String,
    #[serde(default)]
    pub media_type: MediaKind,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_open_in_new_tab: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_style: Option<TextStyle>,
}

impl Card {
    /// A blank card with CTA defaults, as created by the section registry.
    pub fn with_cta(id: &str, title: &str, description: &str, cta_text: &str, cta_url: &str) -> Self {
        Self {
            id: id.to_string(),
            media_url: String::new(),
            media_type: MediaKind::Image,
            title: title.to_string(),
            description: description.to_string(),
            cta_text: Some(cta_text.to_string()),
            cta_url: Some(cta_url.to_string()),
            cta_open_in_new_tab: Some(false),
            text_style: None,
        }
    }

    /// A media-only card (no CTA), as used by media placeholder sections.
    pub fn media_only(id: &str, title: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            media_url: String::new(),
            media_type: MediaKind::Image,
            title: title.to_string(),
            description: description.to_string(),
            cta_text: None,
            cta_url: None,
            cta_open_in_new_tab: None,
            text_style: None,
        }
    }
}

/// One slide of a slider section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    pub id: String,
    #[serde(default)]
    pub media_url: String,
    #[serde(default)]
    pub media_type: MediaKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_url: Option<String>,
}

/// One image of a gallery section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    pub url: String,
    pub alt: String,
}

/// One input field of a contact form section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
    pub id: String,
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: String,
    pub required: bool,
    pub placeholder: String,
}

impl FormField {
    pub fn new(id: &str, label: &str, field_type: &str, placeholder: &str) -> Self {
        Self {
            id: id.to_string(),
            name: id.to_string(),
            label: label.to_string(),
            field_type: field_type.to_string(),
            required: true,
            placeholder: placeholder.to_string(),
        }
    }
}

/// Per-text presentation overrides (all optional, pass-through).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_outline: Option<TextOutline>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_background: Option<TextBackground>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextOutline {
    pub color: String,
    pub width: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextBackground {
    pub color: String,
    pub opacity: f64,
    pub blur: String,
    pub border_radius: String,
    pub padding: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_serializes_camel_case() {
        let card = Card::with_cta("card-1", "Title", "Desc", "Go", "/go");
        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["mediaUrl"], "");
        assert_eq!(json["mediaType"], "image");
        assert_eq!(json["ctaOpenInNewTab"], false);
    }

    #[test]
    fn media_only_card_omits_cta_fields() {
        let card = Card::media_only("card-1", "Title", "Desc");
        let json = serde_json::to_value(&card).unwrap();
        assert!(json.get("ctaText").is_none());
        assert!(json.get("textStyle").is_none());
    }

    #[test]
    fn form_field_uses_type_wire_name() {
        let field = FormField::new("email", "Email", "email", "you@example.com");
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["type"], "email");
        assert_eq!(json["name"], "email");
    }
}
