//! # Page Properties
//!
//! Flat page-wide presentation settings, persisted as the
//! `page_properties` component. Every field is independent; the editor
//! shallow-merges partial updates via [`PagePropertiesPatch`].

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageProperties {
    pub background_color: String,
    pub background_opacity: f64,
    pub background_image: String,
    pub background_video: String,
    pub font_family: String,
    pub text_color: String,
    pub link_color: String,
    pub text_shadow: String,
    pub line_height: f64,
    pub letter_spacing: f64,
    pub max_width: String,
    pub is_full_width: bool,
    pub section_spacing: f64,
    pub page_title: String,
    pub meta_description: String,
    pub language: String,
}

impl Default for PageProperties {
    fn default() -> Self {
        Self {
            background_color: "#ffffff".to_string(),
            background_opacity: 1.0,
            background_image: String::new(),
            background_video: String::new(),
            font_family: "sans-serif".to_string(),
            text_color: "#000000".to_string(),
            link_color: "#2563eb".to_string(),
            text_shadow: "0 0 0 transparent".to_string(),
            line_height: 1.5,
            letter_spacing: 0.0,
            max_width: "1200px".to_string(),
            is_full_width: false,
            section_spacing: 2.0,
            page_title: "Home Page".to_string(),
            meta_description: String::new(),
            language: "en".to_string(),
        }
    }
}

/// All-optional mirror of [`PageProperties`] for shallow merges.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagePropertiesPatch {
    pub background_color: Option<String>,
    pub background_opacity: Option<f64>,
    pub background_image: Option<String>,
    pub background_video: Option<String>,
    pub font_family: Option<String>,
    pub text_color: Option<String>,
    pub link_color: Option<String>,
    pub text_shadow: Option<String>,
    pub line_height: Option<f64>,
    pub letter_spacing: Option<f64>,
    pub max_width: Option<String>,
    pub is_full_width: Option<bool>,
    pub section_spacing: Option<f64>,
    pub page_title: Option<String>,
    pub meta_description: Option<String>,
    pub language: Option<String>,
}

/// The renderable style record derived from [`PageProperties`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageStyle {
    pub background_color: String,
    pub color: String,
    pub font_family: String,
    pub line_height: f64,
    pub letter_spacing: String,
    pub text_shadow: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_repeat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_attachment: Option<String>,
}

impl PageProperties {
    /// Shallow-merge a partial update.
    pub fn apply(&mut self, patch: PagePropertiesPatch) {
        macro_rules! merge {
            ($($field:ident),+ $(,)?) => {
                $(if let Some(value) = patch.$field { self.$field = value; })+
            };
        }
        merge!(
            background_color,
            background_opacity,
            background_image,
            background_video,
            font_family,
            text_color,
            link_color,
            text_shadow,
            line_height,
            letter_spacing,
            max_width,
            is_full_width,
            section_spacing,
            page_title,
            meta_description,
            language,
        );
    }

    /// Pure derivation of the renderable style record. A non-empty
    /// background image adds cover sizing, centering, no-repeat, and a
    /// fixed attachment.
    pub fn styles(&self) -> PageStyle {
        let mut style = PageStyle {
            background_color: self.background_color.clone(),
            color: self.text_color.clone(),
            font_family: self.font_family.clone(),
            line_height: self.line_height,
            letter_spacing: format!("{}px", self.letter_spacing),
            text_shadow: self.text_shadow.clone(),
            background_image: None,
            background_size: None,
            background_position: None,
            background_repeat: None,
            background_attachment: None,
        };

        if !self.background_image.is_empty() {
            style.background_image = Some(format!("url({})", self.background_image));
            style.background_size = Some("cover".to_string());
            style.background_position = Some("center".to_string());
            style.background_repeat = Some("no-repeat".to_string());
            style.background_attachment = Some("fixed".to_string());
        }

        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_editor_initial_state() {
        let props = PageProperties::default();
        assert_eq!(props.background_color, "#ffffff");
        assert_eq!(props.font_family, "sans-serif");
        assert_eq!(props.link_color, "#2563eb");
        assert_eq!(props.line_height, 1.5);
        assert!(!props.is_full_width);
    }

    #[test]
    fn apply_merges_only_provided_fields() {
        let mut props = PageProperties::default();
        props.apply(PagePropertiesPatch {
            text_color: Some("#333333".to_string()),
            line_height: Some(1.8),
            ..Default::default()
        });
        assert_eq!(props.text_color, "#333333");
        assert_eq!(props.line_height, 1.8);
        assert_eq!(props.background_color, "#ffffff");
    }

    #[test]
    fn styles_without_background_image_omit_cover_flags() {
        let style = PageProperties::default().styles();
        assert!(style.background_image.is_none());
        assert!(style.background_attachment.is_none());
        assert_eq!(style.letter_spacing, "0px");
    }

    #[test]
    fn styles_with_background_image_derive_cover_flags() {
        let mut props = PageProperties::default();
        props.background_image = "/img/bg.jpg".to_string();
        let style = props.styles();
        assert_eq!(style.background_image.as_deref(), Some("url(/img/bg.jpg)"));
        assert_eq!(style.background_size.as_deref(), Some("cover"));
        assert_eq!(style.background_position.as_deref(), Some("center"));
        assert_eq!(style.background_repeat.as_deref(), Some("no-repeat"));
        assert_eq!(style.background_attachment.as_deref(), Some("fixed"));
    }

    #[test]
    fn deserializes_partial_payload_with_defaults() {
        let props: PageProperties =
            serde_json::from_str(r##"{"backgroundColor":"#000000"}"##).unwrap();
        assert_eq!(props.background_color, "#000000");
        assert_eq!(props.language, "en");
    }
}
