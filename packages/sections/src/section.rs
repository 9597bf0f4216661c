//! # Section Union
//!
//! The closed, tag-discriminated union over every section variant a page
//! can contain. The wire representation is internally tagged on `type`
//! with the exact tag strings the persisted JSON uses (kebab-case for most,
//! two legacy camelCase tags).
//!
//! Shared contract across variants:
//! - `id`: opaque stable identifier, unique within a page's section list,
//!   assigned at creation and never reassigned
//! - `visible`: optional; an absent value means visible
//! - speech-enable flags: presentation-only pass-through
//!
//! Adding a variant here forces the registry and the renderer dispatch to
//! handle it: both match exhaustively.

use serde::{Deserialize, Serialize};

use crate::card::{Card, FormField, GalleryImage, Slide, TextStyle};
use crate::media::{MediaKind, MediaPlacement};

/// One renderable, independently editable block of page content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Section {
    #[serde(rename = "hero")]
    Hero(HeroSection),
    #[serde(rename = "slider")]
    Slider(SliderSection),
    #[serde(rename = "advanced-slider")]
    AdvancedSlider(AdvancedSliderSection),
    #[serde(rename = "media-text-left")]
    MediaTextLeft(MediaTextSection),
    #[serde(rename = "media-text-right")]
    MediaTextRight(MediaTextSection),
    #[serde(rename = "feature")]
    Feature(FeatureSection),
    #[serde(rename = "cta")]
    Cta(CtaSection),
    #[serde(rename = "feature-card-grid")]
    FeatureCardGrid(FeatureCardGridSection),
    #[serde(rename = "info-card")]
    InfoCard(InfoCardSection),
    #[serde(rename = "divider")]
    Divider(DividerSection),
    #[serde(rename = "contact-form")]
    ContactForm(ContactFormSection),
    #[serde(rename = "privacy")]
    Privacy(PrivacySection),
    #[serde(rename = "custom-code")]
    CustomCode(CustomCodeSection),
    #[serde(rename = "hero-responsive")]
    HeroResponsive(HeroResponsiveSection),
    #[serde(rename = "text")]
    Text(TextSection),
    #[serde(rename = "media-placeholder")]
    MediaPlaceholder(MediaPlaceholderSection),
    #[serde(rename = "mediaTextColumns")]
    MediaTextColumns(MediaTextColumnsSection),
    #[serde(rename = "twoColumnText")]
    TwoColumnText(TwoColumnTextSection),
    #[serde(rename = "heading")]
    Heading(HeadingSection),
    #[serde(rename = "quote")]
    Quote(QuoteSection),
    #[serde(rename = "gallery")]
    Gallery(GallerySection),
    #[serde(rename = "text-with-video-left")]
    TextWithVideoLeft(TextWithVideoSection),
    #[serde(rename = "text-with-video-right")]
    TextWithVideoRight(TextWithVideoSection),
    #[serde(rename = "product-package-left")]
    ProductPackageLeft(ProductPackageSection),
    #[serde(rename = "product-package-right")]
    ProductPackageRight(ProductPackageSection),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSection {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default)]
    pub enable_speech: bool,
    #[serde(default)]
    pub enable_title_speech: bool,
    #[serde(default)]
    pub enable_description_speech: bool,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub background_image: String,
    #[serde(default)]
    pub background_media: String,
    #[serde(default)]
    pub media_type: MediaKind,
    pub height: String,
    pub width: String,
    pub object_fit: String,
    pub object_position: String,
    pub max_height: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderSection {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default)]
    pub enable_speech: bool,
    #[serde(default)]
    pub enable_title_speech: bool,
    #[serde(default)]
    pub enable_description_speech: bool,
    #[serde(default)]
    pub slides: Vec<Slide>,
    pub autoplay: bool,
    pub autoplay_delay: u32,
    pub show_navigation: bool,
    pub show_pagination: bool,
    pub effect: String,
    #[serde(rename = "loop")]
    pub loop_slides: bool,
    pub height: String,
    pub width: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedSliderSection {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default)]
    pub enable_speech: bool,
    #[serde(default)]
    pub slides: Vec<Slide>,
    pub autoplay: bool,
    pub autoplay_delay: u32,
    pub show_navigation: bool,
    pub show_pagination: bool,
    pub effect: String,
    #[serde(rename = "loop")]
    pub loop_slides: bool,
    pub height: String,
    pub width: String,
}

/// Shared by the `media-text-left` and `media-text-right` tags.
///
/// `media_position` may be absent in old persisted rows; the editor
/// backfills it from the tag on hydration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaTextSection {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default)]
    pub enable_speech: bool,
    #[serde(default)]
    pub enable_title_speech: bool,
    #[serde(default)]
    pub enable_description_speech: bool,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub media_url: String,
    #[serde(default)]
    pub media_type: MediaKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_position: Option<MediaPlacement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureItem {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureSection {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default)]
    pub enable_speech: bool,
    #[serde(default)]
    pub enable_title_speech: bool,
    #[serde(default)]
    pub enable_description_speech: bool,
    #[serde(default)]
    pub enable_feature_speech: bool,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub features: Vec<FeatureItem>,
    pub layout: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaSection {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default)]
    pub enable_speech: bool,
    #[serde(default)]
    pub enable_title_speech: bool,
    #[serde(default)]
    pub enable_description_speech: bool,
    pub title: String,
    pub description: String,
    pub button_text: String,
    pub button_url: String,
    pub background_color: String,
    pub text_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureCardGridSection {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default)]
    pub enable_speech: bool,
    pub num_cards: u32,
    pub cards: Vec<Card>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoCardSection {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default)]
    pub enable_speech: bool,
    #[serde(default)]
    pub background_url: String,
    pub num_cards: u32,
    pub cards: Vec<Card>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DividerSection {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default)]
    pub enable_speech: bool,
    pub style: String,
    pub color: String,
    pub thickness: String,
    pub width: String,
    pub margin: String,
    pub alignment: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFormSection {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    pub form_action: String,
    pub form_method: String,
    pub fields: Vec<FormField>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivacySection {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default)]
    pub enable_speech: bool,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomCodeSection {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default)]
    pub enable_speech: bool,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroResponsiveSection {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default)]
    pub enable_speech: bool,
    #[serde(default)]
    pub enable_title_speech: bool,
    #[serde(default)]
    pub enable_description_speech: bool,
    pub title: String,
    pub description: String,
    pub button_text: String,
    pub button_url: String,
    #[serde(default)]
    pub background_image: String,
    #[serde(default)]
    pub background_media: String,
    #[serde(default)]
    pub media_type: MediaKind,
    pub overlay_color: String,
    pub text_color: String,
    pub height: String,
    pub object_fit: String,
    pub object_position: String,
    pub text_vertical_align: String,
    pub text_horizontal_align: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_text_style: Option<TextStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_text_style: Option<TextStyle>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextSection {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default)]
    pub enable_speech: bool,
    pub content: String,
    pub alignment: String,
    pub font_size: String,
    pub font_color: String,
    pub background_color: String,
    pub padding: String,
    pub margin: String,
    #[serde(default)]
    pub media_url: String,
    #[serde(default)]
    pub media_type: MediaKind,
    pub media_position: MediaPlacement,
    pub media_width: String,
    pub media_height: String,
    #[serde(default)]
    pub text_style: TextStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaPlaceholderSection {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default)]
    pub enable_speech: bool,
    pub cards: Vec<Card>,
    pub visible_count: u32,
    pub current_page: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaTextColumnsSection {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default)]
    pub enable_speech: bool,
    #[serde(default)]
    pub enable_title_speech: bool,
    #[serde(default)]
    pub enable_description_speech: bool,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub media_url: String,
    #[serde(default)]
    pub media_type: MediaKind,
    pub media_position: MediaPlacement,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwoColumnTextSection {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default)]
    pub enable_speech: bool,
    #[serde(default)]
    pub enable_left_column_speech: bool,
    #[serde(default)]
    pub enable_right_column_speech: bool,
    pub left_column: String,
    pub right_column: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadingSection {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default)]
    pub enable_speech: bool,
    pub text: String,
    pub level: String,
    pub alignment: String,
    pub font_size: String,
    pub font_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSection {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default)]
    pub enable_speech: bool,
    pub text: String,
    pub author: String,
    pub alignment: String,
    pub font_size: String,
    pub font_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GallerySection {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default)]
    pub enable_speech: bool,
    #[serde(default)]
    pub enable_title_speech: bool,
    #[serde(default)]
    pub enable_description_speech: bool,
    #[serde(default)]
    pub enable_image_speech: bool,
    pub title: String,
    pub description: String,
    pub images: Vec<GalleryImage>,
    pub layout: String,
}

/// Shared by the `text-with-video-left` and `text-with-video-right` tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextWithVideoSection {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default)]
    pub enable_speech: bool,
    pub title: String,
    pub tagline: String,
    pub description: String,
    pub video_id: String,
    pub button_text: String,
    pub horizontal_padding: u32,
    pub vertical_padding: u32,
}

/// Shared by the `product-package-left` and `product-package-right` tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPackageSection {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default)]
    pub enable_speech: bool,
    pub name: String,
    pub subtitle: String,
    pub description: String,
    pub badge: String,
    pub features: Vec<String>,
    pub perfect_for: Vec<String>,
    pub color: String,
    pub image_src: String,
    pub image_alt: String,
    pub horizontal_padding: u32,
    pub vertical_padding: u32,
    pub learn_more_text: String,
    pub learn_more_url: String,
}

impl Section {
    /// The registry kind of this record.
    pub fn kind(&self) -> crate::registry::SectionKind {
        crate::registry::SectionKind::of(self)
    }

    /// Stable identifier, unique within a page's section list.
    pub fn id(&self) -> &str {
        match self {
            Section::Hero(s) => &s.id,
            Section::Slider(s) => &s.id,
            Section::AdvancedSlider(s) => &s.id,
            Section::MediaTextLeft(s) | Section::MediaTextRight(s) => &s.id,
            Section::Feature(s) => &s.id,
            Section::Cta(s) => &s.id,
            Section::FeatureCardGrid(s) => &s.id,
            Section::InfoCard(s) => &s.id,
            Section::Divider(s) => &s.id,
            Section::ContactForm(s) => &s.id,
            Section::Privacy(s) => &s.id,
            Section::CustomCode(s) => &s.id,
            Section::HeroResponsive(s) => &s.id,
            Section::Text(s) => &s.id,
            Section::MediaPlaceholder(s) => &s.id,
            Section::MediaTextColumns(s) => &s.id,
            Section::TwoColumnText(s) => &s.id,
            Section::Heading(s) => &s.id,
            Section::Quote(s) => &s.id,
            Section::Gallery(s) => &s.id,
            Section::TextWithVideoLeft(s) | Section::TextWithVideoRight(s) => &s.id,
            Section::ProductPackageLeft(s) | Section::ProductPackageRight(s) => &s.id,
        }
    }

    pub fn set_id(&mut self, id: String) {
        match self {
            Section::Hero(s) => s.id = id,
            Section::Slider(s) => s.id = id,
            Section::AdvancedSlider(s) => s.id = id,
            Section::MediaTextLeft(s) | Section::MediaTextRight(s) => s.id = id,
            Section::Feature(s) => s.id = id,
            Section::Cta(s) => s.id = id,
            Section::FeatureCardGrid(s) => s.id = id,
            Section::InfoCard(s) => s.id = id,
            Section::Divider(s) => s.id = id,
            Section::ContactForm(s) => s.id = id,
            Section::Privacy(s) => s.id = id,
            Section::CustomCode(s) => s.id = id,
            Section::HeroResponsive(s) => s.id = id,
            Section::Text(s) => s.id = id,
            Section::MediaPlaceholder(s) => s.id = id,
            Section::MediaTextColumns(s) => s.id = id,
            Section::TwoColumnText(s) => s.id = id,
            Section::Heading(s) => s.id = id,
            Section::Quote(s) => s.id = id,
            Section::Gallery(s) => s.id = id,
            Section::TextWithVideoLeft(s) | Section::TextWithVideoRight(s) => s.id = id,
            Section::ProductPackageLeft(s) | Section::ProductPackageRight(s) => s.id = id,
        }
    }

    /// Effective visibility: an absent flag means visible.
    pub fn is_visible(&self) -> bool {
        self.visible_flag().unwrap_or(true)
    }

    fn visible_flag(&self) -> Option<bool> {
        match self {
            Section::Hero(s) => s.visible,
            Section::Slider(s) => s.visible,
            Section::AdvancedSlider(s) => s.visible,
            Section::MediaTextLeft(s) | Section::MediaTextRight(s) => s.visible,
            Section::Feature(s) => s.visible,
            Section::Cta(s) => s.visible,
            Section::FeatureCardGrid(s) => s.visible,
            Section::InfoCard(s) => s.visible,
            Section::Divider(s) => s.visible,
            Section::ContactForm(s) => s.visible,
            Section::Privacy(s) => s.visible,
            Section::CustomCode(s) => s.visible,
            Section::HeroResponsive(s) => s.visible,
            Section::Text(s) => s.visible,
            Section::MediaPlaceholder(s) => s.visible,
            Section::MediaTextColumns(s) => s.visible,
            Section::TwoColumnText(s) => s.visible,
            Section::Heading(s) => s.visible,
            Section::Quote(s) => s.visible,
            Section::Gallery(s) => s.visible,
            Section::TextWithVideoLeft(s) | Section::TextWithVideoRight(s) => s.visible,
            Section::ProductPackageLeft(s) | Section::ProductPackageRight(s) => s.visible,
        }
    }

    pub fn set_visible(&mut self, visible: bool) {
        let flag = Some(visible);
        match self {
            Section::Hero(s) => s.visible = flag,
            Section::Slider(s) => s.visible = flag,
            Section::AdvancedSlider(s) => s.visible = flag,
            Section::MediaTextLeft(s) | Section::MediaTextRight(s) => s.visible = flag,
            Section::Feature(s) => s.visible = flag,
            Section::Cta(s) => s.visible = flag,
            Section::FeatureCardGrid(s) => s.visible = flag,
            Section::InfoCard(s) => s.visible = flag,
            Section::Divider(s) => s.visible = flag,
            Section::ContactForm(s) => s.visible = flag,
            Section::Privacy(s) => s.visible = flag,
            Section::CustomCode(s) => s.visible = flag,
            Section::HeroResponsive(s) => s.visible = flag,
            Section::Text(s) => s.visible = flag,
            Section::MediaPlaceholder(s) => s.visible = flag,
            Section::MediaTextColumns(s) => s.visible = flag,
            Section::TwoColumnText(s) => s.visible = flag,
            Section::Heading(s) => s.visible = flag,
            Section::Quote(s) => s.visible = flag,
            Section::Gallery(s) => s.visible = flag,
            Section::TextWithVideoLeft(s) | Section::TextWithVideoRight(s) => s.visible = flag,
            Section::ProductPackageLeft(s) | Section::ProductPackageRight(s) => s.visible = flag,
        }
    }

    /// The cards of a card-bearing variant, if any.
    pub fn cards(&self) -> Option<&[Card]> {
        match self {
            Section::FeatureCardGrid(s) => Some(&s.cards),
            Section::InfoCard(s) => Some(&s.cards),
            Section::MediaPlaceholder(s) => Some(&s.cards),
            _ => None,
        }
    }

    pub fn cards_mut(&mut self) -> Option<&mut Vec<Card>> {
        match self {
            Section::FeatureCardGrid(s) => Some(&mut s.cards),
            Section::InfoCard(s) => Some(&mut s.cards),
            Section::MediaPlaceholder(s) => Some(&mut s.cards),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::SectionKind;

    #[test]
    fn tag_strings_match_wire_format() {
        let section = SectionKind::MediaTextLeft.default_section("s1".to_string());
        let json = serde_json::to_value(&section).unwrap();
        assert_eq!(json["type"], "media-text-left");

        let section = SectionKind::MediaTextColumns.default_section("s2".to_string());
        let json = serde_json::to_value(&section).unwrap();
        assert_eq!(json["type"], "mediaTextColumns");
    }

    #[test]
    fn slider_loop_field_uses_reserved_wire_name() {
        let section = SectionKind::Slider.default_section("s1".to_string());
        let json = serde_json::to_value(&section).unwrap();
        assert_eq!(json["loop"], false);
        assert_eq!(json["autoplayDelay"], 3000);
    }

    #[test]
    fn visibility_defaults_to_true_when_absent() {
        let json = serde_json::json!({
            "id": "s1",
            "type": "privacy",
            "content": "<p>Policy</p>",
        });
        let section: Section = serde_json::from_value(json).unwrap();
        assert!(section.is_visible());
    }

    #[test]
    fn round_trips_through_json() {
        let original = SectionKind::FeatureCardGrid.default_section("grid-1".to_string());
        let json = serde_json::to_string(&original).unwrap();
        let restored: Section = serde_json::from_str(&json).unwrap();
        assert_eq!(original, restored);
    }
}
