//! The `root_page_components` row model and typed component payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pageforge_sections::Section;

/// The named, independently saved/loaded payloads a page is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentType {
    Sections,
    Hero,
    Slider,
    HeroSlider,
    PageProperties,
    SectionOrder,
}

impl ComponentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentType::Sections => "sections",
            ComponentType::Hero => "hero",
            ComponentType::Slider => "slider",
            ComponentType::HeroSlider => "hero_slider",
            ComponentType::PageProperties => "page_properties",
            ComponentType::SectionOrder => "section_order",
        }
    }
}

/// One row of `root_page_components`.
///
/// `(page_slug, component_type)` is the unique conflict key for upserts;
/// `content` is an opaque JSON payload whose shape depends on the type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentRow {
    pub page_slug: String,
    pub component_type: ComponentType,
    pub content: serde_json::Value,
    pub is_active: bool,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
}

/// Wire shape of the `slider` component: the slider section bundled with
/// its page-level title and the title's visibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderComponent {
    pub slider: Section,
    pub slider_title: String,
    pub slider_title_visible: bool,
}

/// Wire shape of the `hero_slider` component.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSliderComponent {
    pub hero_slider: Section,
    pub hero_slider_title: String,
    pub hero_slider_title_visible: bool,
}

/// One entry of the legacy `section_order` component: a lightweight,
/// ordering-only record distinct from the full section list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionOrderEntry {
    #[serde(rename = "type")]
    pub kind: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_type_wire_names() {
        assert_eq!(ComponentType::HeroSlider.as_str(), "hero_slider");
        assert_eq!(
            serde_json::to_string(&ComponentType::PageProperties).unwrap(),
            "\"page_properties\""
        );
        let parsed: ComponentType = serde_json::from_str("\"section_order\"").unwrap();
        assert_eq!(parsed, ComponentType::SectionOrder);
    }

    #[test]
    fn section_order_entry_uses_type_key() {
        let entry = SectionOrderEntry { kind: "hero".to_string() };
        assert_eq!(serde_json::to_string(&entry).unwrap(), r#"{"type":"hero"}"#);
    }

    #[test]
    fn slider_component_round_trips() {
        use pageforge_sections::SectionKind;
        let component = SliderComponent {
            slider: SectionKind::Slider.default_section("home-slider".to_string()),
            slider_title: "Home Slider".to_string(),
            slider_title_visible: true,
        };
        let json = serde_json::to_value(&component).unwrap();
        assert_eq!(json["sliderTitle"], "Home Slider");
        assert_eq!(json["slider"]["type"], "slider");
        let restored: SliderComponent = serde_json::from_value(json).unwrap();
        assert_eq!(restored.slider_title_visible, true);
    }
}
