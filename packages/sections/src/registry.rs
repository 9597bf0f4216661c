//! # Section Registry
//!
//! The closed catalogue mapping a section type tag to a fully populated
//! default record. Used only at section-creation time; insertion into the
//! list is the caller's responsibility.

use crate::card::{Card, FormField, GalleryImage, Slide, TextStyle};
use crate::media::{MediaKind, MediaPlacement};
use crate::section::*;

/// Every section type tag the editor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Hero,
    Slider,
    AdvancedSlider,
    MediaTextLeft,
    MediaTextRight,
    Feature,
    Cta,
    FeatureCardGrid,
    InfoCard,
    Divider,
    ContactForm,
    Privacy,
    CustomCode,
    HeroResponsive,
    Text,
    MediaPlaceholder,
    MediaTextColumns,
    TwoColumnText,
    Heading,
    Quote,
    Gallery,
    TextWithVideoLeft,
    TextWithVideoRight,
    ProductPackageLeft,
    ProductPackageRight,
}

impl SectionKind {
    /// The wire tag string for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Hero => "hero",
            SectionKind::Slider => "slider",
            SectionKind::AdvancedSlider => "advanced-slider",
            SectionKind::MediaTextLeft => "media-text-left",
            SectionKind::MediaTextRight => "media-text-right",
            SectionKind::Feature => "feature",
            SectionKind::Cta => "cta",
            SectionKind::FeatureCardGrid => "feature-card-grid",
            SectionKind::InfoCard => "info-card",
            SectionKind::Divider => "divider",
            SectionKind::ContactForm => "contact-form",
            SectionKind::Privacy => "privacy",
            SectionKind::CustomCode => "custom-code",
            SectionKind::HeroResponsive => "hero-responsive",
            SectionKind::Text => "text",
            SectionKind::MediaPlaceholder => "media-placeholder",
            SectionKind::MediaTextColumns => "mediaTextColumns",
            SectionKind::TwoColumnText => "twoColumnText",
            SectionKind::Heading => "heading",
            SectionKind::Quote => "quote",
            SectionKind::Gallery => "gallery",
            SectionKind::TextWithVideoLeft => "text-with-video-left",
            SectionKind::TextWithVideoRight => "text-with-video-right",
            SectionKind::ProductPackageLeft => "product-package-left",
            SectionKind::ProductPackageRight => "product-package-right",
        }
    }

    /// Parse a wire tag. `None` for unrecognized tags; the caller decides
    /// whether that is an error or a logged no-op.
    pub fn parse(tag: &str) -> Option<Self> {
        Some(match tag {
            "hero" => SectionKind::Hero,
            "slider" => SectionKind::Slider,
            "advanced-slider" => SectionKind::AdvancedSlider,
            "media-text-left" => SectionKind::MediaTextLeft,
            "media-text-right" => SectionKind::MediaTextRight,
            "feature" => SectionKind::Feature,
            "cta" => SectionKind::Cta,
            "feature-card-grid" => SectionKind::FeatureCardGrid,
            "info-card" => SectionKind::InfoCard,
            "divider" => SectionKind::Divider,
            "contact-form" => SectionKind::ContactForm,
            "privacy" => SectionKind::Privacy,
            "custom-code" => SectionKind::CustomCode,
            "hero-responsive" => SectionKind::HeroResponsive,
            "text" => SectionKind::Text,
            "media-placeholder" => SectionKind::MediaPlaceholder,
            "mediaTextColumns" => SectionKind::MediaTextColumns,
            "twoColumnText" => SectionKind::TwoColumnText,
            "heading" => SectionKind::Heading,
            "quote" => SectionKind::Quote,
            "gallery" => SectionKind::Gallery,
            "text-with-video-left" => SectionKind::TextWithVideoLeft,
            "text-with-video-right" => SectionKind::TextWithVideoRight,
            "product-package-left" => SectionKind::ProductPackageLeft,
            "product-package-right" => SectionKind::ProductPackageRight,
            _ => return None,
        })
    }

    pub fn of(section: &Section) -> Self {
        match section {
            Section::Hero(_) => SectionKind::Hero,
            Section::Slider(_) => SectionKind::Slider,
            Section::AdvancedSlider(_) => SectionKind::AdvancedSlider,
            Section::MediaTextLeft(_) => SectionKind::MediaTextLeft,
            Section::MediaTextRight(_) => SectionKind::MediaTextRight,
            Section::Feature(_) => SectionKind::Feature,
            Section::Cta(_) => SectionKind::Cta,
            Section::FeatureCardGrid(_) => SectionKind::FeatureCardGrid,
            Section::InfoCard(_) => SectionKind::InfoCard,
            Section::Divider(_) => SectionKind::Divider,
            Section::ContactForm(_) => SectionKind::ContactForm,
            Section::Privacy(_) => SectionKind::Privacy,
            Section::CustomCode(_) => SectionKind::CustomCode,
            Section::HeroResponsive(_) => SectionKind::HeroResponsive,
            Section::Text(_) => SectionKind::Text,
            Section::MediaPlaceholder(_) => SectionKind::MediaPlaceholder,
            Section::MediaTextColumns(_) => SectionKind::MediaTextColumns,
            Section::TwoColumnText(_) => SectionKind::TwoColumnText,
            Section::Heading(_) => SectionKind::Heading,
            Section::Quote(_) => SectionKind::Quote,
            Section::Gallery(_) => SectionKind::Gallery,
            Section::TextWithVideoLeft(_) => SectionKind::TextWithVideoLeft,
            Section::TextWithVideoRight(_) => SectionKind::TextWithVideoRight,
            Section::ProductPackageLeft(_) => SectionKind::ProductPackageLeft,
            Section::ProductPackageRight(_) => SectionKind::ProductPackageRight,
        }
    }

    /// Build the default record for this kind with the given id.
    pub fn default_section(&self, id: String) -> Section {
        match self {
            SectionKind::Hero => Section::Hero(HeroSection {
                id,
                visible: Some(true),
                enable_speech: false,
                enable_title_speech: false,
                enable_description_speech: false,
                title: "New Hero Section".to_string(),
                description: String::new(),
                background_image: String::new(),
                background_media: String::new(),
                media_type: MediaKind::Image,
                height: "h-[40vh] min-h-[300px] max-h-[400px]".to_string(),
                width: "w-full".to_string(),
                object_fit: "cover".to_string(),
                object_position: "center".to_string(),
                max_height: 400,
            }),
            SectionKind::Slider => Section::Slider(SliderSection {
                id,
                visible: Some(true),
                enable_speech: false,
                enable_title_speech: false,
                enable_description_speech: false,
                slides: Vec::new(),
                autoplay: false,
                autoplay_delay: 3000,
                show_navigation: true,
                show_pagination: true,
                effect: "slide".to_string(),
                loop_slides: false,
                height: "400px".to_string(),
                width: "100%".to_string(),
            }),
            SectionKind::AdvancedSlider => Section::AdvancedSlider(AdvancedSliderSection {
                id,
                visible: Some(true),
                enable_speech: false,
                slides: Vec::new(),
                autoplay: true,
                autoplay_delay: 5000,
                show_navigation: true,
                show_pagination: true,
                effect: "fade".to_string(),
                loop_slides: true,
                height: "500px".to_string(),
                width: "100%".to_string(),
            }),
            SectionKind::MediaTextLeft | SectionKind::MediaTextRight => {
                let body = MediaTextSection {
                    id,
                    visible: Some(true),
                    enable_speech: false,
                    enable_title_speech: false,
                    enable_description_speech: false,
                    title: "New Media Text Section".to_string(),
                    description: String::new(),
                    media_url: String::new(),
                    media_type: MediaKind::Image,
                    media_position: None,
                };
                if matches!(self, SectionKind::MediaTextLeft) {
                    Section::MediaTextLeft(body)
                } else {
                    Section::MediaTextRight(body)
                }
            }
            SectionKind::Feature => Section::Feature(FeatureSection {
                id,
                visible: Some(true),
                enable_speech: false,
                enable_title_speech: false,
                enable_description_speech: false,
                enable_feature_speech: false,
                title: "New Feature Section".to_string(),
                description: String::new(),
                features: Vec::new(),
                layout: "grid".to_string(),
            }),
            SectionKind::Cta => Section::Cta(CtaSection {
                id,
                visible: Some(true),
                enable_speech: false,
                enable_title_speech: false,
                enable_description_speech: false,
                title: "New CTA Section".to_string(),
                description: String::new(),
                button_text: "Click Me".to_string(),
                button_url: "/".to_string(),
                background_color: "#ffffff".to_string(),
                text_color: "#000000".to_string(),
            }),
            SectionKind::FeatureCardGrid => Section::FeatureCardGrid(FeatureCardGridSection {
                id,
                visible: Some(true),
                enable_speech: false,
                num_cards: 3,
                cards: vec![
                    Card::with_cta(
                        "card-1",
                        "Public Page Editor",
                        "Public Page Editor.",
                        "View Public Page Editor",
                        "/public_page_editor",
                    ),
                    Card::with_cta(
                        "card-2",
                        "Members Page Editor",
                        "Members Page Editor.",
                        "View Members Page Editor",
                        "/members_page_editor",
                    ),
                    Card::with_cta(
                        "card-3",
                        "Admin Page Editor",
                        "Full Admin Page Editor.",
                        "View Admin Page Editor",
                        "/admin_example",
                    ),
                ],
            }),
            SectionKind::InfoCard => Section::InfoCard(InfoCardSection {
                id,
                visible: Some(true),
                enable_speech: false,
                background_url: String::new(),
                num_cards: 3,
                cards: vec![Card {
                    text_style: Some(TextStyle::default()),
                    ..Card::with_cta(
                        "card-1",
                        "Card Title",
                        "Card description goes here",
                        "Learn More",
                        "#",
                    )
                }],
            }),
            SectionKind::Divider => Section::Divider(DividerSection {
                id,
                visible: Some(true),
                enable_speech: false,
                style: "solid".to_string(),
                color: "#e5e7eb".to_string(),
                thickness: "2px".to_string(),
                width: "100%".to_string(),
                margin: "2rem 0".to_string(),
                alignment: "center".to_string(),
            }),
            SectionKind::ContactForm => Section::ContactForm(ContactFormSection {
                id,
                visible: None,
                form_action: "/api/contact".to_string(),
                form_method: "POST".to_string(),
                fields: vec![
                    FormField::new("name", "Name", "text", "Your name"),
                    FormField::new("email", "Email", "email", "you@example.com"),
                    FormField::new("message", "Message", "textarea", "Your message"),
                ],
            }),
            SectionKind::Privacy => Section::Privacy(PrivacySection {
                id,
                visible: Some(true),
                enable_speech: false,
                content: concat!(
                    "<p>This is a summary of our privacy policy. We respect your ",
                    "privacy and are committed to protecting your personal data. ",
                    "We do not sell or share your information with third parties ",
                    "except as required by law or to provide our services. For the ",
                    "full policy, please see our <a href=\"/privacy\">Privacy ",
                    "Policy</a> page.</p>"
                )
                .to_string(),
            }),
            SectionKind::CustomCode => Section::CustomCode(CustomCodeSection {
                id,
                visible: Some(true),
                enable_speech: false,
                code: String::new(),
            }),
            SectionKind::HeroResponsive => Section::HeroResponsive(HeroResponsiveSection {
                id,
                visible: Some(true),
                enable_speech: false,
                enable_title_speech: false,
                enable_description_speech: false,
                title: "Responsive Hero Section".to_string(),
                description: String::new(),
                button_text: String::new(),
                button_url: String::new(),
                background_image: String::new(),
                background_media: String::new(),
                media_type: MediaKind::Image,
                overlay_color: "rgba(0,0,0,0.5)".to_string(),
                text_color: "#ffffff".to_string(),
                height: "50vh".to_string(),
                object_fit: "cover".to_string(),
                object_position: "center".to_string(),
                text_vertical_align: "middle".to_string(),
                text_horizontal_align: "center".to_string(),
                title_text_style: None,
                description_text_style: None,
            }),
            SectionKind::Text => Section::Text(TextSection {
                id,
                visible: Some(true),
                enable_speech: false,
                content: "Enter your text content here...".to_string(),
                alignment: "left".to_string(),
                font_size: "1rem".to_string(),
                font_color: "#222".to_string(),
                background_color: "#fff".to_string(),
                padding: "1rem".to_string(),
                margin: "1rem 0".to_string(),
                media_url: String::new(),
                media_type: MediaKind::Image,
                media_position: MediaPlacement::Top,
                media_width: "100%".to_string(),
                media_height: "auto".to_string(),
                text_style: TextStyle::default(),
            }),
            SectionKind::MediaPlaceholder => Section::MediaPlaceholder(MediaPlaceholderSection {
                id,
                visible: Some(true),
                enable_speech: false,
                cards: vec![Card::media_only(
                    "card-1",
                    "Sample Media Card",
                    "This is a sample media card. You can add more cards and customize them.",
                )],
                visible_count: 3,
                current_page: 0,
            }),
            SectionKind::MediaTextColumns => Section::MediaTextColumns(MediaTextColumnsSection {
                id,
                visible: Some(true),
                enable_speech: false,
                enable_title_speech: false,
                enable_description_speech: false,
                title: "New Media Text Columns".to_string(),
                description: String::new(),
                media_url: String::new(),
                media_type: MediaKind::Image,
                media_position: MediaPlacement::Left,
            }),
            SectionKind::TwoColumnText => Section::TwoColumnText(TwoColumnTextSection {
                id,
                visible: Some(true),
                enable_speech: false,
                enable_left_column_speech: false,
                enable_right_column_speech: false,
                left_column: String::new(),
                right_column: String::new(),
            }),
            SectionKind::Heading => Section::Heading(HeadingSection {
                id,
                visible: Some(true),
                enable_speech: false,
                text: "New Heading".to_string(),
                level: "h2".to_string(),
                alignment: "left".to_string(),
                font_size: "2rem".to_string(),
                font_color: "#222".to_string(),
            }),
            SectionKind::Quote => Section::Quote(QuoteSection {
                id,
                visible: Some(true),
                enable_speech: false,
                text: "A quote goes here".to_string(),
                author: String::new(),
                alignment: "left".to_string(),
                font_size: "1.25rem".to_string(),
                font_color: "#222".to_string(),
            }),
            SectionKind::Gallery => Section::Gallery(GallerySection {
                id,
                visible: Some(true),
                enable_speech: false,
                enable_title_speech: false,
                enable_description_speech: false,
                enable_image_speech: false,
                title: "New Gallery".to_string(),
                description: String::new(),
                images: vec![
                    GalleryImage { url: String::new(), alt: "Image 1".to_string() },
                    GalleryImage { url: String::new(), alt: "Image 2".to_string() },
                ],
                layout: "grid".to_string(),
            }),
            SectionKind::TextWithVideoLeft | SectionKind::TextWithVideoRight => {
                let body = TextWithVideoSection {
                    id,
                    visible: Some(true),
                    enable_speech: false,
                    title: "Text with Video".to_string(),
                    tagline: "Your Tagline".to_string(),
                    description: "Add a description for this section.".to_string(),
                    video_id: String::new(),
                    button_text: "Watch Tutorial".to_string(),
                    horizontal_padding: 0,
                    vertical_padding: 0,
                };
                if matches!(self, SectionKind::TextWithVideoLeft) {
                    Section::TextWithVideoLeft(body)
                } else {
                    Section::TextWithVideoRight(body)
                }
            }
            SectionKind::ProductPackageLeft | SectionKind::ProductPackageRight => {
                let body = ProductPackageSection {
                    id,
                    visible: Some(true),
                    enable_speech: false,
                    name: "Product Name".to_string(),
                    subtitle: "Product Subtitle".to_string(),
                    description: "Describe your product package here.".to_string(),
                    badge: String::new(),
                    features: vec!["Feature 1".to_string(), "Feature 2".to_string()],
                    perfect_for: vec!["Use 1".to_string(), "Use 2".to_string()],
                    color: "from-blue-500 to-blue-700".to_string(),
                    image_src: String::new(),
                    image_alt: String::new(),
                    horizontal_padding: 0,
                    vertical_padding: 0,
                    learn_more_text: "Learn More".to_string(),
                    learn_more_url: "#".to_string(),
                };
                if matches!(self, SectionKind::ProductPackageLeft) {
                    Section::ProductPackageLeft(body)
                } else {
                    Section::ProductPackageRight(body)
                }
            }
        }
    }
}

/// The starting section list for a page whose `sections` component has
/// never been persisted: a welcome hero, a CTA, and a three-card grid.
pub fn initial_sections() -> Vec<Section> {
    let mut hero = match SectionKind::Hero.default_section("hero".to_string()) {
        Section::Hero(h) => h,
        _ => unreachable!(),
    };
    hero.title = "Welcome to Our Amazing Editable Web Application".to_string();
    hero.description = "Our Editable Web Application is a Revolution in Website Creation.".to_string();

    let mut cta = match SectionKind::Cta.default_section("cta".to_string()) {
        Section::Cta(c) => c,
        _ => unreachable!(),
    };
    cta.title = "Ready to see more?".to_string();
    cta.description = "See how amazing the Fluxedita Website Creation App truly is.".to_string();
    cta.button_text = "See More...".to_string();
    cta.button_url = "/members".to_string();

    let grid = FeatureCardGridSection {
        id: "feature-card-grid".to_string(),
        visible: Some(true),
        enable_speech: false,
        num_cards: 3,
        cards: vec![
            Card::with_cta(
                "card-1",
                "Example Custom Page",
                "An example of a new custom page. Here you can add 'Editable New Section \
                 Components'. Allowing you to create any type of page you require.",
                "View Custom Page",
                "/",
            ),
            Card::with_cta(
                "card-2",
                "Example of Editable Section Components",
                "See a selection of the available section components, the admin user can \
                 edit live in the browser. Instantly making changes live.",
                "View Editable Components Page",
                "/",
            ),
            Card::with_cta(
                "card-3",
                "View our Demonstration Videos",
                "See our demonstration videos page. Showing how easy it is to get your own, \
                 privately managed website up in less than one hour.",
                "View Demo Videos",
                "/",
            ),
        ],
    };

    vec![
        Section::Hero(hero),
        Section::Cta(cta),
        Section::FeatureCardGrid(grid),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KINDS: [SectionKind; 25] = [
        SectionKind::Hero,
        SectionKind::Slider,
        SectionKind::AdvancedSlider,
        SectionKind::MediaTextLeft,
        SectionKind::MediaTextRight,
        SectionKind::Feature,
        SectionKind::Cta,
        SectionKind::FeatureCardGrid,
        SectionKind::InfoCard,
        SectionKind::Divider,
        SectionKind::ContactForm,
        SectionKind::Privacy,
        SectionKind::CustomCode,
        SectionKind::HeroResponsive,
        SectionKind::Text,
        SectionKind::MediaPlaceholder,
        SectionKind::MediaTextColumns,
        SectionKind::TwoColumnText,
        SectionKind::Heading,
        SectionKind::Quote,
        SectionKind::Gallery,
        SectionKind::TextWithVideoLeft,
        SectionKind::TextWithVideoRight,
        SectionKind::ProductPackageLeft,
        SectionKind::ProductPackageRight,
    ];

    #[test]
    fn every_kind_round_trips_through_its_tag() {
        for kind in ALL_KINDS {
            assert_eq!(SectionKind::parse(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn unknown_tag_fails_to_parse() {
        assert_eq!(SectionKind::parse("marquee"), None);
        assert_eq!(SectionKind::parse(""), None);
    }

    #[test]
    fn default_section_carries_requested_id_and_matching_tag() {
        for kind in ALL_KINDS {
            let section = kind.default_section("the-id".to_string());
            assert_eq!(section.id(), "the-id");
            assert_eq!(SectionKind::of(&section), kind);
        }
    }

    #[test]
    fn text_default_content_matches_editor_placeholder() {
        let section = SectionKind::Text.default_section("t".to_string());
        match section {
            Section::Text(text) => {
                assert_eq!(text.content, "Enter your text content here...");
            }
            other => panic!("expected text section, got {other:?}"),
        }
    }

    #[test]
    fn initial_sections_are_hero_cta_grid() {
        let sections = initial_sections();
        assert_eq!(sections.len(), 3);
        assert_eq!(SectionKind::of(&sections[0]), SectionKind::Hero);
        assert_eq!(SectionKind::of(&sections[1]), SectionKind::Cta);
        assert_eq!(SectionKind::of(&sections[2]), SectionKind::FeatureCardGrid);
        match &sections[2] {
            Section::FeatureCardGrid(grid) => assert_eq!(grid.cards.len(), 3),
            _ => unreachable!(),
        }
    }
}
