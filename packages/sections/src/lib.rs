//! # Pageforge Sections
//!
//! The section data model for the page editor.
//!
//! A page is an ordered list of typed **sections** (hero banners, sliders,
//! text blocks, feature grids, forms, ...). Every section is one variant of
//! the closed [`Section`] sum type, tagged on the wire by its `type` field.
//! Rendering order is the list order; nothing else constrains it.
//!
//! This crate owns:
//! - the [`Section`] union and its per-variant field structs
//! - nested sub-records ([`Card`], [`Slide`], [`FormField`], ...)
//! - the section registry ([`SectionKind`]) that builds default records
//! - [`PageProperties`] and their pure style derivation
//!
//! Editing state (dirty flags, mutation operations) lives in
//! `pageforge-editor`; persistence lives in `pageforge-store`.

mod card;
mod media;
mod page_properties;
mod registry;
mod section;

pub use card::{Card, FormField, GalleryImage, Slide, TextBackground, TextOutline, TextStyle};
pub use media::{MediaKind, MediaPlacement};
pub use page_properties::{PageProperties, PagePropertiesPatch, PageStyle};
pub use registry::{initial_sections, SectionKind};
pub use section::{
    AdvancedSliderSection, ContactFormSection, CtaSection, DividerSection, FeatureCardGridSection,
    FeatureItem, FeatureSection, GallerySection, HeadingSection, HeroResponsiveSection,
    HeroSection, InfoCardSection, MediaPlaceholderSection, MediaTextColumnsSection,
    MediaTextSection, PrivacySection, ProductPackageSection, QuoteSection, Section, SliderSection,
    TextSection, TextWithVideoSection, TwoColumnTextSection,
};
