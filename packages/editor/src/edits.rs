//! # Section Edits
//!
//! Typed field patches on section records.
//!
//! ## Design
//!
//! 1. **Intent-preserving**: each edit is one semantic field update, the
//!    unit a section editor emits on a live change
//! 2. **Validated**: an edit checks the target variant carries the fields
//!    it touches; a mismatch is rejected, never silently retained
//! 3. **Atomic**: an edit either fully applies or leaves the record
//!    untouched
//!
//! The edit set covers the fields the per-type section editors write:
//! titles and copy, body content, media references, CTA buttons, colors,
//! alignment, column text, slides, and card collections.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use pageforge_sections::{Card, MediaKind, Section, SectionKind, Slide};

/// One semantic field update against a section record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SectionEdit {
    /// Title of a titled section (hero, media-text, feature, cta, ...).
    SetTitle { title: String },

    /// Descriptive copy of a section that carries one.
    SetDescription { description: String },

    /// Body content of a text or privacy section.
    SetContent { content: String },

    /// Raw markup of a custom-code section.
    SetCode { code: String },

    /// Media reference of a media-bearing section. Hero variants store
    /// this as background media; the others as their inline media.
    SetMedia { url: String, kind: MediaKind },

    /// CTA button of a cta or responsive-hero section.
    SetButton { text: String, url: String },

    /// Background/text colors of a cta or text section.
    SetColors {
        background: Option<String>,
        text: Option<String>,
    },

    /// Text alignment of a text, heading, quote, or divider section.
    SetAlignment { alignment: String },

    /// Heading text and level.
    SetHeading { text: String, level: String },

    /// Quote text and attribution.
    SetQuote { text: String, author: String },

    /// Both columns of a two-column text section.
    SetColumns { left: String, right: String },

    /// Replace the card collection of a card-bearing section.
    SetCards { cards: Vec<Card> },

    /// Patch one card (by id) of a card-bearing section.
    PatchCard { card_id: String, patch: CardPatch },

    /// Replace the slides of a slider section.
    SetSlides { slides: Vec<Slide> },

    /// Toggle the section-level speech flag.
    SetSpeech { enabled: bool },
}

/// All-optional card update, shallow-merged onto the matching card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardPatch {
    pub media_url: Option<String>,
    pub media_type: Option<MediaKind>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub cta_text: Option<String>,
    pub cta_url: Option<String>,
    pub cta_open_in_new_tab: Option<bool>,
}

impl CardPatch {
    pub fn media(url: &str, kind: MediaKind) -> Self {
        Self {
            media_url: Some(url.to_string()),
            media_type: Some(kind),
            ..Self::default()
        }
    }

    fn apply(&self, card: &mut Card) {
        if let Some(url) = &self.media_url {
            card.media_url = url.clone();
        }
        if let Some(kind) = self.media_type {
            card.media_type = kind;
        }
        if let Some(title) = &self.title {
            card.title = title.clone();
        }
        if let Some(description) = &self.description {
            card.description = description.clone();
        }
        if let Some(text) = &self.cta_text {
            card.cta_text = Some(text.clone());
        }
        if let Some(url) = &self.cta_url {
            card.cta_url = Some(url.clone());
        }
        if let Some(new_tab) = self.cta_open_in_new_tab {
            card.cta_open_in_new_tab = Some(new_tab);
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditError {
    #[error("section index out of bounds: {0}")]
    IndexOutOfBounds(usize),

    #[error("edit {edit} does not apply to a {kind} section")]
    NotApplicable { edit: &'static str, kind: &'static str },

    #[error("card not found: {0}")]
    CardNotFound(String),
}

impl SectionEdit {
    fn name(&self) -> &'static str {
        match self {
            SectionEdit::SetTitle { .. } => "SetTitle",
            SectionEdit::SetDescription { .. } => "SetDescription",
            SectionEdit::SetContent { .. } => "SetContent",
            SectionEdit::SetCode { .. } => "SetCode",
            SectionEdit::SetMedia { .. } => "SetMedia",
            SectionEdit::SetButton { .. } => "SetButton",
            SectionEdit::SetColors { .. } => "SetColors",
            SectionEdit::SetAlignment { .. } => "SetAlignment",
            SectionEdit::SetHeading { .. } => "SetHeading",
            SectionEdit::SetQuote { .. } => "SetQuote",
            SectionEdit::SetColumns { .. } => "SetColumns",
            SectionEdit::SetCards { .. } => "SetCards",
            SectionEdit::PatchCard { .. } => "PatchCard",
            SectionEdit::SetSlides { .. } => "SetSlides",
            SectionEdit::SetSpeech { .. } => "SetSpeech",
        }
    }

    fn not_applicable(&self, section: &Section) -> EditError {
        EditError::NotApplicable {
            edit: self.name(),
            kind: SectionKind::of(section).as_str(),
        }
    }

    /// Apply this edit to a section record, rejecting it when the variant
    /// does not carry the touched fields.
    pub fn apply(&self, section: &mut Section) -> Result<(), EditError> {
        match self {
            SectionEdit::SetTitle { title } => self.apply_title(section, title),
            SectionEdit::SetDescription { description } => {
                self.apply_description(section, description)
            }
            SectionEdit::SetContent { content } => self.apply_content(section, content),
            SectionEdit::SetCode { code } => match section {
                Section::CustomCode(s) => {
                    s.code = code.clone();
                    Ok(())
                }
                _ => Err(self.not_applicable(section)),
            },
            SectionEdit::SetMedia { url, kind } => self.apply_media(section, url, *kind),
            SectionEdit::SetButton { text, url } => match section {
                Section::Cta(s) => {
                    s.button_text = text.clone();
                    s.button_url = url.clone();
                    Ok(())
                }
                Section::HeroResponsive(s) => {
                    s.button_text = text.clone();
                    s.button_url = url.clone();
                    Ok(())
                }
                _ => Err(self.not_applicable(section)),
            },
            SectionEdit::SetColors { background, text } => match section {
                Section::Cta(s) => {
                    if let Some(background) = background {
                        s.background_color = background.clone();
                    }
                    if let Some(text) = text {
                        s.text_color = text.clone();
                    }
                    Ok(())
                }
                Section::Text(s) => {
                    if let Some(background) = background {
                        s.background_color = background.clone();
                    }
                    if let Some(text) = text {
                        s.font_color = text.clone();
                    }
                    Ok(())
                }
                _ => Err(self.not_applicable(section)),
            },
            SectionEdit::SetAlignment { alignment } => match section {
                Section::Text(s) => {
                    s.alignment = alignment.clone();
                    Ok(())
                }
                Section::Heading(s) => {
                    s.alignment = alignment.clone();
                    Ok(())
                }
                Section::Quote(s) => {
                    s.alignment = alignment.clone();
                    Ok(())
                }
                Section::Divider(s) => {
                    s.alignment = alignment.clone();
                    Ok(())
                }
                _ => Err(self.not_applicable(section)),
            },
            SectionEdit::SetHeading { text, level } => match section {
                Section::Heading(s) => {
                    s.text = text.clone();
                    s.level = level.clone();
                    Ok(())
                }
                _ => Err(self.not_applicable(section)),
            },
            SectionEdit::SetQuote { text, author } => match section {
                Section::Quote(s) => {
                    s.text = text.clone();
                    s.author = author.clone();
                    Ok(())
                }
                _ => Err(self.not_applicable(section)),
            },
            SectionEdit::SetColumns { left, right } => match section {
                Section::TwoColumnText(s) => {
                    s.left_column = left.clone();
                    s.right_column = right.clone();
                    Ok(())
                }
                _ => Err(self.not_applicable(section)),
            },
            SectionEdit::SetCards { cards } => match section.cards_mut() {
                Some(existing) => {
                    *existing = cards.clone();
                    Ok(())
                }
                None => Err(self.not_applicable(section)),
            },
            SectionEdit::PatchCard { card_id, patch } => {
                let not_applicable = self.not_applicable(section);
                let cards = section.cards_mut().ok_or(not_applicable)?;
                let card = cards
                    .iter_mut()
                    .find(|card| card.id == *card_id)
                    .ok_or_else(|| EditError::CardNotFound(card_id.clone()))?;
                patch.apply(card);
                Ok(())
            }
            SectionEdit::SetSlides { slides } => match section {
                Section::Slider(s) => {
                    s.slides = slides.clone();
                    Ok(())
                }
                Section::AdvancedSlider(s) => {
                    s.slides = slides.clone();
                    Ok(())
                }
                _ => Err(self.not_applicable(section)),
            },
            SectionEdit::SetSpeech { enabled } => self.apply_speech(section, *enabled),
        }
    }

    fn apply_title(&self, section: &mut Section, title: &str) -> Result<(), EditError> {
        match section {
            Section::Hero(s) => s.title = title.to_string(),
            Section::MediaTextLeft(s) | Section::MediaTextRight(s) => s.title = title.to_string(),
            Section::Feature(s) => s.title = title.to_string(),
            Section::Cta(s) => s.title = title.to_string(),
            Section::HeroResponsive(s) => s.title = title.to_string(),
            Section::MediaTextColumns(s) => s.title = title.to_string(),
            Section::Gallery(s) => s.title = title.to_string(),
            Section::TextWithVideoLeft(s) | Section::TextWithVideoRight(s) => {
                s.title = title.to_string()
            }
            Section::ProductPackageLeft(s) | Section::ProductPackageRight(s) => {
                s.name = title.to_string()
            }
            _ => return Err(self.not_applicable(section)),
        }
        Ok(())
    }

    fn apply_description(&self, section: &mut Section, description: &str) -> Result<(), EditError> {
        match section {
            Section::Hero(s) => s.description = description.to_string(),
            Section::MediaTextLeft(s) | Section::MediaTextRight(s) => {
                s.description = description.to_string()
            }
            Section::Feature(s) => s.description = description.to_string(),
            Section::Cta(s) => s.description = description.to_string(),
            Section::HeroResponsive(s) => s.description = description.to_string(),
            Section::MediaTextColumns(s) => s.description = description.to_string(),
            Section::Gallery(s) => s.description = description.to_string(),
            Section::TextWithVideoLeft(s) | Section::TextWithVideoRight(s) => {
                s.description = description.to_string()
            }
            Section::ProductPackageLeft(s) | Section::ProductPackageRight(s) => {
                s.description = description.to_string()
            }
            _ => return Err(self.not_applicable(section)),
        }
        Ok(())
    }

    fn apply_content(&self, section: &mut Section, content: &str) -> Result<(), EditError> {
        match section {
            Section::Text(s) => s.content = content.to_string(),
            Section::Privacy(s) => s.content = content.to_string(),
            _ => return Err(self.not_applicable(section)),
        }
        Ok(())
    }

    fn apply_media(&self, section: &mut Section, url: &str, kind: MediaKind) -> Result<(), EditError> {
        match section {
            Section::MediaTextLeft(s) | Section::MediaTextRight(s) => {
                s.media_url = url.to_string();
                s.media_type = kind;
            }
            Section::Text(s) => {
                s.media_url = url.to_string();
                s.media_type = kind;
            }
            Section::MediaTextColumns(s) => {
                s.media_url = url.to_string();
                s.media_type = kind;
            }
            Section::Hero(s) => {
                s.background_media = url.to_string();
                s.media_type = kind;
            }
            Section::HeroResponsive(s) => {
                s.background_media = url.to_string();
                s.media_type = kind;
            }
            _ => return Err(self.not_applicable(section)),
        }
        Ok(())
    }

    fn apply_speech(&self, section: &mut Section, enabled: bool) -> Result<(), EditError> {
        match section {
            Section::Hero(s) => s.enable_speech = enabled,
            Section::Slider(s) => s.enable_speech = enabled,
            Section::AdvancedSlider(s) => s.enable_speech = enabled,
            Section::MediaTextLeft(s) | Section::MediaTextRight(s) => s.enable_speech = enabled,
            Section::Feature(s) => s.enable_speech = enabled,
            Section::Cta(s) => s.enable_speech = enabled,
            Section::FeatureCardGrid(s) => s.enable_speech = enabled,
            Section::InfoCard(s) => s.enable_speech = enabled,
            Section::Divider(s) => s.enable_speech = enabled,
            Section::Privacy(s) => s.enable_speech = enabled,
            Section::CustomCode(s) => s.enable_speech = enabled,
            Section::HeroResponsive(s) => s.enable_speech = enabled,
            Section::Text(s) => s.enable_speech = enabled,
            Section::MediaPlaceholder(s) => s.enable_speech = enabled,
            Section::MediaTextColumns(s) => s.enable_speech = enabled,
            Section::TwoColumnText(s) => s.enable_speech = enabled,
            Section::Heading(s) => s.enable_speech = enabled,
            Section::Quote(s) => s.enable_speech = enabled,
            Section::Gallery(s) => s.enable_speech = enabled,
            Section::TextWithVideoLeft(s) | Section::TextWithVideoRight(s) => {
                s.enable_speech = enabled
            }
            Section::ProductPackageLeft(s) | Section::ProductPackageRight(s) => {
                s.enable_speech = enabled
            }
            // Contact forms carry no speech flags.
            Section::ContactForm(_) => return Err(self.not_applicable(section)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pageforge_sections::SectionKind;

    #[test]
    fn set_title_applies_to_hero() {
        let mut section = SectionKind::Hero.default_section("s1".to_string());
        let edit = SectionEdit::SetTitle { title: "Hello".to_string() };
        edit.apply(&mut section).unwrap();
        match section {
            Section::Hero(hero) => assert_eq!(hero.title, "Hello"),
            _ => unreachable!(),
        }
    }

    #[test]
    fn set_title_rejected_for_divider() {
        let mut section = SectionKind::Divider.default_section("s1".to_string());
        let edit = SectionEdit::SetTitle { title: "Hello".to_string() };
        let err = edit.apply(&mut section).unwrap_err();
        assert_eq!(
            err,
            EditError::NotApplicable { edit: "SetTitle", kind: "divider" }
        );
        // Record untouched.
        assert_eq!(section, SectionKind::Divider.default_section("s1".to_string()));
    }

    #[test]
    fn patch_card_targets_only_the_matching_card() {
        let mut section = SectionKind::FeatureCardGrid.default_section("grid".to_string());
        let edit = SectionEdit::PatchCard {
            card_id: "card-2".to_string(),
            patch: CardPatch::media("/img/pic.jpg", MediaKind::Image),
        };
        edit.apply(&mut section).unwrap();

        let cards = section.cards().unwrap();
        assert_eq!(cards[0].media_url, "");
        assert_eq!(cards[1].media_url, "/img/pic.jpg");
        assert_eq!(cards[2].media_url, "");
    }

    #[test]
    fn patch_card_with_unknown_id_fails() {
        let mut section = SectionKind::FeatureCardGrid.default_section("grid".to_string());
        let edit = SectionEdit::PatchCard {
            card_id: "card-99".to_string(),
            patch: CardPatch::default(),
        };
        assert_eq!(
            edit.apply(&mut section).unwrap_err(),
            EditError::CardNotFound("card-99".to_string())
        );
    }

    #[test]
    fn set_media_hits_background_on_hero_and_inline_on_text() {
        let edit = SectionEdit::SetMedia {
            url: "/v.mp4".to_string(),
            kind: MediaKind::Video,
        };

        let mut hero = SectionKind::Hero.default_section("h".to_string());
        edit.apply(&mut hero).unwrap();
        match hero {
            Section::Hero(s) => {
                assert_eq!(s.background_media, "/v.mp4");
                assert_eq!(s.media_type, MediaKind::Video);
            }
            _ => unreachable!(),
        }

        let mut text = SectionKind::Text.default_section("t".to_string());
        edit.apply(&mut text).unwrap();
        match text {
            Section::Text(s) => assert_eq!(s.media_url, "/v.mp4"),
            _ => unreachable!(),
        }
    }

    #[test]
    fn speech_rejected_on_contact_form() {
        let mut section = SectionKind::ContactForm.default_section("f".to_string());
        let edit = SectionEdit::SetSpeech { enabled: true };
        assert!(edit.apply(&mut section).is_err());
    }

    #[test]
    fn edits_serialize_for_the_wire() {
        let edit = SectionEdit::SetContent { content: "Hello".to_string() };
        let json = serde_json::to_string(&edit).unwrap();
        let restored: SectionEdit = serde_json::from_str(&json).unwrap();
        assert_eq!(edit, restored);
    }
}
