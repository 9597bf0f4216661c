//! Media reference primitives shared by sections and cards.

use serde::{Deserialize, Serialize};

/// Kind of a referenced media asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    #[default]
    Image,
    Video,
}

/// Where media sits relative to the text of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaPlacement {
    Left,
    Right,
    Top,
    Bottom,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_kind_uses_lowercase_wire_names() {
        assert_eq!(serde_json::to_string(&MediaKind::Image).unwrap(), "\"image\"");
        assert_eq!(serde_json::to_string(&MediaKind::Video).unwrap(), "\"video\"");
    }

    #[test]
    fn media_placement_round_trips() {
        let left: MediaPlacement = serde_json::from_str("\"left\"").unwrap();
        assert_eq!(left, MediaPlacement::Left);
        assert_eq!(serde_json::to_string(&MediaPlacement::Right).unwrap(), "\"right\"");
    }
}
