use crate::models::{Action, CarouselColumn, HotelEntry};

pub const MAX_CARDS: usize = 10;
pub const TITLE_MAX_CHARS: usize = 40;
pub const SUBTITLE_MAX_CHARS: usize = 60;
pub const ACTION_LABEL: &str = "楽天トラベルで開く";
pub const IMAGE_BACKGROUND: &str = "#FFFFFF";

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayCard {
    pub image_url: String,
    pub title: String,
    pub subtitle: String,
    pub action_label: String,
    pub action_url: String,
}

/// Turns the first [`MAX_CARDS`] search hits into cards, keeping their order.
///
/// Entries without a `hotelBasicInfo` section are skipped; hits past the
/// first [`MAX_CARDS`] are dropped even when earlier ones were skipped.
pub fn build_cards(entries: &[HotelEntry]) -> Vec<DisplayCard> {
    entries
        .iter()
        .enumerate()
        .take(MAX_CARDS)
        .filter_map(|(index, entry)| {
            let card = entry.basic_info().map(|info| DisplayCard {
                image_url: info.hotel_thumbnail_url.clone(),
                title: truncate_chars(&info.hotel_name, TITLE_MAX_CHARS),
                subtitle: truncate_chars(&info.hotel_special, SUBTITLE_MAX_CHARS),
                action_label: ACTION_LABEL.to_string(),
                action_url: info.hotel_information_url.clone(),
            });
            if card.is_none() {
                tracing::warn!(index, "hotel entry has no basic info, skipping");
            }
            card
        })
        .collect()
}

/// Keeps the first `max` chars of `s`, never splitting a code point.
pub fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((byte_idx, _)) => s[..byte_idx].to_string(),
        None => s.to_string(),
    }
}

impl From<DisplayCard> for CarouselColumn {
    fn from(card: DisplayCard) -> Self {
        CarouselColumn {
            thumbnail_image_url: card.image_url,
            image_background_color: IMAGE_BACKGROUND.to_string(),
            title: card.title,
            text: card.subtitle,
            actions: vec![Action::Uri {
                label: card.action_label,
                uri: card.action_url,
            }],
        }
    }
}
