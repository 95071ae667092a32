use std::sync::Arc;

use crate::models::{CarouselColumn, Coordinates, Event, MessageContent, OutboundMessage};
use crate::services::cards::build_cards;
use crate::state::AppState;

/// Sent for anything that isn't a location ("please send your location").
pub const PROMPT_LOCATION: &str = "位置情報を送信してください。";
/// Sent when the hotel lookup fails ("an error occurred").
pub const LOOKUP_FAILED: &str = "エラーが発生しました。";
/// Carousel alt text ("hotel list").
pub const CAROUSEL_ALT_TEXT: &str = "ホテル一覧";

/// Handles a webhook's events one after another. A failed reply never stops the rest.
pub async fn dispatch_events(state: Arc<AppState>, events: Vec<Event>) {
    for event in events {
        handle_event(&state, event).await;
    }
}

pub async fn handle_event(state: &AppState, event: Event) {
    match event {
        Event::Message {
            reply_token,
            message,
            source,
        } => {
            let user_id = source.and_then(|s| s.user_id).unwrap_or_default();
            let Some(reply_token) = reply_token else {
                tracing::debug!(user_id = %user_id, "message without reply token, skipping");
                return;
            };
            match message {
                MessageContent::Location {
                    title,
                    address,
                    latitude,
                    longitude,
                } => {
                    tracing::info!(
                        user_id = %user_id,
                        title = title.as_deref().unwrap_or(""),
                        address = address.as_deref().unwrap_or(""),
                        latitude,
                        longitude,
                        "location received"
                    );
                    let coords = Coordinates {
                        latitude,
                        longitude,
                    };
                    let reply = hotel_reply(state, coords).await;
                    send_reply(state, &reply_token, reply).await;
                }
                MessageContent::Text { .. } | MessageContent::Other => {
                    tracing::info!(user_id = %user_id, "non-location message, prompting for location");
                    send_reply(state, &reply_token, OutboundMessage::text(PROMPT_LOCATION)).await;
                }
            }
        }
        Event::Other => {
            tracing::debug!("ignoring non-message event");
        }
    }
}

/// Either a carousel of nearby hotels or the fixed error text, never both.
pub async fn hotel_reply(state: &AppState, coords: Coordinates) -> OutboundMessage {
    let hotels = match state.hotels.search(coords).await {
        Ok(hotels) => hotels,
        Err(e) => {
            tracing::error!(error = %e, "hotel lookup failed");
            return OutboundMessage::text(LOOKUP_FAILED);
        }
    };

    let cards = build_cards(&hotels);
    if cards.is_empty() {
        tracing::info!(results = hotels.len(), "no usable hotels near location");
        return OutboundMessage::text(LOOKUP_FAILED);
    }

    tracing::info!(cards = cards.len(), "replying with hotel carousel");
    let columns: Vec<CarouselColumn> = cards.into_iter().map(CarouselColumn::from).collect();
    OutboundMessage::carousel(CAROUSEL_ALT_TEXT, columns)
}

async fn send_reply(state: &AppState, reply_token: &str, message: OutboundMessage) {
    if let Err(e) = state.messaging.reply(reply_token, &[message]).await {
        tracing::error!(error = %e, reply_token = %reply_token, "failed to send reply");
    }
}
