use serde::Deserialize;

/// Body of a LINE Messaging API webhook request.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookPayload {
    #[serde(default)]
    pub destination: String,
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Event {
    #[serde(rename_all = "camelCase")]
    Message {
        /// Absent for events delivered while the channel is in standby mode.
        #[serde(default)]
        reply_token: Option<String>,
        message: MessageContent,
        #[serde(default)]
        source: Option<EventSource>,
    },
    /// follow, unfollow, postback, join, ...
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventSource {
    #[serde(default)]
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MessageContent {
    Location {
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        address: Option<String>,
        latitude: f64,
        longitude: f64,
    },
    Text {
        text: String,
    },
    /// image, video, audio, file, sticker, ...
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_location_message() {
        let json = r#"{
            "destination": "Uabc",
            "events": [{
                "type": "message",
                "mode": "active",
                "timestamp": 1462629479859,
                "replyToken": "nHuyWiB7yP5Zw52FIkcQobQuGDXCTA",
                "source": {"type": "user", "userId": "U4af4980629"},
                "webhookEventId": "01FZ74A0TDDPYRVKNK77XKC3ZR",
                "deliveryContext": {"isRedelivery": false},
                "message": {
                    "id": "325708",
                    "type": "location",
                    "title": "my location",
                    "address": "Tokyo",
                    "latitude": 35.681236,
                    "longitude": 139.767125
                }
            }]
        }"#;
        let payload: WebhookPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.destination, "Uabc");
        assert_eq!(payload.events.len(), 1);
        match &payload.events[0] {
            Event::Message {
                reply_token,
                message: MessageContent::Location { latitude, longitude, title, .. },
                source,
            } => {
                assert_eq!(reply_token.as_deref(), Some("nHuyWiB7yP5Zw52FIkcQobQuGDXCTA"));
                assert_eq!(*latitude, 35.681236);
                assert_eq!(*longitude, 139.767125);
                assert_eq!(title.as_deref(), Some("my location"));
                assert_eq!(
                    source.as_ref().and_then(|s| s.user_id.as_deref()),
                    Some("U4af4980629")
                );
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_parse_text_message() {
        let json = r#"{"events":[{"type":"message","replyToken":"t","message":{"id":"1","type":"text","text":"hello"}}]}"#;
        let payload: WebhookPayload = serde_json::from_str(json).unwrap();
        assert_eq!(
            payload.events[0],
            Event::Message {
                reply_token: Some("t".to_string()),
                message: MessageContent::Text { text: "hello".to_string() },
                source: None,
            }
        );
    }

    #[test]
    fn test_unknown_message_type_is_other() {
        let json = r#"{"events":[{"type":"message","replyToken":"t","message":{"id":"1","type":"sticker","packageId":"1","stickerId":"2"}}]}"#;
        let payload: WebhookPayload = serde_json::from_str(json).unwrap();
        match &payload.events[0] {
            Event::Message { message, .. } => assert_eq!(*message, MessageContent::Other),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_non_message_event_is_other() {
        let json = r#"{"events":[{"type":"follow","replyToken":"t","source":{"type":"user","userId":"U1"}}]}"#;
        let payload: WebhookPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.events[0], Event::Other);
    }

    #[test]
    fn test_standby_event_without_reply_token() {
        let json = r#"{"events":[
            {"type":"message","mode":"standby","message":{"id":"1","type":"text","text":"hi"}},
            {"type":"message","mode":"active","replyToken":"t2","message":{"id":"2","type":"location","latitude":35.0,"longitude":135.0}}
        ]}"#;
        let payload: WebhookPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.events.len(), 2);
        match &payload.events[0] {
            Event::Message { reply_token, .. } => assert!(reply_token.is_none()),
            other => panic!("unexpected event: {other:?}"),
        }
        match &payload.events[1] {
            Event::Message { reply_token, .. } => assert_eq!(reply_token.as_deref(), Some("t2")),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_empty_events_for_verification() {
        let json = r#"{"destination":"Uabc","events":[]}"#;
        let payload: WebhookPayload = serde_json::from_str(json).unwrap();
        assert!(payload.events.is_empty());
    }

    #[test]
    fn test_missing_events_is_error() {
        assert!(serde_json::from_str::<WebhookPayload>(r#"{"destination":"U"}"#).is_err());
        assert!(serde_json::from_str::<WebhookPayload>("not json").is_err());
    }
}
