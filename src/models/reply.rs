use serde::Serialize;

/// A message in the shape the LINE reply API accepts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum OutboundMessage {
    Text {
        text: String,
    },
    #[serde(rename_all = "camelCase")]
    Template {
        alt_text: String,
        template: Template,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Template {
    #[serde(rename_all = "camelCase")]
    Carousel {
        columns: Vec<CarouselColumn>,
        image_aspect_ratio: String,
        image_size: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselColumn {
    pub thumbnail_image_url: String,
    pub image_background_color: String,
    pub title: String,
    pub text: String,
    pub actions: Vec<Action>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Action {
    Uri { label: String, uri: String },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyRequest<'a> {
    pub reply_token: &'a str,
    pub messages: &'a [OutboundMessage],
}

impl OutboundMessage {
    pub fn text(text: impl Into<String>) -> Self {
        OutboundMessage::Text { text: text.into() }
    }

    /// Carousel with rectangle images scaled to cover the image area.
    pub fn carousel(alt_text: impl Into<String>, columns: Vec<CarouselColumn>) -> Self {
        OutboundMessage::Template {
            alt_text: alt_text.into(),
            template: Template::Carousel {
                columns,
                image_aspect_ratio: "rectangle".to_string(),
                image_size: "cover".to_string(),
            },
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            OutboundMessage::Text { text } => Some(text),
            OutboundMessage::Template { .. } => None,
        }
    }

    pub fn carousel_columns(&self) -> Option<&[CarouselColumn]> {
        match self {
            OutboundMessage::Template {
                template: Template::Carousel { columns, .. },
                ..
            } => Some(columns),
            OutboundMessage::Text { .. } => None,
        }
    }
}
