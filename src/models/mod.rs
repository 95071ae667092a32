pub mod event;
pub mod hotel;
pub mod reply;

pub use event::{Coordinates, Event, EventSource, MessageContent, WebhookPayload};
pub use hotel::{HotelBasicInfo, HotelDetail, HotelEntry, HotelSearchResponse};
pub use reply::{Action, CarouselColumn, OutboundMessage, ReplyRequest, Template};
