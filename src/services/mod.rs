pub mod cards;
pub mod dispatch;
pub mod hotels;
pub mod messaging;
