pub mod rakuten;

use async_trait::async_trait;

use crate::models::{Coordinates, HotelEntry};

#[async_trait]
pub trait HotelSearch: Send + Sync {
    /// Hotels near `coords`, in the order the search API ranks them.
    async fn search(&self, coords: Coordinates) -> anyhow::Result<Vec<HotelEntry>>;
}
