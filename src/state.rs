use crate::config::AppConfig;
use crate::services::hotels::HotelSearch;
use crate::services::messaging::MessagingProvider;

pub struct AppState {
    pub config: AppConfig,
    pub hotels: Box<dyn HotelSearch>,
    pub messaging: Box<dyn MessagingProvider>,
}
