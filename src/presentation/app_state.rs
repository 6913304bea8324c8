// Application state for HTTP handlers
use crate::application::rainfall_service::RainfallService;

#[derive(Clone)]
pub struct AppState {
    pub rainfall_service: RainfallService,
}
