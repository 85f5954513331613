use std::sync::Arc;

use crate::application::services::SummaryPipeline;
use crate::presentation::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<SummaryPipeline>,
    pub settings: Settings,
}
