// Application state for HTTP handlers
use crate::application::dataset::DatasetProvider;
use crate::application::session_registry::SessionRegistry;
use crate::application::view_composer::ViewComposer;
use std::sync::Arc;

pub struct AppState {
    pub dataset: Arc<dyn DatasetProvider>,
    pub registry: SessionRegistry,
    pub composer: ViewComposer,
}
