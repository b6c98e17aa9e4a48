use dairo_application::PromptEngineeringService;

/// Application state shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: PromptEngineeringService,
}

impl AppState {
    pub fn new(service: PromptEngineeringService) -> Self {
        Self { service }
    }
}
