pub mod prompt_engineering_service;

pub use prompt_engineering_service::PromptEngineeringService;
