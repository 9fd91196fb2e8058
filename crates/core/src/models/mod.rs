pub mod analytics;
pub mod investment;
pub mod nav;
pub mod portfolio;
pub mod settings;
