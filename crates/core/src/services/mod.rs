pub mod analytics_service;
pub mod performance_service;
pub mod portfolio_service;
pub mod projection_service;
pub mod valuation_service;
