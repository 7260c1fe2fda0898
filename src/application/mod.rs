// Application layer - Use cases and the ports they depend on
pub mod dashboard_service;
pub mod forecast_provider;
pub mod geo_lookup;
pub mod location_service;
pub mod table_builder;
