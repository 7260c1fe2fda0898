// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod ipinfo_client;
pub mod openweather_client;
pub mod page_renderer;
