// Application layer - Pipeline use case and the ports it depends on
pub mod chart_surface;
pub mod error;
pub mod rainfall_service;
pub mod readings_repository;
