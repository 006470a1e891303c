pub mod health_service;
pub mod intrusion_service;
