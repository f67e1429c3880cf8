pub mod cancellation;
pub mod interfaces;
pub mod models;
pub mod services;
