pub mod domain;
pub mod event_use_cases;
pub mod ports;
pub mod services;
