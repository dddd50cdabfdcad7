pub mod config;
pub mod credentials;
pub mod http;
pub mod persistence;
