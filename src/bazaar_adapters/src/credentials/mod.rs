pub mod argon2_credentials;

pub use argon2_credentials::Argon2Credentials;
