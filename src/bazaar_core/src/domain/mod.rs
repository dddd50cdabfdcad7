pub mod access_token;
pub mod account;
pub mod account_image;
pub mod category;
pub mod company_name;
pub mod email;
pub mod ids;
pub mod password;
pub mod password_hash;
pub mod profile;
