pub mod error;
pub mod get_account_profile;
pub mod sign_in;
pub mod sign_up;
pub mod update_account;

pub use error::{ErrorResponse, ProvisioningApiError};
pub use get_account_profile::get_account_profile;
pub use sign_in::{SignInRequest, sign_in};
pub use sign_up::{SignUpRequest, sign_up};
pub use update_account::update_account;
