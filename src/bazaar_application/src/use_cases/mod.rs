pub mod get_account_profile;
pub mod sign_in;
pub mod sign_up;
pub mod update_account;

// Re-export for convenience
pub use get_account_profile::{GetAccountProfileError, GetAccountProfileUseCase};
pub use sign_in::{SignInData, SignInError, SignInUseCase};
pub use sign_up::{SignUpData, SignUpError, SignUpUseCase};
pub use update_account::{UpdateAccountError, UpdateAccountUseCase};
