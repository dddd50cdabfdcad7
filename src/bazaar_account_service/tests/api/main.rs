mod helpers;
mod sign_in;
mod sign_up;
mod update_account;
