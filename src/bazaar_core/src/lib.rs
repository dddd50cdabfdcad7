pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    access_token::AccessToken,
    account::{Account, AccountError, AccountFilter, AccountPatch, NewAccount, ProfileFields},
    account_image::AccountImage,
    category::{Category, CategoryClause, CategoryFilter},
    company_name::CompanyName,
    email::Email,
    ids::{AccessTokenId, AccountId, AccountImageId, CategoryId},
    password::{Password, SignInPassword},
    password_hash::PasswordHash,
    profile::{AccountProfile, ImageRef, Session},
};

pub use ports::{
    repositories::{
        AccountImageRepository, AccountImageRepositoryError, AccountRepository,
        AccountRepositoryError, CategoryRepository, CategoryRepositoryError,
    },
    services::{
        CredentialError, CredentialHasher, CredentialVerifier, TokenIssuer, TokenIssuerError,
    },
};
