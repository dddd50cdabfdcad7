//! # Bazaar - Company Account Provisioning
//!
//! This is a facade crate that re-exports all public APIs from the account service components.
//! Use this crate to get access to all provisioning functionality in one place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! bazaar = { path = "../bazaar" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `Account`, `Category`, `AccountProfile`, etc.
//! - **Ports**: `AccountRepository`, `CategoryRepository`, `TokenIssuer`, credential traits
//! - **Use cases**: `SignUpUseCase`, `SignInUseCase`, `UpdateAccountUseCase`, etc.
//! - **Adapters**: in-memory and PostgreSQL stores, `Argon2Credentials`, HTTP routes
//! - **Service**: `AccountService` - The HTTP entry point

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use bazaar_core::*;
}

// Re-export most commonly used core types at the root level
pub use bazaar_core::{
    AccessToken, Account, AccountError, AccountFilter, AccountId, AccountPatch, AccountProfile,
    Category, CategoryFilter, CategoryId, CompanyName, Email, Password, PasswordHash,
    ProfileFields, Session, SignInPassword,
};

// ============================================================================
// Ports
// ============================================================================

/// Repository and service port definitions
pub mod ports {
    pub use bazaar_core::{
        AccountImageRepository, AccountImageRepositoryError, AccountRepository,
        AccountRepositoryError, CategoryRepository, CategoryRepositoryError, CredentialError,
        CredentialHasher, CredentialVerifier, TokenIssuer, TokenIssuerError,
    };
}

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use bazaar_application::*;
}

// Re-export the provisioning entry points at root level
pub use bazaar_application::{
    AccountProvisioning, AccountProvisioningService, GetAccountProfileUseCase, SignInUseCase,
    SignUpUseCase, UpdateAccountUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP route handlers
    pub mod http {
        pub use bazaar_adapters::http::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use bazaar_adapters::persistence::*;
    }

    /// Password hashing
    pub mod credentials {
        pub use bazaar_adapters::credentials::*;
    }

    /// Configuration
    pub mod config {
        pub use bazaar_adapters::config::*;
    }
}

// Re-export commonly used adapters at root level
pub use bazaar_adapters::{
    credentials::Argon2Credentials,
    persistence::{
        HashMapAccountImageRepository, HashMapAccountRepository, HashMapTokenIssuer,
        PostgresAccountImageRepository, PostgresAccountRepository, PostgresCategoryRepository,
        PostgresTokenIssuer, VecCategoryRepository,
    },
};

// ============================================================================
// Account Service (Main Entry Point)
// ============================================================================

/// Main account service
pub use bazaar_account_service::{AccountService, configure_postgresql, get_postgres_pool};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};
