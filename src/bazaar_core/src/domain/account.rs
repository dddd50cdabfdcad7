use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

use super::{
    company_name::CompanyName,
    email::Email,
    ids::{AccountId, CategoryId},
    password_hash::PasswordHash,
};

/// Validation failures for account value objects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Password must be at least 8 characters long")]
    InvalidPassword,
    #[error("Password hash must not be empty")]
    EmptyPasswordHash,
    #[error("Company name must not be empty")]
    EmptyCompanyName,
}

/// Free-form display fields of a company profile.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProfileFields {
    pub name: CompanyName,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

impl ProfileFields {
    pub fn new(name: CompanyName) -> Self {
        Self {
            name,
            description: None,
            phone: None,
            address: None,
            website: None,
        }
    }
}

/// Data handed to the repository to create an account. The category has already been
/// resolved and the password already hashed.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub email: Email,
    pub password_hash: PasswordHash,
    pub category: CategoryId,
    pub profile: ProfileFields,
}

/// A registered company account as stored.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: AccountId,
    pub email: Email,
    pub password_hash: PasswordHash,
    pub category: CategoryId,
    pub profile: ProfileFields,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Materialize a freshly created account with a new id.
    pub fn create(data: NewAccount) -> Self {
        Self {
            id: AccountId::new(),
            email: data.email,
            password_hash: data.password_hash,
            category: data.category,
            profile: data.profile,
            created_at: Utc::now(),
        }
    }

    /// Overwrite every field the patch sets. The category is taken as given.
    pub fn apply(&mut self, patch: &AccountPatch) {
        if let Some(name) = &patch.name {
            self.profile.name = name.clone();
        }
        if let Some(description) = &patch.description {
            self.profile.description = Some(description.clone());
        }
        if let Some(phone) = &patch.phone {
            self.profile.phone = Some(phone.clone());
        }
        if let Some(address) = &patch.address {
            self.profile.address = Some(address.clone());
        }
        if let Some(website) = &patch.website {
            self.profile.website = Some(website.clone());
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
    }
}

/// The set of fields an update may change. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AccountPatch {
    pub name: Option<CompanyName>,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub website: Option<String>,
    pub category: Option<CategoryId>,
}

impl AccountPatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Lookup criteria for accounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountFilter {
    Email(Email),
    Id(AccountId),
}

impl AccountFilter {
    pub fn matches(&self, account: &Account) -> bool {
        match self {
            AccountFilter::Email(email) => &account.email == email,
            AccountFilter::Id(id) => &account.id == id,
        }
    }
}
