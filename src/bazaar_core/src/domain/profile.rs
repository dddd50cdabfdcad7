//! Public view of a company account.
//!
//! [`AccountProfile`] is the only shape in which account data leaves the provisioning
//! core. It has no field for the password hash, so a hash cannot leak through it.

use serde::Serialize;

use super::{
    account::Account,
    account_image::AccountImage,
    category::Category,
    ids::{AccessTokenId, AccountId, AccountImageId, CategoryId},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRef {
    pub id: AccountImageId,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountProfile {
    pub id: AccountId,
    pub email: String,
    pub name: String,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub website: Option<String>,
    pub category_id: CategoryId,
    /// `None` when the stored category reference no longer resolves.
    pub category_title: Option<String>,
    pub images: Vec<ImageRef>,
}

impl AccountProfile {
    /// Build the public profile. Pure: equal inputs always give equal output.
    pub fn project(account: &Account, category: Option<&Category>, images: &[AccountImage]) -> Self {
        Self {
            id: account.id,
            email: account.email.as_str().to_owned(),
            name: account.profile.name.as_str().to_owned(),
            description: account.profile.description.clone(),
            phone: account.profile.phone.clone(),
            address: account.profile.address.clone(),
            website: account.profile.website.clone(),
            category_id: account.category,
            category_title: category
                .filter(|category| category.id == account.category)
                .map(|category| category.title.clone()),
            images: images
                .iter()
                .map(|image| ImageRef {
                    id: image.id,
                    url: image.url.clone(),
                })
                .collect(),
        }
    }
}

/// Result of a successful sign-up or sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub access_token: AccessTokenId,
    #[serde(rename = "company")]
    pub account: AccountProfile,
}
