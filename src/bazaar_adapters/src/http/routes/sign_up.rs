use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use bazaar_application::{AccountProvisioning, SignUpData};
use bazaar_core::{CompanyName, Email, Password, ProfileFields};
use secrecy::Secret;
use serde::Deserialize;

use super::error::ProvisioningApiError;

#[derive(Deserialize)]
pub struct SignUpRequest {
    pub email: Secret<String>,
    pub password: Secret<String>,
    /// Category title, or the id of an existing category.
    pub category: String,
    pub name: String,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub website: Option<String>,
}

impl TryFrom<SignUpRequest> for SignUpData {
    type Error = ProvisioningApiError;

    fn try_from(request: SignUpRequest) -> Result<Self, Self::Error> {
        let profile = ProfileFields {
            name: CompanyName::try_from(request.name)?,
            description: request.description,
            phone: request.phone,
            address: request.address,
            website: request.website,
        };

        Ok(SignUpData {
            email: Email::try_from(request.email)?,
            password: Password::try_from(request.password)?,
            category: request.category,
            profile,
        })
    }
}

#[tracing::instrument(name = "Sign up", skip_all)]
pub async fn sign_up<P>(
    State(provisioning): State<Arc<P>>,
    Json(request): Json<SignUpRequest>,
) -> Result<impl IntoResponse, ProvisioningApiError>
where
    P: AccountProvisioning,
{
    let data = SignUpData::try_from(request)?;

    let session = provisioning.sign_up(data).await?;

    Ok((StatusCode::CREATED, Json(session)))
}
