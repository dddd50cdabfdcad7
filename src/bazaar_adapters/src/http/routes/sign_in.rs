use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};
use bazaar_application::{AccountProvisioning, SignInData};
use bazaar_core::{Email, SignInPassword};
use secrecy::Secret;
use serde::Deserialize;

use super::error::ProvisioningApiError;

#[derive(Deserialize)]
pub struct SignInRequest {
    pub email: Secret<String>,
    pub password: Secret<String>,
}

#[tracing::instrument(name = "Sign in", skip_all)]
pub async fn sign_in<P>(
    State(provisioning): State<Arc<P>>,
    Json(request): Json<SignInRequest>,
) -> Result<impl IntoResponse, ProvisioningApiError>
where
    P: AccountProvisioning,
{
    let credentials = SignInData {
        email: Email::try_from(request.email)?,
        password: SignInPassword::from(request.password),
    };

    let session = provisioning.sign_in(credentials).await?;

    Ok(Json(session))
}
