use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use bazaar_application::AccountProvisioning;

use super::{error::ProvisioningApiError, update_account::parse_account_id};

#[tracing::instrument(name = "Get company profile", skip(provisioning))]
pub async fn get_account_profile<P>(
    State(provisioning): State<Arc<P>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ProvisioningApiError>
where
    P: AccountProvisioning,
{
    let account_id = parse_account_id(&id)?;

    let profile = provisioning.profile(account_id).await?;

    Ok(Json(profile))
}
