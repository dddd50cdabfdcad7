use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::IntoResponse,
};
use bazaar_application::AccountProvisioning;
use bazaar_core::{AccountId, AccountPatch};

use super::error::ProvisioningApiError;

/// `PATCH /companies/{id}`. Only the fields present in the body change; a field the
/// patch does not know is rejected rather than ignored.
#[tracing::instrument(name = "Update company", skip(provisioning, payload))]
pub async fn update_account<P>(
    State(provisioning): State<Arc<P>>,
    Path(id): Path<String>,
    payload: Result<Json<AccountPatch>, JsonRejection>,
) -> Result<impl IntoResponse, ProvisioningApiError>
where
    P: AccountProvisioning,
{
    let account_id = parse_account_id(&id)?;
    let Json(patch) = payload?;

    let profile = provisioning.update(account_id, patch).await?;

    Ok(Json(profile))
}

pub(super) fn parse_account_id(raw: &str) -> Result<AccountId, ProvisioningApiError> {
    raw.parse::<AccountId>()
        .map_err(|_| ProvisioningApiError::InvalidInput(format!("Malformed company id: {raw}")))
}
