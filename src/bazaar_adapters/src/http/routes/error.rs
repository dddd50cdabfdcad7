use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use bazaar_application::{GetAccountProfileError, SignInError, SignUpError, UpdateAccountError};
use bazaar_core::AccountError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum ProvisioningApiError {
    #[error("Company already exists")]
    CompanyAlreadyExists,

    #[error("Category not found")]
    CategoryNotFound,

    #[error("Company not found")]
    CompanyNotFound,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl IntoResponse for ProvisioningApiError {
    fn into_response(self) -> Response {
        let (status_code, error_message) = match self {
            ProvisioningApiError::InvalidInput(_) | ProvisioningApiError::CategoryNotFound => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }

            ProvisioningApiError::CompanyAlreadyExists => (StatusCode::CONFLICT, self.to_string()),

            ProvisioningApiError::CompanyNotFound => (StatusCode::NOT_FOUND, self.to_string()),

            ProvisioningApiError::InvalidCredentials => {
                (StatusCode::UNPROCESSABLE_ENTITY, self.to_string())
            }

            ProvisioningApiError::UnexpectedError(ref e) => {
                tracing::error!(error = %e, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    String::from("Unexpected error"),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status_code, body).into_response()
    }
}

impl From<AccountError> for ProvisioningApiError {
    fn from(error: AccountError) -> Self {
        ProvisioningApiError::InvalidInput(error.to_string())
    }
}

impl From<JsonRejection> for ProvisioningApiError {
    fn from(rejection: JsonRejection) -> Self {
        ProvisioningApiError::InvalidInput(rejection.body_text())
    }
}

impl From<SignUpError> for ProvisioningApiError {
    fn from(error: SignUpError) -> Self {
        match error {
            SignUpError::DuplicateAccount => ProvisioningApiError::CompanyAlreadyExists,
            SignUpError::CategoryNotFound => ProvisioningApiError::CategoryNotFound,
            SignUpError::AccountRepositoryError(_)
            | SignUpError::CategoryRepositoryError(_)
            | SignUpError::CredentialError(_)
            | SignUpError::TokenIssuerError(_)
            | SignUpError::ProjectionError(_) => {
                ProvisioningApiError::UnexpectedError(error.to_string())
            }
        }
    }
}

impl From<SignInError> for ProvisioningApiError {
    fn from(error: SignInError) -> Self {
        match error {
            SignInError::AccountNotFound => ProvisioningApiError::CompanyNotFound,
            SignInError::InvalidCredentials => ProvisioningApiError::InvalidCredentials,
            SignInError::AccountRepositoryError(_)
            | SignInError::CredentialError(_)
            | SignInError::TokenIssuerError(_)
            | SignInError::ProjectionError(_) => {
                ProvisioningApiError::UnexpectedError(error.to_string())
            }
        }
    }
}

impl From<UpdateAccountError> for ProvisioningApiError {
    fn from(error: UpdateAccountError) -> Self {
        match error {
            UpdateAccountError::AccountNotFound => ProvisioningApiError::CompanyNotFound,
            UpdateAccountError::AccountRepositoryError(_)
            | UpdateAccountError::ProjectionError(_) => {
                ProvisioningApiError::UnexpectedError(error.to_string())
            }
        }
    }
}

impl From<GetAccountProfileError> for ProvisioningApiError {
    fn from(error: GetAccountProfileError) -> Self {
        match error {
            GetAccountProfileError::AccountNotFound => ProvisioningApiError::CompanyNotFound,
            GetAccountProfileError::AccountRepositoryError(_)
            | GetAccountProfileError::ProjectionError(_) => {
                ProvisioningApiError::UnexpectedError(error.to_string())
            }
        }
    }
}
