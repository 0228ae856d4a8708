use crate::shared::api_utils::api_url;
use crate::shared::config::AppConfig;
use contracts::enums::Sector;
use contracts::shared::api_error::ApiError;
use contracts::shared::cpf::Cpf;
use contracts::usecases::u501_register_presence::{
    decode_check_registration, decode_functions, decode_register_presence,
    CheckRegistrationRequest, CheckRegistrationResponse, RegisterPresenceRequest,
    RegisterPresenceResponse, CHECK_REGISTRATION_PATH, FUNCTIONS_PATH, REGISTER_PRESENCE_PATH,
};
use gloo_net::http::{Request, Response};

/// Status and raw body; decoding is left to the contract decoders
async fn read(response: Response) -> Result<(u16, String), ApiError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(format!("Failed to read response: {}", e)))?;
    Ok((status, body))
}

/// Look up the worker and today's registration
pub async fn check_registration(
    config: &AppConfig,
    cpf: &Cpf,
) -> Result<CheckRegistrationResponse, ApiError> {
    let request = CheckRegistrationRequest::new(cpf);

    let response = Request::post(&api_url(config, CHECK_REGISTRATION_PATH))
        .json(&request)
        .map_err(|e| ApiError::Network(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Network(format!("Failed to send request: {}", e)))?;

    let (status, body) = read(response).await?;
    decode_check_registration(status, &body)
}

/// Roles offered for a sector
pub async fn fetch_functions(config: &AppConfig, sector: Sector) -> Result<Vec<String>, ApiError> {
    let url = api_url(
        config,
        &format!("{}/{}", FUNCTIONS_PATH, urlencoding::encode(sector.code())),
    );

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| ApiError::Network(format!("Failed to send request: {}", e)))?;

    let (status, body) = read(response).await?;
    decode_functions(status, &body)
}

/// Record attendance for the current registration day
pub async fn register_presence(
    config: &AppConfig,
    request: &RegisterPresenceRequest,
) -> Result<RegisterPresenceResponse, ApiError> {
    let response = Request::post(&api_url(config, REGISTER_PRESENCE_PATH))
        .json(request)
        .map_err(|e| ApiError::Network(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Network(format!("Failed to send request: {}", e)))?;

    let (status, body) = read(response).await?;
    decode_register_presence(status, &body)
}
