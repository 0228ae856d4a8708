//! Status + body -> typed result for each feirinha endpoint
//!
//! Kept free of any HTTP client so the rules are testable on the host.

use super::response::{CheckRegistrationResponse, ErrorBody, RegisterPresenceResponse};
use crate::shared::api_error::ApiError;
use serde::de::DeserializeOwned;

pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

fn parse<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn rejected(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(ErrorBody::into_message);
    ApiError::Rejected { status, message }
}

/// The server answers an unknown CPF with 404 and `{"exists": false}`;
/// that is a valid answer, not a failure.
pub fn decode_check_registration(
    status: u16,
    body: &str,
) -> Result<CheckRegistrationResponse, ApiError> {
    if is_success(status) {
        return parse(body);
    }
    if status == 404 {
        if let Ok(resp) = serde_json::from_str::<CheckRegistrationResponse>(body) {
            if !resp.exists {
                return Ok(resp);
            }
        }
    }
    Err(rejected(status, body))
}

/// Any 2xx means the attendance was stored, even when the body is
/// empty or unreadable.
pub fn decode_register_presence(
    status: u16,
    body: &str,
) -> Result<RegisterPresenceResponse, ApiError> {
    if is_success(status) {
        return Ok(parse(body).unwrap_or_default());
    }
    Err(rejected(status, body))
}

pub fn decode_functions(status: u16, body: &str) -> Result<Vec<String>, ApiError> {
    if is_success(status) {
        return parse(body);
    }
    Err(rejected(status, body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_available() {
        let body = r#"{"exists": true, "registeredToday": false, "nome": "Maria Souza",
            "pixKey": "maria@pix.com", "message": "CPF encontrado, você pode prosseguir com o registro."}"#;
        let resp = decode_check_registration(200, body).unwrap();
        assert!(resp.exists);
        assert!(!resp.registered_today);
        assert_eq!(resp.name.as_deref(), Some("Maria Souza"));
        assert_eq!(resp.pix_key.as_deref(), Some("maria@pix.com"));
        assert_eq!(resp.last_registration_time, None);
    }

    #[test]
    fn test_check_registered_today() {
        let body = r#"{"exists": true, "registeredToday": true, "nome": "João",
            "pixKey": "123", "lastRegistrationTime": "08:00"}"#;
        let resp = decode_check_registration(200, body).unwrap();
        assert!(resp.registered_today);
        assert_eq!(resp.last_registration_time.as_deref(), Some("08:00"));
    }

    #[test]
    fn test_check_not_found_404_is_an_answer() {
        let body = r#"{"exists": false, "message": "CPF não encontrado no cadastro de colaboradores."}"#;
        let resp = decode_check_registration(404, body).unwrap();
        assert!(!resp.exists);
        assert_eq!(
            resp.message.as_deref(),
            Some("CPF não encontrado no cadastro de colaboradores.")
        );
    }

    #[test]
    fn test_check_404_without_contract_body_is_rejected() {
        let err = decode_check_registration(404, "<html>Not Found</html>").unwrap_err();
        assert_eq!(err, ApiError::Rejected { status: 404, message: None });
    }

    #[test]
    fn test_check_server_error() {
        let body = r#"{"error": "Erro interno ao verificar registro."}"#;
        let err = decode_check_registration(500, body).unwrap_err();
        assert_eq!(err.server_message(), Some("Erro interno ao verificar registro."));
    }

    #[test]
    fn test_check_2xx_with_garbage_is_decode_error() {
        let err = decode_check_registration(200, "not json").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_register_created() {
        let body = r#"{"message": "Presença registrada com sucesso!", "nome": "Maria"}"#;
        let resp = decode_register_presence(201, body).unwrap();
        assert_eq!(resp.message, "Presença registrada com sucesso!");
        assert_eq!(resp.name.as_deref(), Some("Maria"));
    }

    #[test]
    fn test_register_2xx_without_json_body_is_success() {
        assert_eq!(
            decode_register_presence(201, "").unwrap(),
            RegisterPresenceResponse::default()
        );
        let resp = decode_register_presence(200, "<html>ok</html>").unwrap();
        assert!(resp.message.is_empty());
        assert_eq!(resp.name, None);
    }

    #[test]
    fn test_register_duplicate() {
        let err = decode_register_presence(409, r#"{"error": "duplicate"}"#).unwrap_err();
        assert_eq!(
            err,
            ApiError::Rejected { status: 409, message: Some("duplicate".to_string()) }
        );
    }

    #[test]
    fn test_register_message_field_used_when_no_error_field() {
        let err = decode_register_presence(400, r#"{"message": "fechado"}"#).unwrap_err();
        assert_eq!(err.server_message(), Some("fechado"));

        let err = decode_register_presence(400, r#"{"error": "  "}"#).unwrap_err();
        assert_eq!(err.server_message(), None);
    }

    #[test]
    fn test_functions() {
        let list = decode_functions(200, r#"["bartender", "ajudante de bar"]"#).unwrap();
        assert_eq!(list, vec!["bartender".to_string(), "ajudante de bar".to_string()]);

        assert!(decode_functions(503, "").is_err());
    }
}
