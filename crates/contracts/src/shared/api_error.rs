use thiserror::Error;

/// Failure of a call to the feirinha API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Request never produced an HTTP response (offline, CORS, DNS...)
    #[error("falha de conexão com o servidor: {0}")]
    Network(String),

    /// Server answered with a non-2xx status
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("sem detalhes"))]
    Rejected { status: u16, message: Option<String> },

    /// 2xx answer whose body does not match the contract
    #[error("resposta inválida do servidor: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message supplied by the backend, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Text to show the user: the backend's own words when present,
    /// otherwise `fallback` followed by the technical reason.
    pub fn user_message(&self, fallback: &str) -> String {
        match self.server_message() {
            Some(msg) => msg.to_string(),
            None => format!("{}: {}", fallback, self),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}
