use crate::enums::Sector;
use crate::shared::cpf::Cpf;
use serde::{Deserialize, Serialize};

/// Body of `POST /check-registration`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRegistrationRequest {
    /// Bare 11 digits
    pub cpf: String,
}

impl CheckRegistrationRequest {
    pub fn new(cpf: &Cpf) -> Self {
        Self {
            cpf: cpf.digits().to_string(),
        }
    }
}

/// Body of `POST /register-presence`.
/// Name and PIX key are not sent: the server resolves them from the CPF.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterPresenceRequest {
    pub cpf: String,
    pub sector: String,
    /// Job role ("função")
    pub function: String,
}

impl RegisterPresenceRequest {
    pub fn new(cpf: Cpf, sector: Sector, function: impl Into<String>) -> Self {
        Self {
            cpf: cpf.into_digits(),
            sector: sector.code().to_string(),
            function: function.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_register_body_shape() {
        let cpf = Cpf::parse("529.982.247-25").unwrap();
        let req = RegisterPresenceRequest::new(cpf, Sector::Salao, "garçom");
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({ "cpf": "52998224725", "sector": "Salão", "function": "garçom" })
        );
    }

    #[test]
    fn test_check_body_sends_bare_digits() {
        let cpf = Cpf::parse("111.444.777-35").unwrap();
        assert_eq!(
            serde_json::to_value(CheckRegistrationRequest::new(&cpf)).unwrap(),
            json!({ "cpf": "11144477735" })
        );
    }
}
