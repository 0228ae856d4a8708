pub mod decode;
pub mod request;
pub mod response;

pub use decode::{decode_check_registration, decode_functions, decode_register_presence};
pub use request::{CheckRegistrationRequest, RegisterPresenceRequest};
pub use response::{CheckRegistrationResponse, ErrorBody, RegisterPresenceResponse};

use crate::usecases::common::UseCaseMetadata;

pub const CHECK_REGISTRATION_PATH: &str = "/check-registration";
pub const REGISTER_PRESENCE_PATH: &str = "/register-presence";
pub const FUNCTIONS_PATH: &str = "/functions";

pub struct RegisterPresence;

impl UseCaseMetadata for RegisterPresence {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "register_presence"
    }

    fn display_name() -> &'static str {
        "Cadastro de EXTRAS"
    }

    fn description() -> &'static str {
        "Feirinha 2025"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        assert_eq!(RegisterPresence::full_name(), "u501_register_presence");
    }
}
