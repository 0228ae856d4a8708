use serde::{Deserialize, Serialize};

/// Answer of `POST /check-registration`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRegistrationResponse {
    /// Whether the CPF is in the collaborators sheet
    pub exists: bool,

    #[serde(rename = "nome", alias = "name", default)]
    pub name: Option<String>,

    #[serde(rename = "pixKey", default)]
    pub pix_key: Option<String>,

    /// Attendance already recorded for the current registration day
    #[serde(rename = "registeredToday", default)]
    pub registered_today: bool,

    /// Local time of the previous registration, e.g. "08:00:00"
    #[serde(rename = "lastRegistrationTime", default)]
    pub last_registration_time: Option<String>,

    #[serde(default)]
    pub message: Option<String>,
}

/// Answer of `POST /register-presence` on success
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterPresenceResponse {
    #[serde(default)]
    pub message: String,

    #[serde(rename = "nome", default)]
    pub name: Option<String>,
}

/// Error body returned with non-2xx statuses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// `error` wins over `message`; blank strings count as absent
    pub fn into_message(self) -> Option<String> {
        self.error
            .filter(|m| !m.trim().is_empty())
            .or(self.message.filter(|m| !m.trim().is_empty()))
    }
}
