use serde::{Deserialize, Serialize};

/// Work area at the event. Role lists depend on the sector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sector {
    #[serde(rename = "Bar")]
    Bar,
    #[serde(rename = "Cozinha")]
    Cozinha,
    #[serde(rename = "Salão")]
    Salao,
}

impl Sector {
    /// Value sent to the API and stored in the attendance sheet
    pub fn code(&self) -> &'static str {
        match self {
            Sector::Bar => "Bar",
            Sector::Cozinha => "Cozinha",
            Sector::Salao => "Salão",
        }
    }

    /// Label shown in the sector dropdown
    pub fn display_name(&self) -> &'static str {
        self.code()
    }

    /// All sectors in dropdown order
    pub fn all() -> Vec<Sector> {
        vec![Sector::Bar, Sector::Cozinha, Sector::Salao]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Bar" => Some(Sector::Bar),
            "Cozinha" => Some(Sector::Cozinha),
            "Salão" => Some(Sector::Salao),
            _ => None,
        }
    }
}

impl std::fmt::Display for Sector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for sector in Sector::all() {
            assert_eq!(Sector::from_code(sector.code()), Some(sector));
        }
        assert_eq!(Sector::from_code("Salao"), None);
        assert_eq!(Sector::from_code(""), None);
    }

    #[test]
    fn test_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Sector::Salao).unwrap(), "\"Salão\"");
    }
}
