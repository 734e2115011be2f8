use serde::{Deserialize, Serialize};

/// Which payout components a vacation settlement includes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VacationType {
    /// Annual vacation: working-days salary plus vacation salary.
    #[default]
    Annual,
    /// Personal vacation: working-days salary only.
    Personal,
    /// Encashment: vacation salary only.
    Encashment,
}

impl VacationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Annual => "annual",
            Self::Personal => "personal",
            Self::Encashment => "encashment",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "annual" => Some(Self::Annual),
            "personal" => Some(Self::Personal),
            "encashment" => Some(Self::Encashment),
            _ => None,
        }
    }
}
