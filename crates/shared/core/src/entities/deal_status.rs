use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Pipeline status of a deal
///
/// The set is open: anything that is not one of the known labels is kept
/// verbatim in `Other` and treated as an active deal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DealStatus {
    /// Deal is being worked
    #[default]
    Active,
    /// Deal closed successfully
    Won,
    /// Deal closed without a sale
    Lost,
    /// Deal has stopped progressing
    Stalled,
    /// Any other label supplied by the data source
    Other(String),
}

impl DealStatus {
    pub fn as_str(&self) -> &str {
        match self {
            DealStatus::Active => "active",
            DealStatus::Won => "won",
            DealStatus::Lost => "lost",
            DealStatus::Stalled => "stalled",
            DealStatus::Other(label) => label,
        }
    }

    pub fn is_won(&self) -> bool {
        matches!(self, DealStatus::Won)
    }

    pub fn is_lost(&self) -> bool {
        matches!(self, DealStatus::Lost)
    }

    pub fn is_stalled(&self) -> bool {
        matches!(self, DealStatus::Stalled)
    }

    /// Returns true if the deal is neither closed nor stalled
    pub fn is_open(&self) -> bool {
        matches!(self, DealStatus::Active | DealStatus::Other(_))
    }
}

impl From<&str> for DealStatus {
    fn from(label: &str) -> Self {
        match label {
            "active" => DealStatus::Active,
            "won" => DealStatus::Won,
            "lost" => DealStatus::Lost,
            "stalled" => DealStatus::Stalled,
            other => DealStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for DealStatus {
    fn from(label: String) -> Self {
        DealStatus::from(label.as_str())
    }
}

impl From<DealStatus> for String {
    fn from(status: DealStatus) -> Self {
        match status {
            DealStatus::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for DealStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(DealStatus::from(s))
    }
}

impl fmt::Display for DealStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
