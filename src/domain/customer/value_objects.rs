use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Customer Value Objects
// ============================================================================

/// Government-issued document kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentType {
    Dni,
    Passport,
    Cedula,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Dni => "DNI",
            DocumentType::Passport => "PASSPORT",
            DocumentType::Cedula => "CEDULA",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DNI" => Ok(DocumentType::Dni),
            "PASSPORT" => Ok(DocumentType::Passport),
            "CEDULA" => Ok(DocumentType::Cedula),
            other => Err(format!("unknown document type: {}", other)),
        }
    }
}

/// Customer status in the system
///
/// Every status may move to every other one; `Inactive` is also the target of
/// a soft delete and can be left again through an explicit status change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CustomerStatus {
    Pending,
    Active,
    Suspended,
    Inactive,
}

impl CustomerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerStatus::Pending => "PENDING",
            CustomerStatus::Active => "ACTIVE",
            CustomerStatus::Suspended => "SUSPENDED",
            CustomerStatus::Inactive => "INACTIVE",
        }
    }
}

impl Default for CustomerStatus {
    fn default() -> Self {
        CustomerStatus::Pending
    }
}

impl fmt::Display for CustomerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CustomerStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(CustomerStatus::Pending),
            "ACTIVE" => Ok(CustomerStatus::Active),
            "SUSPENDED" => Ok(CustomerStatus::Suspended),
            "INACTIVE" => Ok(CustomerStatus::Inactive),
            other => Err(format!("unknown customer status: {}", other)),
        }
    }
}
