//! Employee records as delivered by the backend API.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::AppError;

/// Access role of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Supervisor,
    Employee,
}

impl Role {
    /// Lowercase label used by the backend and in filters.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Supervisor => "supervisor",
            Role::Employee => "employee",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "supervisor" => Ok(Role::Supervisor),
            "employee" => Ok(Role::Employee),
            other => Err(AppError::parse(format!("Unknown role '{other}'"))),
        }
    }
}

/// Named group of employees, independent of department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Squad {
    pub id: String,
    pub name: String,
}

/// Employee record. Read-only from the directory's point of view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    pub role: Role,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub squads: Vec<Squad>,
    #[serde(default)]
    pub date_started: Option<DateTime<Utc>>,
}

impl EmployeeRecord {
    /// "First Last", the key used for name search and sorting.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Department label, if set and non-empty.
    pub fn department_label(&self) -> Option<&str> {
        self.department.as_deref().filter(|d| !d.is_empty())
    }

    /// Iterate over squad names.
    pub fn squad_names(&self) -> impl Iterator<Item = &str> {
        self.squads.iter().map(|s| s.name.as_str())
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Squad>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Squad>>::deserialize(deserializer)?.unwrap_or_default())
}
