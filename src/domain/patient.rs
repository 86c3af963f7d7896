use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PatientStatus {
    Active,
    Inactive,
}

impl PatientStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PatientStatus::Active => "Actif",
            PatientStatus::Inactive => "Inactif",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub last_appointment: Option<NaiveDate>,
    pub next_appointment: Option<NaiveDate>,
    pub status: PatientStatus,
    pub treatment_in_progress: bool,
}

impl Patient {
    pub fn new(
        id: u32,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            phone: phone.into(),
            last_appointment: None,
            next_appointment: None,
            status: PatientStatus::Active,
            treatment_in_progress: false,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
