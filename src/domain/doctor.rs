use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum DoctorStatus {
    Active,
    Busy,
    OnLeave,
}

impl DoctorStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DoctorStatus::Active => "Disponible",
            DoctorStatus::Busy => "Occupé",
            DoctorStatus::OnLeave => "En congé",
        }
    }
}

/// Working days plus the opening-hours line shown on the doctor card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Availability {
    pub days: Vec<String>,
    pub hours: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Doctor {
    pub id: u32,
    pub name: String,
    pub speciality: String,
    pub experience_years: u32,
    pub availability: Availability,
    pub skills: Vec<String>,
    pub patient_count: u32,
    pub status: DoctorStatus,
}

impl Doctor {
    pub fn new(id: u32, name: impl Into<String>, speciality: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            speciality: speciality.into(),
            experience_years: 0,
            availability: Availability {
                days: Vec::new(),
                hours: String::new(),
            },
            skills: Vec::new(),
            patient_count: 0,
            status: DoctorStatus::Active,
        }
    }
}
