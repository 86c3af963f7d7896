use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ClinicError;

/// Minute-of-day wall time for appointment slots.
///
/// Stored as minutes since midnight so ordering is numeric; the display
/// form is always zero-padded "HH:MM" even when the input was not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    minutes: u16,
}

impl TimeOfDay {
    pub fn new(hour: u8, minute: u8) -> Result<Self, ClinicError> {
        if hour > 23 || minute > 59 {
            return Err(ClinicError::InvalidTime(format!("{hour}:{minute:02}")));
        }
        Ok(Self {
            minutes: u16::from(hour) * 60 + u16::from(minute),
        })
    }

    pub fn hour(&self) -> u8 {
        (self.minutes / 60) as u8
    }

    pub fn minute(&self) -> u8 {
        (self.minutes % 60) as u8
    }

    pub fn minutes_since_midnight(&self) -> u16 {
        self.minutes
    }
}

impl FromStr for TimeOfDay {
    type Err = ClinicError;

    // Accepts both "09:00" and the unpadded "9:00" found in older exports.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hour, minute) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| ClinicError::InvalidTime(s.to_string()))?;
        let hour: u8 = hour
            .parse()
            .map_err(|_| ClinicError::InvalidTime(s.to_string()))?;
        let minute: u8 = minute
            .parse()
            .map_err(|_| ClinicError::InvalidTime(s.to_string()))?;
        Self::new(hour, minute)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = ClinicError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Upcoming,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Upcoming => "upcoming",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
        }
    }

    /// French label shown on the status badge.
    pub fn label(&self) -> &'static str {
        match self {
            AppointmentStatus::Upcoming => "À venir",
            AppointmentStatus::Completed => "Terminé",
            AppointmentStatus::Cancelled => "Annulé",
        }
    }
}

impl FromStr for AppointmentStatus {
    type Err = ClinicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "upcoming" => Ok(AppointmentStatus::Upcoming),
            "completed" => Ok(AppointmentStatus::Completed),
            "cancelled" => Ok(AppointmentStatus::Cancelled),
            other => Err(ClinicError::validation(
                "status",
                format!("unknown appointment status '{other}'"),
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    pub id: u32,
    pub patient_name: String,
    pub patient_id: u32,
    pub date: NaiveDate,
    pub time: TimeOfDay,
    pub duration_minutes: u32,
    pub treatment: String,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
}

impl Appointment {
    pub fn new(
        id: u32,
        patient_name: impl Into<String>,
        patient_id: u32,
        date: NaiveDate,
        time: TimeOfDay,
    ) -> Self {
        Self {
            id,
            patient_name: patient_name.into(),
            patient_id,
            date,
            time,
            duration_minutes: 30,
            treatment: "Consultation".to_string(),
            status: AppointmentStatus::Upcoming,
            notes: None,
        }
    }

    /// Canonical ordering key: day first, then slot within the day.
    pub fn sort_key(&self) -> (NaiveDate, TimeOfDay) {
        (self.date, self.time)
    }

    pub fn is_on(&self, date: NaiveDate) -> bool {
        self.date == date
    }
}
