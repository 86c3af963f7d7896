//! Filtering and day-grouping of clinic lists.
//!
//! Every page works the same way: an in-memory list, a free-text query
//! matched case-insensitively against a few designated fields, and one or
//! more categorical selectors that default to "all". Filtering never
//! mutates its input and an empty result is an ordinary value.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::appointment::{Appointment, AppointmentStatus};
use crate::domain::doctor::Doctor;
use crate::domain::patient::{Patient, PatientStatus};

/// A categorical selector: `All` is the "all" sentinel and admits every
/// record; `Only` admits exact matches on the field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Choice<T> {
    All,
    Only(T),
}

impl<T: PartialEq> Choice<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Choice::All => true,
            Choice::Only(wanted) => wanted == value,
        }
    }
}

impl<T> Default for Choice<T> {
    fn default() -> Self {
        Choice::All
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(needle)
}

/// One page's worth of filter state.
pub trait Criteria<T> {
    fn admits(&self, record: &T) -> bool;
}

/// Applies `criteria` to `records`, preserving input order. Pure and total:
/// the result is a subset of the input, possibly empty.
pub fn select<T, C>(records: &[T], criteria: &C) -> Vec<T>
where
    T: Clone,
    C: Criteria<T>,
{
    records
        .iter()
        .filter(|record| criteria.admits(record))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppointmentCriteria {
    pub query: String,
    pub status: Choice<AppointmentStatus>,
}

impl Criteria<Appointment> for AppointmentCriteria {
    fn admits(&self, appointment: &Appointment) -> bool {
        let needle = self.query.trim().to_lowercase();
        let matches_search = contains_ignore_case(&appointment.patient_name, &needle)
            || contains_ignore_case(&appointment.treatment, &needle);

        matches_search && self.status.admits(&appointment.status)
    }
}

/// Treatment-progress selector on the patients page, mapped onto the
/// independent boolean flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TreatmentProgress {
    InProgress,
    Completed,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatientCriteria {
    pub query: String,
    pub status: Choice<PatientStatus>,
    pub treatment: Choice<TreatmentProgress>,
}

impl Criteria<Patient> for PatientCriteria {
    fn admits(&self, patient: &Patient) -> bool {
        let needle = self.query.trim().to_lowercase();
        let matches_search = contains_ignore_case(&patient.full_name(), &needle)
            || contains_ignore_case(&patient.email, &needle)
            || contains_ignore_case(&patient.phone, &needle);

        let matches_treatment = match self.treatment {
            Choice::All => true,
            Choice::Only(TreatmentProgress::InProgress) => patient.treatment_in_progress,
            Choice::Only(TreatmentProgress::Completed) => !patient.treatment_in_progress,
        };

        matches_search && self.status.admits(&patient.status) && matches_treatment
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DoctorCriteria {
    pub query: String,
    pub speciality: Choice<String>,
}

impl Criteria<Doctor> for DoctorCriteria {
    fn admits(&self, doctor: &Doctor) -> bool {
        let needle = self.query.trim().to_lowercase();
        let matches_search = contains_ignore_case(&doctor.name, &needle)
            || contains_ignore_case(&doctor.speciality, &needle);

        matches_search && self.speciality.admits(&doctor.speciality)
    }
}

/// Appointments sharing one calendar date, ordered by slot time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayBucket {
    pub date: NaiveDate,
    pub appointments: Vec<Appointment>,
}

impl DayBucket {
    /// Stable, locale-independent key; ISO dates sort correctly as strings.
    pub fn key(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Partitions appointments into per-day buckets. Buckets come out in
/// ascending date order; within a bucket, ascending slot time.
pub fn group_by_day(appointments: Vec<Appointment>) -> Vec<DayBucket> {
    let mut by_date: BTreeMap<NaiveDate, Vec<Appointment>> = BTreeMap::new();
    for appointment in appointments {
        by_date.entry(appointment.date).or_default().push(appointment);
    }

    by_date
        .into_iter()
        .map(|(date, mut appointments)| {
            appointments.sort_by_key(|a| a.time);
            DayBucket { date, appointments }
        })
        .collect()
}
