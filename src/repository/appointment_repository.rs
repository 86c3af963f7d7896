use parking_lot::RwLock;

use crate::domain::appointment::Appointment;
use crate::domain::validation::RecordValidator;
use crate::error::ClinicError;
use crate::listing::{self, AppointmentCriteria};

/// In-memory appointment store. Records are validated on the way in and
/// ids are assigned by the store on create.
pub struct AppointmentRepository {
    records: RwLock<Vec<Appointment>>,
}

impl AppointmentRepository {
    pub fn new(records: Vec<Appointment>) -> Result<Self, ClinicError> {
        for record in &records {
            RecordValidator::validate_appointment(record)?;
        }
        Ok(Self {
            records: RwLock::new(records),
        })
    }

    pub fn list(&self, criteria: &AppointmentCriteria) -> Vec<Appointment> {
        listing::select(&self.records.read(), criteria)
    }

    pub fn get(&self, id: u32) -> Option<Appointment> {
        self.records.read().iter().find(|a| a.id == id).cloned()
    }

    /// Stores a new appointment, overwriting its id with the next free one.
    pub fn create(&self, mut appointment: Appointment) -> Result<Appointment, ClinicError> {
        RecordValidator::validate_appointment(&appointment)?;
        let mut records = self.records.write();
        appointment.id = records.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        records.push(appointment.clone());
        Ok(appointment)
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::appointment::{AppointmentStatus, TimeOfDay};
    use crate::listing::Choice;
    use chrono::NaiveDate;

    fn appointment(id: u32, name: &str, status: AppointmentStatus) -> Appointment {
        let mut a = Appointment::new(
            id,
            name,
            1000 + id,
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            TimeOfDay::new(9, 0).unwrap(),
        );
        a.status = status;
        a
    }

    #[test]
    fn test_list_applies_criteria() {
        let repo = AppointmentRepository::new(vec![
            appointment(1, "Martin Dubois", AppointmentStatus::Upcoming),
            appointment(2, "Sophie Laurent", AppointmentStatus::Cancelled),
        ])
        .unwrap();

        let criteria = AppointmentCriteria {
            status: Choice::Only(AppointmentStatus::Cancelled),
            ..Default::default()
        };
        let found = repo.list(&criteria);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].patient_name, "Sophie Laurent");
    }

    #[test]
    fn test_new_rejects_malformed_records() {
        let mut bad = appointment(1, "Martin Dubois", AppointmentStatus::Upcoming);
        bad.duration_minutes = 0;
        assert!(AppointmentRepository::new(vec![bad]).is_err());
    }

    #[test]
    fn test_create_assigns_next_id() {
        let repo = AppointmentRepository::new(vec![
            appointment(7, "Martin Dubois", AppointmentStatus::Upcoming),
        ])
        .unwrap();

        let created = repo
            .create(appointment(0, "Sophie Laurent", AppointmentStatus::Upcoming))
            .unwrap();
        assert_eq!(created.id, 8);
        assert_eq!(repo.len(), 2);
        assert_eq!(repo.get(8).unwrap().patient_name, "Sophie Laurent");
    }
}
