use parking_lot::RwLock;

use crate::domain::doctor::Doctor;
use crate::domain::validation::RecordValidator;
use crate::error::ClinicError;
use crate::listing::{self, DoctorCriteria};

pub struct DoctorRepository {
    records: RwLock<Vec<Doctor>>,
}

impl DoctorRepository {
    pub fn new(records: Vec<Doctor>) -> Result<Self, ClinicError> {
        for record in &records {
            RecordValidator::validate_doctor(record)?;
        }
        Ok(Self {
            records: RwLock::new(records),
        })
    }

    pub fn list(&self, criteria: &DoctorCriteria) -> Vec<Doctor> {
        listing::select(&self.records.read(), criteria)
    }

    pub fn get(&self, id: u32) -> Option<Doctor> {
        self.records.read().iter().find(|d| d.id == id).cloned()
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
    use crate::listing::Choice;

    #[test]
    fn test_list_by_speciality_and_get() {
        let repo = DoctorRepository::new(vec![
            Doctor::new(1, "Dr. Sophie Martin", "Dentiste généraliste"),
            Doctor::new(2, "Dr. Thomas Dubois", "Orthodontiste"),
        ])
        .unwrap();

        let criteria = DoctorCriteria {
            speciality: Choice::Only("Orthodontiste".to_string()),
            ..Default::default()
        };
        assert_eq!(repo.list(&criteria).len(), 1);
        assert_eq!(repo.get(2).unwrap().name, "Dr. Thomas Dubois");
        assert!(repo.get(99).is_none());
    }

    #[test]
    fn test_new_rejects_blank_speciality() {
        let bad = Doctor::new(1, "Dr. Sophie Martin", "  ");
        assert!(DoctorRepository::new(vec![bad]).is_err());
    }
}
