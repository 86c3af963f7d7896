use parking_lot::RwLock;

use crate::domain::patient::Patient;
use crate::domain::validation::RecordValidator;
use crate::error::ClinicError;
use crate::listing::{self, PatientCriteria};

pub struct PatientRepository {
    records: RwLock<Vec<Patient>>,
}

impl PatientRepository {
    pub fn new(records: Vec<Patient>) -> Result<Self, ClinicError> {
        for record in &records {
            RecordValidator::validate_patient(record)?;
        }
        Ok(Self {
            records: RwLock::new(records),
        })
    }

    pub fn list(&self, criteria: &PatientCriteria) -> Vec<Patient> {
        listing::select(&self.records.read(), criteria)
    }

    pub fn get(&self, id: u32) -> Option<Patient> {
        self.records.read().iter().find(|p| p.id == id).cloned()
    }

    /// Stores a new patient, overwriting its id with the next free one.
    /// Ids start at 1000 to match the numbering of the seeded directory.
    pub fn create(&self, mut patient: Patient) -> Result<Patient, ClinicError> {
        RecordValidator::validate_patient(&patient)?;
        let mut records = self.records.write();
        patient.id = records.iter().map(|p| p.id).max().unwrap_or(999) + 1;
        records.push(patient.clone());
        Ok(patient)
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

    fn patient(id: u32, first: &str, last: &str) -> Patient {
        Patient::new(
            id,
            first,
            last,
            format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
            "01 23 45 67 89",
        )
    }

    #[test]
    fn test_search_by_name() {
        let repo = PatientRepository::new(vec![
            patient(1000, "Martin", "Dubois"),
            patient(1001, "Sophie", "Laurent"),
        ])
        .unwrap();

        let criteria = PatientCriteria {
            query: "dubois".to_string(),
            ..Default::default()
        };
        let found = repo.list(&criteria);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].full_name(), "Martin Dubois");
    }

    #[test]
    fn test_new_rejects_bad_email() {
        let mut bad = patient(1000, "Martin", "Dubois");
        bad.email = "nope".to_string();
        assert!(PatientRepository::new(vec![bad]).is_err());
    }

    #[test]
    fn test_create_numbers_from_one_thousand() {
        let repo = PatientRepository::new(Vec::new()).unwrap();
        let created = repo.create(patient(0, "Emma", "Lefevre")).unwrap();
        assert_eq!(created.id, 1000);
        assert_eq!(repo.get(1000).unwrap().last_name, "Lefevre");
    }
}
