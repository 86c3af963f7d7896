use std::sync::Arc;

use anyhow::Result;

use crate::domain::patient::Patient;
use crate::listing::PatientCriteria;
use crate::repository::DataSource;

#[derive(Clone)]
pub struct PatientService {
    source: Arc<dyn DataSource>,
}

impl PatientService {
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self { source }
    }

    pub fn list(&self, criteria: &PatientCriteria) -> Result<Vec<Patient>> {
        Ok(self.source.list_patients(criteria)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::patient::PatientStatus;
    use crate::listing::Choice;
    use crate::repository::Repository;

    fn setup() -> PatientService {
        let mut dubois = Patient::new(
            1000,
            "Martin",
            "Dubois",
            "martin.dubois@example.com",
            "01 23 45 67 89",
        );
        dubois.treatment_in_progress = true;
        let mut laurent = Patient::new(
            1001,
            "Sophie",
            "Laurent",
            "sophie.laurent@example.com",
            "06 98 76 54 32",
        );
        laurent.status = PatientStatus::Inactive;

        let repository = Repository::new(Vec::new(), vec![dubois, laurent], Vec::new()).unwrap();
        PatientService::new(Arc::new(repository))
    }

    #[test]
    fn test_list_with_query() {
        let service = setup();
        let criteria = PatientCriteria {
            query: "dubois".to_string(),
            ..Default::default()
        };

        let found = service.list(&criteria).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].full_name(), "Martin Dubois");
    }

    #[test]
    fn test_list_with_status() {
        let service = setup();
        let criteria = PatientCriteria {
            status: Choice::Only(PatientStatus::Inactive),
            ..Default::default()
        };

        let found = service.list(&criteria).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].last_name, "Laurent");
    }
}
