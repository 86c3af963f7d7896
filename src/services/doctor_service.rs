use std::sync::Arc;

use anyhow::Result;

use crate::domain::doctor::Doctor;
use crate::listing::DoctorCriteria;
use crate::repository::DataSource;

#[derive(Clone)]
pub struct DoctorService {
    source: Arc<dyn DataSource>,
}

impl DoctorService {
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self { source }
    }

    pub fn list(&self, criteria: &DoctorCriteria) -> Result<Vec<Doctor>> {
        Ok(self.source.list_doctors(criteria)?)
    }

    /// Distinct specialities, in roster order, for the filter dropdown.
    pub fn specialities(&self) -> Result<Vec<String>> {
        let doctors = self.source.list_doctors(&DoctorCriteria::default())?;
        let mut seen = Vec::new();
        for doctor in doctors {
            if !seen.contains(&doctor.speciality) {
                seen.push(doctor.speciality);
            }
        }
        Ok(seen)
    }
}
