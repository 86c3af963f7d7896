use std::sync::Arc;

use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::appointment::AppointmentStatus;
use crate::listing::{AppointmentCriteria, PatientCriteria};
use crate::repository::DataSource;

/// The stat-card row at the top of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub patient_count: usize,
    pub appointments_today: usize,
    pub upcoming_appointments: usize,
    pub treatments_in_progress: usize,
}

#[derive(Clone)]
pub struct DashboardService {
    source: Arc<dyn DataSource>,
}

impl DashboardService {
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self { source }
    }

    pub fn summary(&self, today: NaiveDate) -> Result<DashboardSummary> {
        let patients = self.source.list_patients(&PatientCriteria::default())?;
        let appointments = self
            .source
            .list_appointments(&AppointmentCriteria::default())?;

        Ok(DashboardSummary {
            patient_count: patients.len(),
            appointments_today: appointments
                .iter()
                .filter(|a| a.is_on(today) && a.status != AppointmentStatus::Cancelled)
                .count(),
            upcoming_appointments: appointments
                .iter()
                .filter(|a| a.status == AppointmentStatus::Upcoming)
                .count(),
            treatments_in_progress: patients
                .iter()
                .filter(|p| p.treatment_in_progress)
                .count(),
        })
    }
}
