use std::sync::Arc;

use anyhow::Result;
use csv::Writer;

use crate::listing::{AppointmentCriteria, PatientCriteria};
use crate::repository::DataSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

/// Exports filtered lists for the secretariat (spreadsheet imports,
/// hand-off to accounting). Output is a string; writing it anywhere is the
/// caller's business.
pub struct ExportService {
    source: Arc<dyn DataSource>,
}

impl ExportService {
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self { source }
    }

    pub fn export_appointments(
        &self,
        criteria: &AppointmentCriteria,
        format: ExportFormat,
    ) -> Result<String> {
        match format {
            ExportFormat::Json => self.appointments_to_json(criteria),
            ExportFormat::Csv => self.appointments_to_csv(criteria),
        }
    }

    pub fn export_patients(
        &self,
        criteria: &PatientCriteria,
        format: ExportFormat,
    ) -> Result<String> {
        match format {
            ExportFormat::Json => self.patients_to_json(criteria),
            ExportFormat::Csv => self.patients_to_csv(criteria),
        }
    }

    fn appointments_to_json(&self, criteria: &AppointmentCriteria) -> Result<String> {
        let appointments = self.source.list_appointments(criteria)?;
        Ok(serde_json::to_string_pretty(&appointments)?)
    }

    fn appointments_to_csv(&self, criteria: &AppointmentCriteria) -> Result<String> {
        let appointments = self.source.list_appointments(criteria)?;

        let mut wtr = Writer::from_writer(vec![]);
        wtr.write_record([
            "ID",
            "Patient",
            "Patient ID",
            "Date",
            "Heure",
            "Durée (min)",
            "Traitement",
            "Statut",
            "Notes",
        ])?;

        for appointment in appointments {
            wtr.write_record([
                appointment.id.to_string(),
                appointment.patient_name,
                appointment.patient_id.to_string(),
                appointment.date.format("%Y-%m-%d").to_string(),
                appointment.time.to_string(),
                appointment.duration_minutes.to_string(),
                appointment.treatment,
                appointment.status.as_str().to_string(),
                appointment.notes.unwrap_or_default(),
            ])?;
        }

        Ok(String::from_utf8(wtr.into_inner()?)?)
    }

    fn patients_to_json(&self, criteria: &PatientCriteria) -> Result<String> {
        let patients = self.source.list_patients(criteria)?;
        Ok(serde_json::to_string_pretty(&patients)?)
    }

    fn patients_to_csv(&self, criteria: &PatientCriteria) -> Result<String> {
        let patients = self.source.list_patients(criteria)?;

        let mut wtr = Writer::from_writer(vec![]);
        wtr.write_record([
            "ID",
            "Prénom",
            "Nom",
            "Email",
            "Téléphone",
            "Dernier RDV",
            "Prochain RDV",
            "Statut",
            "Traitement en cours",
        ])?;

        for patient in patients {
            wtr.write_record([
                patient.id.to_string(),
                patient.first_name,
                patient.last_name,
                patient.email,
                patient.phone,
                patient
                    .last_appointment
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_default(),
                patient
                    .next_appointment
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_default(),
                patient.status.label().to_string(),
                if patient.treatment_in_progress { "oui" } else { "non" }.to_string(),
            ])?;
        }

        Ok(String::from_utf8(wtr.into_inner()?)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::appointment::Appointment;
    use crate::repository::{sample, Repository};
    use chrono::NaiveDate;

    fn setup() -> ExportService {
        let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let repository = sample::sample_repository(42, today, 10, 12).unwrap();
        ExportService::new(Arc::new(repository))
    }

    #[test]
    fn test_appointments_csv_has_header_and_rows() {
        let service = setup();
        let csv = service
            .export_appointments(&AppointmentCriteria::default(), ExportFormat::Csv)
            .unwrap();

        let mut lines = csv.lines();
        assert!(lines.next().unwrap().starts_with("ID,Patient,Patient ID,Date,Heure"));
        assert_eq!(lines.count(), 12);
    }

    #[test]
    fn test_appointments_json_round_trips() {
        let service = setup();
        let json = service
            .export_appointments(&AppointmentCriteria::default(), ExportFormat::Json)
            .unwrap();

        let parsed: Vec<Appointment> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 12);
    }

    #[test]
    fn test_patients_csv_uses_french_labels() {
        let service = setup();
        let csv = service
            .export_patients(&PatientCriteria::default(), ExportFormat::Csv)
            .unwrap();

        assert!(csv.starts_with("ID,Prénom,Nom,Email,Téléphone"));
    }
}
