use regex::Regex;

use crate::domain::appointment::Appointment;
use crate::domain::doctor::Doctor;
use crate::domain::patient::Patient;
use crate::error::ClinicError;

/// Boundary validation for records entering a repository. Malformed data
/// is rejected here rather than carried through to the display layer.
pub struct RecordValidator;

impl RecordValidator {
    pub fn validate_appointment(appointment: &Appointment) -> Result<(), ClinicError> {
        if appointment.patient_name.trim().is_empty() {
            return Err(ClinicError::validation("patient_name", "cannot be empty"));
        }
        if appointment.treatment.trim().is_empty() {
            return Err(ClinicError::validation("treatment", "cannot be empty"));
        }
        if appointment.duration_minutes == 0 {
            return Err(ClinicError::validation("duration_minutes", "must be positive"));
        }
        Ok(())
    }

    pub fn validate_patient(patient: &Patient) -> Result<(), ClinicError> {
        if patient.first_name.trim().is_empty() {
            return Err(ClinicError::validation("first_name", "cannot be empty"));
        }
        if patient.last_name.trim().is_empty() {
            return Err(ClinicError::validation("last_name", "cannot be empty"));
        }
        let email_pattern = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
        if !email_pattern.is_match(patient.email.trim()) {
            return Err(ClinicError::validation(
                "email",
                format!("'{}' is not a valid address", patient.email),
            ));
        }
        if patient.phone.trim().is_empty() {
            return Err(ClinicError::validation("phone", "cannot be empty"));
        }
        Ok(())
    }

    pub fn validate_doctor(doctor: &Doctor) -> Result<(), ClinicError> {
        if doctor.name.trim().is_empty() {
            return Err(ClinicError::validation("name", "cannot be empty"));
        }
        if doctor.speciality.trim().is_empty() {
            return Err(ClinicError::validation("speciality", "cannot be empty"));
        }
        Ok(())
    }
}
