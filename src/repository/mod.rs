pub mod appointment_repository;
pub mod doctor_repository;
pub mod patient_repository;
pub mod sample;

use crate::domain::appointment::Appointment;
use crate::domain::doctor::Doctor;
use crate::domain::patient::Patient;
use crate::error::ClinicError;
use crate::listing::{AppointmentCriteria, DoctorCriteria, PatientCriteria};

/// Read contract the pages depend on. The demo backs it with generated
/// in-memory data; a production deployment would put a real store here.
pub trait DataSource: Send + Sync {
    fn list_appointments(&self, criteria: &AppointmentCriteria) -> Result<Vec<Appointment>, ClinicError>;
    fn list_patients(&self, criteria: &PatientCriteria) -> Result<Vec<Patient>, ClinicError>;
    fn list_doctors(&self, criteria: &DoctorCriteria) -> Result<Vec<Doctor>, ClinicError>;
}

pub struct Repository {
    pub appointments: appointment_repository::AppointmentRepository,
    pub patients: patient_repository::PatientRepository,
    pub doctors: doctor_repository::DoctorRepository,
}

impl Repository {
    pub fn new(
        appointments: Vec<Appointment>,
        patients: Vec<Patient>,
        doctors: Vec<Doctor>,
    ) -> Result<Self, ClinicError> {
        Ok(Self {
            appointments: appointment_repository::AppointmentRepository::new(appointments)?,
            patients: patient_repository::PatientRepository::new(patients)?,
            doctors: doctor_repository::DoctorRepository::new(doctors)?,
        })
    }
}

impl DataSource for Repository {
    fn list_appointments(&self, criteria: &AppointmentCriteria) -> Result<Vec<Appointment>, ClinicError> {
        Ok(self.appointments.list(criteria))
    }

    fn list_patients(&self, criteria: &PatientCriteria) -> Result<Vec<Patient>, ClinicError> {
        Ok(self.patients.list(criteria))
    }

    fn list_doctors(&self, criteria: &DoctorCriteria) -> Result<Vec<Doctor>, ClinicError> {
        Ok(self.doctors.list(criteria))
    }
}
