mod appointment_service;
mod clock;
mod dashboard_service;
mod doctor_service;
mod export;
mod patient_service;

pub use appointment_service::AppointmentService;
pub use clock::{format_date_line, format_time_line, HeaderClock};
pub use dashboard_service::{DashboardService, DashboardSummary};
pub use doctor_service::DoctorService;
pub use export::{ExportFormat, ExportService};
pub use patient_service::PatientService;
