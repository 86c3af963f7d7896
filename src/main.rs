use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use chrono::Local;
use tokio::time::Duration;
use tracing::info;

use dentio::config::ClinicConfig;
use dentio::listing::{AppointmentCriteria, DoctorCriteria, PatientCriteria};
use dentio::repository::{sample, Repository};
use dentio::routes::Route;
use dentio::services::{
    AppointmentService, DashboardService, DoctorService, HeaderClock, PatientService,
};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let path = args.first().map(String::as_str).unwrap_or("/");
    let query = args.get(1).cloned().unwrap_or_default();

    let config = ClinicConfig::load(Path::new("dentio.toml"))?;
    let today = Local::now().date_naive();
    let seed: u64 = rand::random();
    info!(seed, "seeding demo clinic");

    let repository = Arc::new(sample::sample_repository(
        seed,
        today,
        config.sample_patients,
        config.sample_appointments,
    )?);

    let clock = HeaderClock::start(Duration::from_secs(config.clock_refresh_secs));
    println!("{} — {} {}", config.clinic_name, clock.date_line(), clock.time_line());
    println!();

    let route = Route::parse(path);
    match route {
        Route::Landing => render_landing(&config),
        Route::Dashboard => render_dashboard(&repository, &query)?,
        Route::Appointments => render_appointments(&repository, &query)?,
        Route::Patients => render_patients(&repository, &query)?,
        Route::Doctors => render_doctors(&repository, &query)?,
        Route::NotFound => render_not_found(path),
    }

    clock.stop();
    Ok(())
}

fn render_landing(config: &ClinicConfig) {
    println!("Bienvenue sur {}, votre assistant de gestion dentaire.", config.clinic_name);
    println!();
    for route in Route::sidebar() {
        println!("  {:<18} {}", route.path(), route.title());
    }
}

fn render_dashboard(repository: &Arc<Repository>, _query: &str) -> Result<()> {
    println!("{}", Route::Dashboard.title());
    println!();

    let today = Local::now().date_naive();
    let summary = DashboardService::new(repository.clone()).summary(today)?;
    println!("  Patients              {}", summary.patient_count);
    println!("  Rendez-vous du jour   {}", summary.appointments_today);
    println!("  Rendez-vous à venir   {}", summary.upcoming_appointments);
    println!("  Traitements en cours  {}", summary.treatments_in_progress);
    println!();

    println!("Calendrier (14 jours)");
    let counts = AppointmentService::new(repository.clone()).calendar_counts(today, 14)?;
    for (date, count) in counts {
        println!("  {date}  {count} rendez-vous");
    }
    println!();

    println!("Tâches à faire");
    let todos = sample::sample_todos();
    for item in todos.items() {
        let mark = if item.completed { "x" } else { " " };
        println!("  [{mark}] {}", item.text);
    }
    println!();

    let notifications = sample::sample_notifications();
    println!("Notifications ({} non lues)", notifications.unread_count());
    for notification in notifications.items() {
        let mark = if notification.is_read { " " } else { "*" };
        println!("  {mark} {}", notification.message);
    }
    Ok(())
}

fn render_appointments(repository: &Arc<Repository>, query: &str) -> Result<()> {
    println!("{}", Route::Appointments.title());
    println!();

    let criteria = AppointmentCriteria {
        query: query.to_string(),
        ..Default::default()
    };
    let buckets = AppointmentService::new(repository.clone()).agenda(&criteria)?;

    if buckets.is_empty() {
        println!("Aucun rendez-vous trouvé");
        println!("Essayez de modifier vos filtres ou votre recherche");
        return Ok(());
    }

    for bucket in buckets {
        println!("{} ({} rendez-vous)", bucket.key(), bucket.appointments.len());
        for appointment in &bucket.appointments {
            println!(
                "  {} ({} min)  {:<24} {:<22} [{}]",
                appointment.time,
                appointment.duration_minutes,
                appointment.patient_name,
                appointment.treatment,
                appointment.status.label(),
            );
            if let Some(notes) = &appointment.notes {
                println!("      {notes}");
            }
        }
        println!();
    }
    Ok(())
}

fn render_patients(repository: &Arc<Repository>, query: &str) -> Result<()> {
    println!("{}", Route::Patients.title());
    println!();

    let criteria = PatientCriteria {
        query: query.to_string(),
        ..Default::default()
    };
    let patients = PatientService::new(repository.clone()).list(&criteria)?;

    if patients.is_empty() {
        println!("Aucun patient trouvé");
        println!("Essayez de modifier vos filtres ou votre recherche");
        return Ok(());
    }

    for patient in patients {
        let treatment = if patient.treatment_in_progress {
            " — traitement en cours"
        } else {
            ""
        };
        println!(
            "  #{:<5} {:<24} {:<34} {}  [{}]{}",
            patient.id,
            patient.full_name(),
            patient.email,
            patient.phone,
            patient.status.label(),
            treatment,
        );
    }
    Ok(())
}

fn render_doctors(repository: &Arc<Repository>, query: &str) -> Result<()> {
    println!("{}", Route::Doctors.title());
    println!();

    let criteria = DoctorCriteria {
        query: query.to_string(),
        ..Default::default()
    };
    let doctors = DoctorService::new(repository.clone()).list(&criteria)?;

    if doctors.is_empty() {
        println!("Aucun docteur trouvé");
        return Ok(());
    }

    for doctor in doctors {
        println!(
            "  {:<22} {:<24} {} ans d'expérience  [{}]",
            doctor.name,
            doctor.speciality,
            doctor.experience_years,
            doctor.status.label(),
        );
        println!(
            "      {} — {} | {} patients",
            doctor.availability.days.join(", "),
            doctor.availability.hours,
            doctor.patient_count,
        );
    }
    Ok(())
}

fn render_not_found(path: &str) {
    println!("404 — {}", Route::NotFound.title());
    println!("Le chemin '{path}' n'existe pas.");
    println!("Retour à l'accueil : /");
}
