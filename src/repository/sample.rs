//! Seeded demo-data producers. Nothing here is part of the durable design:
//! the contract is "a plausible-looking clinic for the demo", deterministic
//! for a given seed so tests can pin expectations.

use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::appointment::{Appointment, AppointmentStatus, TimeOfDay};
use crate::domain::doctor::{Availability, Doctor, DoctorStatus};
use crate::domain::notification::NotificationFeed;
use crate::domain::patient::{Patient, PatientStatus};
use crate::domain::todo::TodoList;
use crate::error::ClinicError;
use crate::repository::Repository;

pub const TREATMENTS: [&str; 7] = [
    "Consultation",
    "Détartrage",
    "Traitement de canal",
    "Extraction",
    "Pose de couronne",
    "Blanchiment",
    "Contrôle",
];

const FIRST_NAMES: [&str; 15] = [
    "Martin", "Sophie", "Philippe", "Isabelle", "Thomas", "Emma", "Lucas", "Camille", "Hugo",
    "Julie", "Nicolas", "Aurélie", "Pierre", "Marie", "Antoine",
];

const LAST_NAMES: [&str; 15] = [
    "Dubois", "Laurent", "Moreau", "Bernard", "Petit", "Lefevre", "Girard", "Fournier", "Morel",
    "Lambert", "Rousseau", "Vincent", "Dupont", "Bertrand", "Simon",
];

const DURATIONS: [u32; 3] = [30, 45, 60];

fn pick<'a>(rng: &mut StdRng, values: &[&'a str]) -> &'a str {
    values[rng.gen_range(0..values.len())]
}

pub fn sample_patients(rng: &mut StdRng, count: usize, today: NaiveDate) -> Vec<Patient> {
    (0..count)
        .map(|i| {
            let first_name = pick(rng, &FIRST_NAMES);
            let last_name = pick(rng, &LAST_NAMES);
            let phone = format!(
                "0{} {:02} {:02} {:02} {:02}",
                rng.gen_range(1..9),
                rng.gen_range(0..100),
                rng.gen_range(0..100),
                rng.gen_range(0..100),
                rng.gen_range(0..100),
            );

            let mut patient = Patient::new(
                1000 + i as u32,
                first_name,
                last_name,
                format!(
                    "{}.{}@example.com",
                    first_name.to_lowercase(),
                    last_name.to_lowercase()
                ),
                phone,
            );
            if rng.gen_bool(0.8) {
                patient.last_appointment = Some(today - Duration::days(rng.gen_range(0..90)));
            }
            if rng.gen_bool(0.6) {
                patient.next_appointment = Some(today + Duration::days(rng.gen_range(0..60)));
            }
            if rng.gen_bool(0.1) {
                patient.status = PatientStatus::Inactive;
            }
            patient.treatment_in_progress = rng.gen_bool(0.4);
            patient
        })
        .collect()
}

fn status_for(rng: &mut StdRng, date: NaiveDate, today: NaiveDate) -> AppointmentStatus {
    if date < today {
        if rng.gen_bool(0.9) {
            AppointmentStatus::Completed
        } else {
            AppointmentStatus::Cancelled
        }
    } else if rng.gen_bool(0.9) {
        AppointmentStatus::Upcoming
    } else {
        AppointmentStatus::Cancelled
    }
}

/// Three appointments a day starting from `today`, 8h-18h slots on the hour
/// or half hour. Every appointment references a patient from `patients`.
pub fn sample_appointments(
    rng: &mut StdRng,
    patients: &[Patient],
    count: usize,
    today: NaiveDate,
) -> Result<Vec<Appointment>, ClinicError> {
    if patients.is_empty() {
        return Err(ClinicError::validation(
            "patients",
            "appointments need at least one patient to reference",
        ));
    }
    let mut appointments = Vec::with_capacity(count);

    for i in 0..count {
        let date = today + Duration::days((i / 3) as i64);
        let hour = 8 + rng.gen_range(0..10) as u8;
        let minute = if rng.gen_bool(0.5) { 0 } else { 30 };
        let patient = &patients[rng.gen_range(0..patients.len())];

        let mut appointment = Appointment::new(
            i as u32 + 1,
            patient.full_name(),
            patient.id,
            date,
            TimeOfDay::new(hour, minute)?,
        );
        appointment.duration_minutes = DURATIONS[rng.gen_range(0..DURATIONS.len())];
        appointment.treatment = pick(rng, &TREATMENTS).to_string();
        appointment.status = status_for(rng, date, today);
        if rng.gen_bool(0.3) {
            appointment.notes = Some("Notes spécifiques pour ce rendez-vous...".to_string());
        }
        appointments.push(appointment);
    }

    appointments.sort_by_key(|a| a.sort_key());
    Ok(appointments)
}

/// The medical team is a fixed roster, not a random draw.
pub fn sample_doctors() -> Vec<Doctor> {
    fn doctor(
        id: u32,
        name: &str,
        speciality: &str,
        experience_years: u32,
        days: &[&str],
        hours: &str,
        skills: &[&str],
        patient_count: u32,
        status: DoctorStatus,
    ) -> Doctor {
        Doctor {
            id,
            name: name.to_string(),
            speciality: speciality.to_string(),
            experience_years,
            availability: Availability {
                days: days.iter().map(|d| d.to_string()).collect(),
                hours: hours.to_string(),
            },
            skills: skills.iter().map(|s| s.to_string()).collect(),
            patient_count,
            status,
        }
    }

    vec![
        doctor(
            1,
            "Dr. Sophie Martin",
            "Dentiste généraliste",
            12,
            &["Lundi", "Mercredi", "Vendredi"],
            "9h00 - 17h00",
            &["Soins préventifs", "Restaurations dentaires", "Soins des gencives"],
            120,
            DoctorStatus::Active,
        ),
        doctor(
            2,
            "Dr. Thomas Dubois",
            "Orthodontiste",
            15,
            &["Mardi", "Jeudi", "Samedi"],
            "8h30 - 16h30",
            &["Alignement dentaire", "Correction de morsure", "Bagues transparentes"],
            95,
            DoctorStatus::Busy,
        ),
        doctor(
            3,
            "Dr. Emma Laurent",
            "Chirurgien-dentiste",
            18,
            &["Lundi", "Mardi", "Jeudi"],
            "10h00 - 18h00",
            &["Implants dentaires", "Extractions complexes", "Chirurgie buccale"],
            85,
            DoctorStatus::Active,
        ),
        doctor(
            4,
            "Dr. Antoine Moreau",
            "Endodontiste",
            10,
            &["Mercredi", "Vendredi", "Samedi"],
            "9h00 - 17h00",
            &["Traitement de canal", "Soins dentaires complexes", "Gestion de la douleur"],
            70,
            DoctorStatus::OnLeave,
        ),
        doctor(
            5,
            "Dr. Julie Bernard",
            "Parodontiste",
            14,
            &["Lundi", "Mardi", "Jeudi", "Vendredi"],
            "8h00 - 16h00",
            &["Traitement des gencives", "Interventions parodontales", "Greffes de gencive"],
            110,
            DoctorStatus::Active,
        ),
        doctor(
            6,
            "Dr. Maxime Petit",
            "Prothésiste dentaire",
            16,
            &["Mardi", "Mercredi", "Jeudi"],
            "9h30 - 17h30",
            &["Prothèses dentaires", "Bridges", "Couronnes"],
            90,
            DoctorStatus::Active,
        ),
    ]
}

pub fn sample_todos() -> TodoList {
    TodoList::with_items(&[
        ("Appeler le laboratoire pour la prothèse de M. Dupont", false),
        ("Vérifier les stocks de matériel", true),
        ("Préparer le dossier pour la consultation de 14h", false),
    ])
}

pub fn sample_notifications() -> NotificationFeed {
    let mut feed = NotificationFeed::new();
    feed.push("Nouveau rendez-vous à 14h00");
    feed.push("Dossier patient mis à jour");
    let read = feed.push("Rappel: Réunion d'équipe à 16h30");
    feed.toggle_read(read);
    feed
}

/// Builds a fully seeded repository. Same seed, same clinic.
pub fn sample_repository(
    seed: u64,
    today: NaiveDate,
    patient_count: usize,
    appointment_count: usize,
) -> Result<Repository, ClinicError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let patients = sample_patients(&mut rng, patient_count.max(1), today);
    let appointments = sample_appointments(&mut rng, &patients, appointment_count, today)?;
    Repository::new(appointments, patients, sample_doctors())
}
