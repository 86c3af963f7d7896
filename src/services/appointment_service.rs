use std::sync::Arc;

use anyhow::Result;
use chrono::{Duration, NaiveDate};

use crate::domain::appointment::Appointment;
use crate::listing::{group_by_day, AppointmentCriteria, DayBucket};
use crate::repository::DataSource;

#[derive(Clone)]
pub struct AppointmentService {
    source: Arc<dyn DataSource>,
}

impl AppointmentService {
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self { source }
    }

    pub fn list(&self, criteria: &AppointmentCriteria) -> Result<Vec<Appointment>> {
        Ok(self.source.list_appointments(criteria)?)
    }

    /// The appointments page view: filtered, then bucketed per day in
    /// chronological order.
    pub fn agenda(&self, criteria: &AppointmentCriteria) -> Result<Vec<DayBucket>> {
        let appointments = self.source.list_appointments(criteria)?;
        Ok(group_by_day(appointments))
    }

    /// Appointments-per-day counts over a window, for the calendar dots.
    pub fn calendar_counts(&self, from: NaiveDate, days: u32) -> Result<Vec<(NaiveDate, usize)>> {
        let until = from + Duration::days(i64::from(days));
        let appointments = self.source.list_appointments(&AppointmentCriteria::default())?;

        let counts = group_by_day(appointments)
            .into_iter()
            .filter(|bucket| bucket.date >= from && bucket.date < until)
            .map(|bucket| (bucket.date, bucket.appointments.len()))
            .collect();
        Ok(counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::appointment::{AppointmentStatus, TimeOfDay};
    use crate::listing::Choice;
    use crate::repository::{sample, Repository};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    fn setup() -> AppointmentService {
        let repository = sample::sample_repository(42, today(), 20, 30).unwrap();
        AppointmentService::new(Arc::new(repository))
    }

    #[test]
    fn test_agenda_buckets_are_chronological() {
        let service = setup();
        let buckets = service.agenda(&AppointmentCriteria::default()).unwrap();

        assert!(!buckets.is_empty());
        for pair in buckets.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
        for bucket in &buckets {
            for pair in bucket.appointments.windows(2) {
                assert!(pair[0].time <= pair[1].time);
            }
        }
    }

    #[test]
    fn test_agenda_respects_status_filter() {
        let service = setup();
        let criteria = AppointmentCriteria {
            status: Choice::Only(AppointmentStatus::Upcoming),
            ..Default::default()
        };

        let buckets = service.agenda(&criteria).unwrap();
        for bucket in buckets {
            assert!(bucket
                .appointments
                .iter()
                .all(|a| a.status == AppointmentStatus::Upcoming));
        }
    }

    #[test]
    fn test_calendar_counts_cover_the_window_only() {
        let d0 = today();
        let mut inside = Appointment::new(1, "Martin Dubois", 1000, d0, TimeOfDay::new(9, 0).unwrap());
        inside.treatment = "Contrôle".to_string();
        let mut also_inside =
            Appointment::new(2, "Sophie Laurent", 1001, d0, TimeOfDay::new(10, 0).unwrap());
        also_inside.treatment = "Détartrage".to_string();
        let outside = Appointment::new(
            3,
            "Philippe Moreau",
            1002,
            d0 + Duration::days(20),
            TimeOfDay::new(11, 0).unwrap(),
        );

        let repository =
            Repository::new(vec![inside, also_inside, outside], Vec::new(), Vec::new()).unwrap();
        let service = AppointmentService::new(Arc::new(repository));

        let counts = service.calendar_counts(d0, 14).unwrap();
        assert_eq!(counts, vec![(d0, 2)]);
    }
}
