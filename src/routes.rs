/// The navigation surface: one page per path, unknown paths land on the
/// not-found page with a pointer back to the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Landing,
    Dashboard,
    Appointments,
    Patients,
    Doctors,
    NotFound,
}

impl Route {
    pub fn parse(path: &str) -> Route {
        let trimmed = path.trim();
        let normalized = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };
        match normalized {
            "/" => Route::Landing,
            "/tableau-de-bord" => Route::Dashboard,
            "/rendez-vous" => Route::Appointments,
            "/patients" => Route::Patients,
            "/docteurs" => Route::Doctors,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Dashboard => "/tableau-de-bord",
            Route::Appointments => "/rendez-vous",
            Route::Patients => "/patients",
            Route::Doctors => "/docteurs",
            Route::NotFound => "/404",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Landing => "Brain Dental X",
            Route::Dashboard => "Tableau de bord",
            Route::Appointments => "Gestion des rendez-vous",
            Route::Patients => "Patients",
            Route::Doctors => "Gestion des Docteurs",
            Route::NotFound => "Page introuvable",
        }
    }

    /// Pages listed in the sidebar, in display order.
    pub fn sidebar() -> [Route; 4] {
        [
            Route::Dashboard,
            Route::Appointments,
            Route::Patients,
            Route::Doctors,
        ]
    }
}
