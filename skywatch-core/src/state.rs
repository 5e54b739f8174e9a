use crate::model::{CurrentObservation, LocationMetadata, WeatherReport};

/// The widget's two result cells.
///
/// Both cells move together: a well-formed report sets them in a single
/// transition, and nothing ever clears them afterwards. A failed lookup
/// simply never reaches [`apply`](WeatherState::apply), which keeps stale
/// data on screen in preference to none.
#[derive(Debug, Clone, Default)]
pub struct WeatherState {
    pub current: Option<CurrentObservation>,
    pub location: Option<LocationMetadata>,
}

impl WeatherState {
    /// The single transition rule: apply a successful lookup.
    pub fn apply(&mut self, report: WeatherReport) {
        self.current = Some(report.current);
        self.location = Some(report.location);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WeatherCondition;

    fn report(name: &str, temp_c: f64) -> WeatherReport {
        WeatherReport {
            current: CurrentObservation {
                temp_c,
                temp_f: temp_c * 9.0 / 5.0 + 32.0,
                is_day: true,
                condition: WeatherCondition { text: "Sunny".to_string(), icon: None },
                air_quality: None,
                observed_at: None,
            },
            location: LocationMetadata { name: name.to_string(), country: "France".to_string() },
        }
    }

    #[test]
    fn starts_with_both_cells_absent() {
        let state = WeatherState::default();
        assert!(state.current.is_none());
        assert!(state.location.is_none());
    }

    #[test]
    fn apply_sets_both_cells_in_one_transition() {
        let mut state = WeatherState::default();
        state.apply(report("Paris", 20.0));

        assert_eq!(state.current.as_ref().map(|c| c.temp_c), Some(20.0));
        assert_eq!(state.location.as_ref().map(|l| l.name.as_str()), Some("Paris"));
    }

    #[test]
    fn a_newer_report_replaces_both_cells() {
        let mut state = WeatherState::default();
        state.apply(report("Paris", 20.0));
        state.apply(report("Lyon", 25.0));

        assert_eq!(state.current.as_ref().map(|c| c.temp_c), Some(25.0));
        assert_eq!(state.location.as_ref().map(|l| l.name.as_str()), Some("Lyon"));
    }
}
