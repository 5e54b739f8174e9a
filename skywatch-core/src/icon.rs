use crate::model::CurrentObservation;

/// Icons the widget can display, rendered as terminal glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherIcon {
    Sunny,
    PartlyCloudy,
    Cloudy,
    Night,
    Snow,
}

impl WeatherIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            WeatherIcon::Sunny => "☀",
            WeatherIcon::PartlyCloudy => "⛅",
            WeatherIcon::Cloudy => "☁",
            WeatherIcon::Night => "☾",
            WeatherIcon::Snow => "❄",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WeatherIcon::Sunny => "Sunny",
            WeatherIcon::PartlyCloudy => "Partly Cloudy",
            WeatherIcon::Cloudy => "Cloudy",
            WeatherIcon::Night => "Night",
            WeatherIcon::Snow => "Snow",
        }
    }
}

/// Pick the primary condition icon.
///
/// First match wins over the lowercased condition text; the order is part of
/// the widget's observable behavior. Note the night arm precedes the snow
/// arm, so snow is only reachable during the day.
pub fn select_weather_icon(observation: Option<&CurrentObservation>) -> WeatherIcon {
    let condition = observation.map(|o| o.condition.text.to_lowercase()).unwrap_or_default();
    let is_day = observation.is_some_and(|o| o.is_day);

    if condition.contains("cloudy") {
        WeatherIcon::Cloudy
    } else if condition.contains("partly") {
        WeatherIcon::PartlyCloudy
    } else if condition.contains("sunny") && is_day {
        WeatherIcon::Sunny
    } else if condition.contains("clear") && is_day {
        WeatherIcon::Sunny
    } else if !is_day {
        WeatherIcon::Night
    } else if condition.contains("snow") {
        WeatherIcon::Snow
    } else {
        WeatherIcon::PartlyCloudy
    }
}

/// The secondary icon depends on nothing but the day flag.
pub fn day_night_icon(is_day: bool) -> WeatherIcon {
    if is_day { WeatherIcon::Sunny } else { WeatherIcon::Night }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WeatherCondition;

    fn obs(text: &str, is_day: bool) -> CurrentObservation {
        CurrentObservation {
            temp_c: 0.0,
            temp_f: 0.0,
            is_day,
            condition: WeatherCondition { text: text.to_string(), icon: None },
            air_quality: None,
            observed_at: None,
        }
    }

    #[test]
    fn cloudy_text_selects_cloudy() {
        let o = obs("Cloudy", true);
        assert_eq!(select_weather_icon(Some(&o)), WeatherIcon::Cloudy);
    }

    #[test]
    fn partly_cloudy_hits_the_cloudy_substring_first() {
        // "partly cloudy" contains "cloudy", so the first arm wins.
        let o = obs("Partly cloudy", true);
        assert_eq!(select_weather_icon(Some(&o)), WeatherIcon::Cloudy);
    }

    #[test]
    fn partly_without_cloudy_selects_partly_cloudy() {
        let o = obs("Partly sunny", true);
        assert_eq!(select_weather_icon(Some(&o)), WeatherIcon::PartlyCloudy);
    }

    #[test]
    fn sunny_day_selects_sunny() {
        let o = obs("Sunny", true);
        assert_eq!(select_weather_icon(Some(&o)), WeatherIcon::Sunny);
    }

    #[test]
    fn clear_day_selects_sunny() {
        let o = obs("Clear", true);
        assert_eq!(select_weather_icon(Some(&o)), WeatherIcon::Sunny);
    }

    #[test]
    fn clear_night_selects_night() {
        let o = obs("Clear", false);
        assert_eq!(select_weather_icon(Some(&o)), WeatherIcon::Night);
    }

    #[test]
    fn snow_at_night_is_shadowed_by_the_night_arm() {
        let o = obs("Light snow", false);
        assert_eq!(select_weather_icon(Some(&o)), WeatherIcon::Night);
    }

    #[test]
    fn snow_during_the_day_selects_snow() {
        let o = obs("Light snow", true);
        assert_eq!(select_weather_icon(Some(&o)), WeatherIcon::Snow);
    }

    #[test]
    fn unmatched_day_condition_falls_back_to_partly_cloudy() {
        let o = obs("Mist", true);
        assert_eq!(select_weather_icon(Some(&o)), WeatherIcon::PartlyCloudy);
    }

    #[test]
    fn no_observation_selects_night() {
        // No observation means an empty condition and a false day flag,
        // which lands on the night arm.
        assert_eq!(select_weather_icon(None), WeatherIcon::Night);
    }

    #[test]
    fn day_night_icon_ignores_the_condition() {
        assert_eq!(day_night_icon(true), WeatherIcon::Sunny);
        assert_eq!(day_night_icon(false), WeatherIcon::Night);
    }
}
