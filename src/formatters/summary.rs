// ABOUTME: Localized multi-line summaries of day-steps and training reports
// ABOUTME: Russian wording by default, English on request, two-decimal numbers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitness_tracker_core::models::{DayStepsReport, TrainingReport};
use std::fmt;
use std::str::FromStr;

/// Language of rendered summaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    /// Russian (default)
    #[default]
    Ru,
    /// English
    En,
}

impl Locale {
    /// Language tag
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ru => "ru",
            Self::En => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ru" | "ru-ru" | "russian" => Ok(Self::Ru),
            "en" | "en-us" | "en-gb" | "english" => Ok(Self::En),
            other => Err(format!("Unknown locale: '{other}'. Valid options: ru, en")),
        }
    }
}

/// Human-readable rendering of a report
pub trait Summary {
    /// Multi-line summary in the given locale, newline-terminated
    fn summary(&self, locale: Locale) -> String;
}

impl Summary for DayStepsReport {
    fn summary(&self, locale: Locale) -> String {
        match locale {
            Locale::Ru => format!(
                "Количество шагов: {}.\nДистанция составила {:.2} км.\nВы сожгли {:.2} ккал.\n",
                self.steps, self.distance_km, self.calories_kcal
            ),
            Locale::En => format!(
                "Steps: {}.\nDistance: {:.2} km.\nCalories burned: {:.2} kcal.\n",
                self.steps, self.distance_km, self.calories_kcal
            ),
        }
    }
}

impl Summary for TrainingReport {
    fn summary(&self, locale: Locale) -> String {
        match locale {
            Locale::Ru => format!(
                "Тип тренировки: {}\nДлительность: {:.2} ч.\nДистанция: {:.2} км.\nСкорость: {:.2} км/ч\nСожгли калорий: {:.2}\n",
                self.label, self.duration_hours, self.distance_km, self.mean_speed_kmh, self.calories_kcal
            ),
            Locale::En => format!(
                "Activity: {}\nDuration: {:.2} h.\nDistance: {:.2} km.\nSpeed: {:.2} km/h\nCalories burned: {:.2}\n",
                self.label, self.duration_hours, self.distance_km, self.mean_speed_kmh, self.calories_kcal
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitness_tracker_core::models::ActivityKind;

    #[test]
    fn test_day_steps_summary_ru() {
        let report = DayStepsReport {
            steps: 6000,
            distance_km: 3.9,
            calories_kcal: 120.456,
        };
        assert_eq!(
            report.summary(Locale::Ru),
            "Количество шагов: 6000.\nДистанция составила 3.90 км.\nВы сожгли 120.46 ккал.\n"
        );
    }

    #[test]
    fn test_training_summary_en() {
        let report = TrainingReport {
            activity: ActivityKind::Running,
            label: "Running".to_owned(),
            steps: 3000,
            duration_hours: 0.5,
            distance_km: 2.43,
            mean_speed_kmh: 4.86,
            calories_kcal: 170.1,
        };
        assert_eq!(
            report.summary(Locale::En),
            "Activity: Running\nDuration: 0.50 h.\nDistance: 2.43 km.\nSpeed: 4.86 km/h\nCalories burned: 170.10\n"
        );
    }

    #[test]
    fn test_locale_parsing() {
        assert_eq!("RU".parse::<Locale>().unwrap(), Locale::Ru);
        assert_eq!("english".parse::<Locale>().unwrap(), Locale::En);
        assert!("fr".parse::<Locale>().is_err());
    }
}
