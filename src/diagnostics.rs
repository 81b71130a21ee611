//! Rule-based risk classification and diagnostic hints.

use crate::models::SensorReading;

pub const FALLBACK_HINT: &str = "Efficiency is slightly low, but no major cause detected.";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    /// Classifies a predicted efficiency score against the fixed 50/75 thresholds.
    pub fn from_score(score: f64) -> Self {
        if score < 50.0 {
            Self::Low
        } else if score < 75.0 {
            Self::Moderate
        } else {
            Self::High
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Low => "Risk: Low Efficiency – Immediate attention needed.",
            Self::Moderate => "Risk: Moderate Efficiency – Can be improved.",
            Self::High => "Risk: High Efficiency – System is optimal.",
        }
    }

    /// Bulma color modifier for the risk notification and the progress bar.
    pub fn class(self) -> &'static str {
        match self {
            Self::Low => "is-danger",
            Self::Moderate => "is-warning",
            Self::High => "is-success",
        }
    }
}

/// Returns the triggered diagnostic hints, always in the same order:
/// battery health, power usage, temperature, voltage.
pub fn diagnose(reading: &SensorReading) -> Vec<String> {
    let mut hints = Vec::new();
    if reading.battery_health < 60.0 {
        hints.push(format!("Low Battery Health: {}%", reading.battery_health));
    }
    if reading.power_usage > 2000.0 {
        hints.push(format!("High Power Usage: {}W", reading.power_usage));
    }
    if reading.temperature > 40.0 {
        hints.push(format!("High Temperature: {}°C", reading.temperature));
    }
    if reading.voltage < 210.0 {
        hints.push(format!("Low Voltage: {}V", reading.voltage));
    }
    hints
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LocationType, SiteType};

    fn reading(battery_health: f64, power_usage: f64, temperature: f64, voltage: f64) -> SensorReading {
        SensorReading {
            temperature,
            voltage,
            power_usage,
            battery_health,
            uptime: 12,
            site_type: SiteType::Ground,
            location_type: LocationType::Rural,
        }
    }

    #[test]
    fn risk_thresholds_ok() {
        assert_eq!(RiskLevel::from_score(0.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(49.99), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(50.0), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_score(74.99), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_score(75.0), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(100.0), RiskLevel::High);
    }

    #[test]
    fn all_hints_in_order_ok() {
        let hints = diagnose(&reading(50.0, 2500.0, 45.0, 200.0));
        assert_eq!(
            hints,
            vec![
                "Low Battery Health: 50%",
                "High Power Usage: 2500W",
                "High Temperature: 45°C",
                "Low Voltage: 200V",
            ],
        );
    }

    #[test]
    fn no_hints_for_healthy_reading_ok() {
        assert!(diagnose(&reading(80.0, 1000.0, 30.0, 230.0)).is_empty());
    }

    #[test]
    fn single_hint_ok() {
        let hints = diagnose(&reading(59.9, 1000.0, 30.0, 230.0));
        assert_eq!(hints, vec!["Low Battery Health: 59.9%"]);
    }
}
