//! Domain model: a single sensor reading from a telecom site.

use serde::Deserialize;

#[derive(Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum SiteType {
    Ground,
    Rooftop,
}

#[derive(Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum LocationType {
    Rural,
    Urban,
}

#[derive(Deserialize, Clone, Copy, Debug)]
pub struct SensorReading {
    pub temperature: f64,
    pub voltage: f64,
    pub power_usage: f64,
    pub battery_health: f64,
    pub uptime: u32,
    pub site_type: SiteType,
    pub location_type: LocationType,
}

impl SensorReading {
    /// Encodes the reading into the model's feature order,
    /// with the categorical fields as drop-first indicators.
    pub fn to_features(&self) -> [f64; 7] {
        [
            self.temperature,
            self.voltage,
            self.power_usage,
            self.battery_health,
            f64::from(self.uptime),
            if self.site_type == SiteType::Rooftop { 1.0 } else { 0.0 },
            if self.location_type == LocationType::Urban { 1.0 } else { 0.0 },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_features_encoding_ok() {
        let reading = SensorReading {
            temperature: 30.0,
            voltage: 230.0,
            power_usage: 1000.0,
            battery_health: 80.0,
            uptime: 12,
            site_type: SiteType::Rooftop,
            location_type: LocationType::Rural,
        };
        assert_eq!(
            reading.to_features(),
            [30.0, 230.0, 1000.0, 80.0, 12.0, 1.0, 0.0],
        );
    }
}
