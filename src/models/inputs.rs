use std::collections::BTreeMap;

use serde::Serialize;

/// Environmental/farm parameters collected by the input form.
/// Each field carries an inclusive valid range; values outside it never
/// reach the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Temperature,
    Humidity,
    SunlightHours,
    WaterPh,
    AirQualityIndex,
    WindSpeed,
    XCoord,
    YCoord,
    Spacing,
    ShadePercent,
}

impl Field {
    /// All form fields, in display order.
    pub fn all() -> &'static [Field] {
        &[
            Field::Temperature,
            Field::Humidity,
            Field::SunlightHours,
            Field::WaterPh,
            Field::AirQualityIndex,
            Field::WindSpeed,
            Field::XCoord,
            Field::YCoord,
            Field::Spacing,
            Field::ShadePercent,
        ]
    }

    /// JSON key used in the request body.
    pub fn key(&self) -> &'static str {
        match self {
            Field::Temperature => "temperature",
            Field::Humidity => "humidity",
            Field::SunlightHours => "sunlight_hours",
            Field::WaterPh => "water_ph",
            Field::AirQualityIndex => "air_quality_index",
            Field::WindSpeed => "wind_speed",
            Field::XCoord => "x_coord",
            Field::YCoord => "y_coord",
            Field::Spacing => "spacing",
            Field::ShadePercent => "shade_percent",
        }
    }

    /// Human-readable label shown above the input.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Temperature => "Temperature (°C)",
            Field::Humidity => "Humidity (%)",
            Field::SunlightHours => "Sunlight Hours",
            Field::WaterPh => "Water pH",
            Field::AirQualityIndex => "Air Quality Index",
            Field::WindSpeed => "Wind Speed (m/s)",
            Field::XCoord => "X Coordinate (m)",
            Field::YCoord => "Y Coordinate (m)",
            Field::Spacing => "Tower Spacing (m)",
            Field::ShadePercent => "Shade (%)",
        }
    }

    /// Guidance shown under the input.
    pub fn hint(&self) -> &'static str {
        match self {
            Field::Temperature => "Keep between 15–30 for most crops.",
            Field::Humidity => "50–80% works best for leafy greens.",
            Field::SunlightHours => "Aim for 4–8 hours of usable light.",
            Field::WaterPh => "Most crops: 5.5–6.5.",
            Field::AirQualityIndex => "Below 180 avoids heavy penalty.",
            Field::WindSpeed => "Keep under 5 m/s for tower stability.",
            Field::XCoord => "Tower position along the farm length.",
            Field::YCoord => "Tower position along the farm width.",
            Field::Spacing => "Distance between neighbouring towers.",
            Field::ShadePercent => "Shade cast on the tower site.",
        }
    }

    /// Inclusive bounds; `None` means unbounded above.
    pub fn bounds(&self) -> (f64, Option<f64>) {
        match self {
            Field::Temperature => (0.0, Some(45.0)),
            Field::Humidity => (20.0, Some(100.0)),
            Field::SunlightHours => (0.0, Some(24.0)),
            Field::WaterPh => (4.5, Some(8.0)),
            Field::AirQualityIndex => (0.0, Some(500.0)),
            Field::WindSpeed => (0.0, Some(5.0)),
            Field::XCoord | Field::YCoord => (0.0, None),
            Field::Spacing => (0.5, Some(5.0)),
            Field::ShadePercent => (0.0, Some(100.0)),
        }
    }

    /// Error message shown when the field is empty, non-numeric, or out of
    /// range.
    pub fn message(&self) -> &'static str {
        match self {
            Field::Temperature => "Temperature must be 0-45°C",
            Field::Humidity => "Humidity must be 20-100%",
            Field::SunlightHours => "Sunlight hours must be 0-24",
            Field::WaterPh => "Water pH must be 4.5-8.0",
            Field::AirQualityIndex => "AQI must be 0-500",
            Field::WindSpeed => "Wind speed must be 0-5 m/s",
            Field::XCoord => "X coordinate must be 0 or greater",
            Field::YCoord => "Y coordinate must be 0 or greater",
            Field::Spacing => "Spacing must be 0.5-5.0 m",
            Field::ShadePercent => "Shade must be 0-100%",
        }
    }

    /// Step attribute for the numeric input element.
    pub fn step(&self) -> &'static str {
        match self {
            Field::WaterPh => "0.01",
            Field::AirQualityIndex => "1",
            _ => "0.1",
        }
    }

    fn accepts(&self, value: f64) -> bool {
        let (min, max) = self.bounds();
        value.is_finite() && value >= min && max.is_none_or(|m| value <= m)
    }

    /// Parses raw form text against this field's range.
    pub fn parse(&self, raw: &str) -> Result<f64, &'static str> {
        match raw.trim().parse::<f64>() {
            Ok(value) if self.accepts(value) => Ok(value),
            _ => Err(self.message()),
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Fully validated, numeric request body for `/predict/`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnvironmentalInput {
    pub temperature: f64,
    pub humidity: f64,
    pub sunlight_hours: f64,
    pub water_ph: f64,
    pub air_quality_index: f64,
    pub wind_speed: f64,
    pub x_coord: f64,
    pub y_coord: f64,
    pub spacing: f64,
    pub shade_percent: f64,
}

/// Per-field validation errors, keyed by field.
pub type FieldErrors = BTreeMap<Field, String>;

/// Raw form state: one text value per field, mutated on every keystroke.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormValues {
    values: BTreeMap<Field, String>,
}

impl FormValues {
    pub fn get(&self, field: Field) -> &str {
        self.values.get(&field).map_or("", String::as_str)
    }

    pub fn set(&mut self, field: Field, value: String) {
        self.values.insert(field, value);
    }

    /// Validates every field and reports all failures at once. Only a form
    /// with zero failures produces an `EnvironmentalInput`.
    pub fn validate(&self) -> Result<EnvironmentalInput, FieldErrors> {
        let mut parsed = BTreeMap::new();
        let mut errors = FieldErrors::new();

        for &field in Field::all() {
            match field.parse(self.get(field)) {
                Ok(value) => {
                    parsed.insert(field, value);
                }
                Err(message) => {
                    errors.insert(field, message.to_string());
                }
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(EnvironmentalInput {
            temperature: parsed[&Field::Temperature],
            humidity: parsed[&Field::Humidity],
            sunlight_hours: parsed[&Field::SunlightHours],
            water_ph: parsed[&Field::WaterPh],
            air_quality_index: parsed[&Field::AirQualityIndex],
            wind_speed: parsed[&Field::WindSpeed],
            x_coord: parsed[&Field::XCoord],
            y_coord: parsed[&Field::YCoord],
            spacing: parsed[&Field::Spacing],
            shade_percent: parsed[&Field::ShadePercent],
        })
    }
}

/// Request body for `/placement/`. The backend applies its own limits, so
/// these are deliberately unvalidated client-side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FarmConfig {
    pub farm_length: f64,
    pub farm_width: f64,
    pub min_spacing: f64,
    pub max_towers: u32,
}

impl Default for FarmConfig {
    fn default() -> Self {
        Self {
            farm_length: 20.0,
            farm_width: 20.0,
            min_spacing: 2.5,
            max_towers: 15,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> FormValues {
        let mut form = FormValues::default();
        form.set(Field::Temperature, "22".into());
        form.set(Field::Humidity, "65".into());
        form.set(Field::SunlightHours, "6".into());
        form.set(Field::WaterPh, "6.2".into());
        form.set(Field::AirQualityIndex, "80".into());
        form.set(Field::WindSpeed, "2".into());
        form.set(Field::XCoord, "4".into());
        form.set(Field::YCoord, "8".into());
        form.set(Field::Spacing, "2.5".into());
        form.set(Field::ShadePercent, "10".into());
        form
    }

    #[test]
    fn test_valid_form_coerces_to_numbers() {
        let input = filled_form().validate().unwrap();
        assert_eq!(input.temperature, 22.0);
        assert_eq!(input.water_ph, 6.2);
        assert_eq!(input.spacing, 2.5);
    }

    #[test]
    fn test_empty_field_blocks_submission() {
        let mut form = filled_form();
        form.set(Field::Humidity, String::new());

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[&Field::Humidity], "Humidity must be 20-100%");
    }

    #[test]
    fn test_all_failing_fields_reported_together() {
        let errors = FormValues::default().validate().unwrap_err();
        assert_eq!(errors.len(), Field::all().len());
    }

    #[test]
    fn test_non_numeric_rejected() {
        assert_eq!(
            Field::Temperature.parse("warm"),
            Err("Temperature must be 0-45°C")
        );
        assert!(Field::Temperature.parse("NaN").is_err());
        assert!(Field::Temperature.parse("inf").is_err());
    }

    #[test]
    fn test_coordinates_unbounded_above() {
        assert_eq!(Field::XCoord.parse("1000"), Ok(1000.0));
        assert!(Field::YCoord.parse("-0.1").is_err());
    }
}
