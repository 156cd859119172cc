use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Horsepower as it appears in the source document: a JSON number or text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PowerValue {
    Number(f64),
    Text(String),
}

impl PowerValue {
    /// Numeric reading of the value, if it has one.
    ///
    /// Text is trimmed and parsed; blank text reads as `0`, matching how the
    /// leaderboard has always coerced it.
    pub fn as_number(&self) -> Option<f64> {
        let n = match self {
            PowerValue::Number(n) => *n,
            PowerValue::Text(s) => {
                let s = s.trim();
                if s.is_empty() { 0.0 } else { s.parse::<f64>().ok()? }
            }
        };
        n.is_finite().then_some(n)
    }

    pub fn as_text(&self) -> String {
        match self {
            PowerValue::Number(n) => n.to_string(),
            PowerValue::Text(s) => s.clone(),
        }
    }
}

/// One timed session on a track configuration.
///
/// Every field is optional. Values are kept as they appeared in the source
/// document; interpretation (time parsing, numeric coercion, classification)
/// happens at the point of use.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LapRecord {
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub car: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub track: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, deserialize_with = "lenient_power", skip_serializing_if = "Option::is_none")]
    pub power: Option<PowerValue>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub drivetrain: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub control_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub power_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub start_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub game_version: Option<String>,
}

impl LapRecord {
    /// Builds a record from one element of the source array.
    ///
    /// Returns `None` when the element is not a JSON object; the caller decides
    /// how to degrade.
    pub fn from_json(value: &Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value.clone()).ok()
    }

    /// Power coerced for ordering: absent or non-numeric reads as `0`.
    pub fn power_for_sort(&self) -> f64 {
        self.power
            .as_ref()
            .and_then(PowerValue::as_number)
            .unwrap_or(0.0)
    }

    /// Power as a reported figure. Absent, non-numeric and zero values are
    /// not reports.
    pub fn reported_power(&self) -> Option<f64> {
        self.power
            .as_ref()
            .and_then(PowerValue::as_number)
            .filter(|p| *p != 0.0)
    }
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(scalar_text))
}

fn lenient_power<'de, D>(deserializer: D) -> Result<Option<PowerValue>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64().map(PowerValue::Number),
        Some(other) => scalar_text(other).map(PowerValue::Text),
        None => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_reads_known_fields() {
        let record = LapRecord::from_json(&json!({
            "car": "Porsche 911 GT3",
            "track": "Nordschleife",
            "time": "6:59.927",
            "power": 510,
            "date": "2025-03-01",
            "extra": "ignored"
        }))
        .unwrap();

        assert_eq!(record.car.as_deref(), Some("Porsche 911 GT3"));
        assert_eq!(record.time.as_deref(), Some("6:59.927"));
        assert_eq!(record.power, Some(PowerValue::Number(510.0)));
        assert_eq!(record.layout, None);
    }

    #[test]
    fn test_from_json_tolerates_odd_scalars() {
        let record = LapRecord::from_json(&json!({
            "track": 12,
            "layout": null,
            "power": "420",
            "drivetrain": ["rwd"],
            "game_version": true
        }))
        .unwrap();

        assert_eq!(record.track.as_deref(), Some("12"));
        assert_eq!(record.layout, None);
        assert_eq!(record.power, Some(PowerValue::Text("420".to_string())));
        assert_eq!(record.drivetrain, None);
        assert_eq!(record.game_version.as_deref(), Some("true"));
    }

    #[test]
    fn test_from_json_rejects_non_objects() {
        assert!(LapRecord::from_json(&json!(42)).is_none());
        assert!(LapRecord::from_json(&json!("lap")).is_none());
        assert!(LapRecord::from_json(&json!([1, 2])).is_none());
    }

    #[test]
    fn test_power_coercion() {
        let numeric = LapRecord {
            power: Some(PowerValue::Text(" 300 ".to_string())),
            ..Default::default()
        };
        assert_eq!(numeric.power_for_sort(), 300.0);
        assert_eq!(numeric.reported_power(), Some(300.0));

        let garbage = LapRecord {
            power: Some(PowerValue::Text("lots".to_string())),
            ..Default::default()
        };
        assert_eq!(garbage.power_for_sort(), 0.0);
        assert_eq!(garbage.reported_power(), None);

        let zero = LapRecord {
            power: Some(PowerValue::Number(0.0)),
            ..Default::default()
        };
        assert_eq!(zero.power_for_sort(), 0.0);
        assert_eq!(zero.reported_power(), None);

        assert_eq!(LapRecord::default().power_for_sort(), 0.0);
    }

    #[test]
    fn test_power_text_rendering() {
        assert_eq!(PowerValue::Number(300.0).as_text(), "300");
        assert_eq!(PowerValue::Number(312.5).as_text(), "312.5");
    }
}
