use std::fmt;
use serde::{Deserialize, Deserializer, Serialize};

/// Stable identifier of a catalog body (e.g. `"earth"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BodyId(pub String);

impl BodyId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BodyId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A star or planet entry, loaded once from the static catalog.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CelestialBody {
    pub id: BodyId,
    /// Display name (Hebrew).
    pub name: String,
    pub english_name: String,
    pub description: String,
    /// Diameter in km. Accepts `"12,742"` or `12742` on the wire.
    #[serde(rename = "realSize", deserialize_with = "deserialize_diameter")]
    pub diameter_km: f64,
    /// 0 = star, 1..N = bodies outward.
    pub orbit_index: u32,
    /// Relative angular speed factor (larger = faster revolution).
    pub orbital_speed: f64,
    /// Display color, opaque to layout and navigation.
    pub color: String,
    // -- Overlay-only fields --
    pub temperature: String,
    pub moons_count: u32,
    pub distance_from_sun: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl CelestialBody {
    pub fn is_star(&self) -> bool {
        self.orbit_index == 0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDiameter {
    Number(f64),
    Text(String),
}

fn deserialize_diameter<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawDiameter::deserialize(deserializer)? {
        RawDiameter::Number(n) => Ok(n),
        RawDiameter::Text(s) => parse_diameter(&s).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid diameter `{s}`"))
        }),
    }
}

/// Parse a thousands-separated measurement such as `"1,392,700"`.
/// Returns None for anything that is not a plain number once commas are removed.
pub fn parse_diameter(text: &str) -> Option<f64> {
    let cleaned: String = text.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok()
}

/// Format a measurement with thousands separators, rounded to whole units.
pub fn format_thousands(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_thousands_separated() {
        assert_eq!(parse_diameter("12,742"), Some(12742.0));
        assert_eq!(parse_diameter("1,392,700"), Some(1_392_700.0));
        assert_eq!(parse_diameter(" 4879 "), Some(4879.0));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_diameter(""), None);
        assert_eq!(parse_diameter(","), None);
        assert_eq!(parse_diameter("12 742 km"), None);
    }

    #[test]
    fn formats_with_separators() {
        assert_eq!(format_thousands(12742.0), "12,742");
        assert_eq!(format_thousands(1_392_700.0), "1,392,700");
        assert_eq!(format_thousands(999.0), "999");
        assert_eq!(format_thousands(-4879.0), "-4,879");
    }

    #[test]
    fn deserializes_string_or_number_diameter() {
        let json = r##"{
            "id": "earth", "name": "כדור הארץ", "englishName": "Earth",
            "description": "home", "realSize": "12,742", "orbitIndex": 3,
            "orbitalSpeed": 2.5, "color": "#2271B3", "temperature": "15°C",
            "moonsCount": 1, "distanceFromSun": "149.6M km"
        }"##;
        let body: CelestialBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.diameter_km, 12742.0);
        assert_eq!(body.id.as_str(), "earth");
        assert!(body.image_url.is_none());

        let numeric = json.replace("\"12,742\"", "12742");
        let body: CelestialBody = serde_json::from_str(&numeric).unwrap();
        assert_eq!(body.diameter_km, 12742.0);
    }
}
