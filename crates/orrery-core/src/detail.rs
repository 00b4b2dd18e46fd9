//! Read-only view of the focused body for the detail overlay.

use serde::Serialize;

use crate::catalog::{format_thousands, BodyId, Catalog, CelestialBody};
use crate::layout::REFERENCE_DIAMETER_KM;
use crate::navigation::NavigationController;

/// Size of a body relative to Earth, rounded to one decimal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "factor", rename_all = "camelCase")]
pub enum SizeComparison {
    Larger(f64),
    Same,
    Smaller(f64),
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

impl SizeComparison {
    /// Compare `diameter_km` to `reference_km`.
    pub fn new(diameter_km: f64, reference_km: f64) -> Self {
        let raw = diameter_km / reference_km;
        let ratio = round1(raw);
        if ratio > 1.0 {
            SizeComparison::Larger(ratio)
        } else if ratio == 1.0 {
            SizeComparison::Same
        } else {
            // Bodies under 5% of the reference round to 0.0.
            let base = if ratio > 0.0 { ratio } else { raw };
            SizeComparison::Smaller(round1(1.0 / base))
        }
    }

    /// Ratio to the reference (1.0 for `Same`).
    pub fn ratio(&self) -> f64 {
        match *self {
            SizeComparison::Larger(r) => r,
            SizeComparison::Same => 1.0,
            SizeComparison::Smaller(f) => 1.0 / f,
        }
    }

    /// Diameter of the comparison swatch; Earth's swatch is 16 px.
    pub fn swatch_px(&self) -> f64 {
        (16.0 * self.ratio()).max(4.0)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonView {
    #[serde(flatten)]
    pub comparison: SizeComparison,
    pub swatch_px: f64,
}

/// Everything the overlay shows for one body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailView {
    pub id: BodyId,
    pub name: String,
    pub english_name: String,
    pub description: String,
    pub temperature: String,
    pub moons_count: u32,
    pub distance_from_sun: String,
    pub diameter: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub is_star: bool,
    /// Absent for the star.
    pub comparison: Option<ComparisonView>,
    pub previous_name: String,
    pub next_name: String,
}

impl DetailView {
    /// View of the focused body, or None while idle.
    pub fn for_selection(catalog: &Catalog, nav: &NavigationController) -> Option<Self> {
        let body = catalog.get(nav.selected_id()?)?;
        let name_of = |id: &BodyId| catalog.get(id).map(|b| b.name.clone()).unwrap_or_default();
        Some(Self::new(
            body,
            reference_diameter(catalog),
            name_of(nav.peek_previous()),
            name_of(nav.peek_next()),
        ))
    }

    pub fn new(body: &CelestialBody, reference_km: f64, previous_name: String, next_name: String) -> Self {
        let comparison = (!body.is_star()).then(|| {
            let comparison = SizeComparison::new(body.diameter_km, reference_km);
            ComparisonView {
                swatch_px: comparison.swatch_px(),
                comparison,
            }
        });
        Self {
            id: body.id.clone(),
            name: body.name.clone(),
            english_name: body.english_name.clone(),
            description: body.description.clone(),
            temperature: body.temperature.clone(),
            moons_count: body.moons_count,
            distance_from_sun: body.distance_from_sun.clone(),
            diameter: format_thousands(body.diameter_km),
            image_url: body.image_url.clone(),
            is_star: body.is_star(),
            comparison,
            previous_name,
            next_name,
        }
    }
}

/// Earth's catalog diameter, or the built-in constant if Earth is absent.
fn reference_diameter(catalog: &Catalog) -> f64 {
    catalog
        .get(&BodyId::from("earth"))
        .map(|b| b.diameter_km)
        .unwrap_or(REFERENCE_DIAMETER_KM)
}
