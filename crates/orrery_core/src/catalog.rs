//! Static table of orbital elements the scene is built from.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::body::Rgb;

/// A defect in the body table. Always fatal: it is a data error, not a
/// runtime condition.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("body name must not be empty")]
    EmptyName,

    #[error("duplicate body name `{0}`")]
    DuplicateName(String),

    #[error("body `{name}`: {field} must be a finite non-negative number, got {value}")]
    InvalidQuantity {
        name: String,
        field: &'static str,
        value: f64,
    },

    #[error("body `{name}`: eccentricity {value} is outside [0, 1)")]
    InvalidEccentricity { name: String, value: f64 },

    #[error("body `{name}`: an orbiting body needs a positive semi-major axis")]
    MissingOrbitRadius { name: String },

    #[error("body `{name}`: anchor body (orbital period 0) cannot sit {value} AU from the centre")]
    OffsetAnchor { name: String, value: f64 },
}

/// One catalog entry. Orbital fields default to 0, which marks the anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodySpec {
    pub name: String,
    /// km
    pub radius: f64,
    pub color: Rgb,
    /// kg
    pub mass: f64,
    /// AU
    #[serde(default)]
    pub semi_major_axis: f64,
    /// Earth days
    #[serde(default)]
    pub orbital_period: f64,
    #[serde(default)]
    pub eccentricity: f64,
}

impl BodySpec {
    pub fn anchor(name: &str, radius: f64, color: Rgb, mass: f64) -> Self {
        Self {
            name: name.to_string(),
            radius,
            color,
            mass,
            semi_major_axis: 0.0,
            orbital_period: 0.0,
            eccentricity: 0.0,
        }
    }

    pub fn planet(
        name: &str,
        semi_major_axis: f64,
        orbital_period: f64,
        radius: f64,
        color: Rgb,
        mass: f64,
    ) -> Self {
        Self {
            name: name.to_string(),
            radius,
            color,
            mass,
            semi_major_axis,
            orbital_period,
            eccentricity: 0.0,
        }
    }

    pub fn is_anchor(&self) -> bool {
        self.orbital_period == 0.0
    }

    /// Checks a single entry in isolation.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.name.trim().is_empty() {
            return Err(CatalogError::EmptyName);
        }
        for (field, value) in [
            ("radius", self.radius),
            ("mass", self.mass),
            ("semi-major axis", self.semi_major_axis),
            ("orbital period", self.orbital_period),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(CatalogError::InvalidQuantity {
                    name: self.name.clone(),
                    field,
                    value,
                });
            }
        }
        if !(0.0..1.0).contains(&self.eccentricity) {
            return Err(CatalogError::InvalidEccentricity {
                name: self.name.clone(),
                value: self.eccentricity,
            });
        }
        if self.is_anchor() {
            if self.semi_major_axis != 0.0 {
                return Err(CatalogError::OffsetAnchor {
                    name: self.name.clone(),
                    value: self.semi_major_axis,
                });
            }
        } else if self.semi_major_axis == 0.0 {
            return Err(CatalogError::MissingOrbitRadius {
                name: self.name.clone(),
            });
        }
        Ok(())
    }
}

/// Validates every entry and that names are unique.
pub fn validate(specs: &[BodySpec]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(specs.len());
    for spec in specs {
        spec.validate()?;
        if !seen.insert(spec.name.as_str()) {
            return Err(CatalogError::DuplicateName(spec.name.clone()));
        }
    }
    Ok(())
}

const YELLOW: Rgb = Rgb(255, 255, 0);
const BLUE: Rgb = Rgb(0, 0, 255);
const RED: Rgb = Rgb(255, 0, 0);
const GRAY: Rgb = Rgb(200, 200, 200);

/// The Sun and the eight planets, Sun first.
pub fn solar_system() -> Vec<BodySpec> {
    vec![
        BodySpec::anchor("Sun", 696_340.0, YELLOW, 1.989e30),
        BodySpec::planet("Mercury", 0.39, 88.0, 2_439.7, GRAY, 3.3011e23),
        BodySpec::planet("Venus", 0.72, 224.7, 6_051.8, Rgb(255, 165, 0), 4.8675e24),
        BodySpec::planet("Earth", 1.0, 365.25, 6_371.0, BLUE, 5.972e24),
        BodySpec::planet("Mars", 1.52, 687.0, 3_389.5, RED, 6.417e23),
        BodySpec::planet("Jupiter", 5.2, 4_332.59, 69_911.0, Rgb(255, 215, 0), 1.898e27),
        BodySpec::planet("Saturn", 9.58, 10_759.22, 58_232.0, Rgb(210, 180, 140), 5.683e26),
        BodySpec::planet("Uranus", 19.22, 30_688.5, 25_362.0, Rgb(173, 216, 230), 8.681e25),
        BodySpec::planet("Neptune", 30.05, 60_182.0, 24_622.0, Rgb(0, 0, 139), 1.024e26),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solar_system_is_valid() {
        let bodies = solar_system();
        assert_eq!(bodies.len(), 9);
        assert_eq!(bodies[0].name, "Sun");
        assert!(bodies[0].is_anchor());
        assert_eq!(bodies.iter().filter(|b| b.is_anchor()).count(), 1);
        validate(&bodies).unwrap();
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let mut bodies = solar_system();
        bodies.push(bodies[3].clone());
        assert_eq!(
            validate(&bodies),
            Err(CatalogError::DuplicateName("Earth".to_string()))
        );
    }

    #[test]
    fn test_negative_period_rejected() {
        let mut mars = solar_system().remove(4);
        mars.orbital_period = -687.0;
        let err = mars.validate().unwrap_err();
        assert!(err.to_string().contains("orbital period"));
    }

    #[test]
    fn test_anchor_with_axis_rejected() {
        let mut sun = solar_system().remove(0);
        sun.semi_major_axis = 0.5;
        assert!(matches!(sun.validate(), Err(CatalogError::OffsetAnchor { .. })));
    }

    #[test]
    fn test_orbiting_body_needs_axis() {
        let spec = BodySpec::planet("Vulcan", 0.0, 10.0, 100.0, GRAY, 1.0);
        assert!(matches!(spec.validate(), Err(CatalogError::MissingOrbitRadius { .. })));
    }

    #[test]
    fn test_eccentricity_range() {
        let mut earth = solar_system().remove(3);
        earth.eccentricity = 1.0;
        assert!(matches!(earth.validate(), Err(CatalogError::InvalidEccentricity { .. })));
        earth.eccentricity = 0.0167;
        assert!(earth.validate().is_ok());
    }

    #[test]
    fn test_anchor_entry_omits_orbital_fields() {
        let json = r#"{ "name": "Sun", "radius": 696340.0, "color": [255, 255, 0], "mass": 1.989e30 }"#;
        let spec: BodySpec = serde_json::from_str(json).unwrap();
        assert!(spec.is_anchor());
        assert_eq!(spec.semi_major_axis, 0.0);
        assert_eq!(spec.color, YELLOW);
        assert!(spec.validate().is_ok());
    }
}
