use std::f64::consts::TAU;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::catalog::{BodySpec, CatalogError};

/// Display colour, serialized as `[r, g, b]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
}

/// Maps orbital coordinates (AU, radians) to scene pixels.
///
/// The render surface grows downward, so the vertical offset is subtracted
/// from the centre: a body at `angle = π/2` sits *above* the centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Scene centre in logical pixels.
    pub center: DVec2,
    /// Pixels per astronomical unit.
    pub scale: f64,
}

impl Projection {
    pub fn new(center: DVec2, scale: f64) -> Self {
        Self { center, scale }
    }

    /// Circular-orbit position for `angle` on an orbit of `semi_major_axis` AU.
    pub fn project(&self, semi_major_axis: f64, angle: f64) -> DVec2 {
        let distance = semi_major_axis * self.scale;
        DVec2::new(
            self.center.x + distance * angle.cos(),
            self.center.y - distance * angle.sin(),
        )
    }
}

/// Orbital elements and live phase of a body on a circular orbit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularOrbit {
    semi_major_axis: f64,
    orbital_period: f64,
    eccentricity: f64,
    angle: f64,
    angular_velocity: f64,
}

impl CircularOrbit {
    /// Starts at `angle = 0` (the +x direction). Returns `None` unless the
    /// period is a positive finite number of days.
    pub fn new(semi_major_axis: f64, orbital_period: f64) -> Option<Self> {
        if !(orbital_period.is_finite() && orbital_period > 0.0) {
            return None;
        }
        Some(Self {
            semi_major_axis,
            orbital_period,
            eccentricity: 0.0,
            angle: 0.0,
            angular_velocity: TAU / orbital_period,
        })
    }

    /// Stored for forward compatibility; the motion model ignores it.
    pub fn with_eccentricity(mut self, eccentricity: f64) -> Self {
        self.eccentricity = eccentricity;
        self
    }

    pub fn semi_major_axis(&self) -> f64 {
        self.semi_major_axis
    }

    pub fn orbital_period(&self) -> f64 {
        self.orbital_period
    }

    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    /// Current phase in radians, always in `[0, 2π)`.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Radians per simulated day.
    pub fn angular_velocity(&self) -> f64 {
        self.angular_velocity
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BodyKind {
    /// Fixed at the scene centre for the whole run.
    Anchor,
    Orbiting(CircularOrbit),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    name: String,
    radius_km: f64,
    color: Rgb,
    mass_kg: f64,
    kind: BodyKind,
    projection: Projection,
    position: DVec2,
}

impl Body {
    pub fn anchor(
        name: impl Into<String>,
        radius_km: f64,
        color: Rgb,
        mass_kg: f64,
        projection: Projection,
    ) -> Self {
        Self {
            name: name.into(),
            radius_km,
            color,
            mass_kg,
            kind: BodyKind::Anchor,
            projection,
            position: projection.center,
        }
    }

    pub fn orbiting(
        name: impl Into<String>,
        radius_km: f64,
        color: Rgb,
        mass_kg: f64,
        orbit: CircularOrbit,
        projection: Projection,
    ) -> Self {
        let position = projection.project(orbit.semi_major_axis, orbit.angle);
        Self {
            name: name.into(),
            radius_km,
            color,
            mass_kg,
            kind: BodyKind::Orbiting(orbit),
            projection,
            position,
        }
    }

    /// Builds a body from a catalog entry. A zero orbital period selects the
    /// anchor path; anything the catalog would reject is reported here too.
    pub fn from_spec(spec: &BodySpec, projection: Projection) -> Result<Self, CatalogError> {
        spec.validate()?;
        let body = match CircularOrbit::new(spec.semi_major_axis, spec.orbital_period) {
            Some(orbit) => Self::orbiting(
                spec.name.clone(),
                spec.radius,
                spec.color,
                spec.mass,
                orbit.with_eccentricity(spec.eccentricity),
                projection,
            ),
            None => Self::anchor(spec.name.clone(), spec.radius, spec.color, spec.mass, projection),
        };
        Ok(body)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Physical radius in km.
    pub fn radius_km(&self) -> f64 {
        self.radius_km
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Not used by the circular model.
    pub fn mass_kg(&self) -> f64 {
        self.mass_kg
    }

    pub fn kind(&self) -> &BodyKind {
        &self.kind
    }

    pub fn is_anchor(&self) -> bool {
        matches!(self.kind, BodyKind::Anchor)
    }

    pub fn orbit(&self) -> Option<&CircularOrbit> {
        match &self.kind {
            BodyKind::Orbiting(orbit) => Some(orbit),
            BodyKind::Anchor => None,
        }
    }

    pub fn angle(&self) -> f64 {
        self.orbit().map_or(0.0, CircularOrbit::angle)
    }

    pub fn angular_velocity(&self) -> f64 {
        self.orbit().map_or(0.0, CircularOrbit::angular_velocity)
    }

    pub fn projection(&self) -> Projection {
        self.projection
    }

    /// Pixel position, always derived from the current angle.
    pub fn position(&self) -> DVec2 {
        self.position
    }

    /// Moves an orbiting body to `angle` and re-derives its position.
    /// Anchors ignore the call.
    pub(crate) fn set_angle(&mut self, angle: f64) {
        if let BodyKind::Orbiting(orbit) = &mut self.kind {
            orbit.angle = angle;
            self.position = self.projection.project(orbit.semi_major_axis, angle);
        }
    }
}
