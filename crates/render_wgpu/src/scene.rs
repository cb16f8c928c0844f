//! Turns simulation state into an ordered, GPU-free draw list.
//!
//! Stacking follows list order: orbit guides first, then each body with its
//! label, then the help block and the status line on top.

use glam::Vec2;
use orrery_core::{Body, Rgb, Simulation};

/// Visual constants for the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneStyle {
    pub background: Rgb,
    pub orbit_color: Rgb,
    pub orbit_width_px: f32,
    pub text_color: Rgb,
    pub label_font_px: f32,
    pub label_offset_px: f32,
    pub hud_font_px: f32,
    /// The anchor's true radius would swallow the inner orbits.
    pub anchor_radius_px: f32,
    /// Physical radius that maps to `reference_size_px`.
    pub reference_radius_km: f64,
    pub reference_size_px: f64,
    pub min_body_radius_px: f64,
    pub help_origin: Vec2,
    pub help_line_spacing_px: f32,
    /// Distance of the status line from the bottom edge.
    pub status_inset_px: f32,
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            background: Rgb::BLACK,
            orbit_color: Rgb(50, 50, 50),
            orbit_width_px: 1.0,
            text_color: Rgb::WHITE,
            label_font_px: 12.0,
            label_offset_px: 10.0,
            hud_font_px: 16.0,
            anchor_radius_px: 5.0,
            reference_radius_km: 6371.0,
            reference_size_px: 3.0,
            min_body_radius_px: 2.0,
            help_origin: Vec2::new(10.0, 10.0),
            help_line_spacing_px: 20.0,
            status_inset_px: 30.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    TopLeft,
    Center,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    OrbitGuide {
        center: Vec2,
        radius: f32,
        width: f32,
        color: Rgb,
    },
    Body {
        center: Vec2,
        radius: f32,
        color: Rgb,
    },
    Text {
        pos: Vec2,
        text: String,
        size: f32,
        color: Rgb,
        align: TextAlign,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub background: Rgb,
    pub shapes: Vec<Shape>,
}

/// On-screen radius of a body. Anchors get a fixed size; everything else is
/// scaled against the reference radius, floored at the minimum and capped at
/// the display scale.
pub fn display_radius(body: &Body, style: &SceneStyle) -> f32 {
    if body.is_anchor() {
        return style.anchor_radius_px;
    }
    let scaled = (body.radius_km() / style.reference_radius_km * style.reference_size_px).floor();
    let cap = body.projection().scale.floor();
    scaled.max(style.min_body_radius_px).min(cap) as f32
}

/// Whole-pixel guide radius for an orbit of `semi_major_axis` AU.
pub fn orbit_guide_radius(semi_major_axis: f64, scale: f64) -> f32 {
    (semi_major_axis * scale).floor() as f32
}

pub fn status_line(sim: &Simulation) -> String {
    let state = sim.state();
    let mut line = format!("Speed: {:.1}x", state.speed_factor());
    if state.is_paused() {
        line.push_str("  [paused]");
    }
    line
}

/// Builds the full frame for the current state. Calling it twice on the
/// same state yields the same scene.
pub fn compose(sim: &Simulation, viewport: Vec2, style: &SceneStyle, help: &[String]) -> Scene {
    let bodies = sim.bodies();
    let mut shapes = Vec::with_capacity(bodies.len() * 3 + help.len() + 1);

    for body in bodies {
        if let Some(orbit) = body.orbit() {
            let projection = body.projection();
            shapes.push(Shape::OrbitGuide {
                center: projection.center.as_vec2(),
                radius: orbit_guide_radius(orbit.semi_major_axis(), projection.scale),
                width: style.orbit_width_px,
                color: style.orbit_color,
            });
        }
    }

    for body in bodies {
        let center = body.position().as_vec2();
        let radius = display_radius(body, style);
        shapes.push(Shape::Body {
            center,
            radius,
            color: body.color(),
        });
        shapes.push(Shape::Text {
            pos: center + Vec2::new(0.0, radius + style.label_offset_px),
            text: body.name().to_string(),
            size: style.label_font_px,
            color: style.text_color,
            align: TextAlign::Center,
        });
    }

    for (i, line) in help.iter().enumerate() {
        shapes.push(Shape::Text {
            pos: style.help_origin + Vec2::new(0.0, i as f32 * style.help_line_spacing_px),
            text: line.clone(),
            size: style.hud_font_px,
            color: style.text_color,
            align: TextAlign::TopLeft,
        });
    }

    shapes.push(Shape::Text {
        pos: Vec2::new(style.help_origin.x, viewport.y - style.status_inset_px),
        text: status_line(sim),
        size: style.hud_font_px,
        color: style.text_color,
        align: TextAlign::TopLeft,
    });

    Scene {
        background: style.background,
        shapes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;
    use orrery_core::{solar_system, BodySpec, Projection, SimInput, SimSettings};

    const VIEWPORT: Vec2 = Vec2::new(1920.0, 1000.0);

    fn sim() -> Simulation {
        Simulation::new(&solar_system(), SimSettings::default()).unwrap()
    }

    fn help() -> Vec<String> {
        vec!["SPACE: Pause/Resume".to_string(), "ESC: Quit".to_string()]
    }

    fn radius_of(sim: &Simulation, name: &str) -> f32 {
        let body = sim.bodies().iter().find(|b| b.name() == name).unwrap();
        display_radius(body, &SceneStyle::default())
    }

    #[test]
    fn test_saturn_guide_radius() {
        assert_eq!(orbit_guide_radius(9.58, 30.0), 287.0);

        let scene = compose(&sim(), VIEWPORT, &SceneStyle::default(), &[]);
        let guides: Vec<_> = scene
            .shapes
            .iter()
            .filter_map(|s| match s {
                Shape::OrbitGuide { center, radius, .. } => Some((*center, *radius)),
                _ => None,
            })
            .collect();
        assert_eq!(guides.len(), 8);
        assert!(guides.contains(&(Vec2::new(960.0, 500.0), 287.0)));
    }

    #[test]
    fn test_display_radius_mapping() {
        let sim = sim();
        assert_eq!(radius_of(&sim, "Sun"), 5.0);
        assert_eq!(radius_of(&sim, "Mercury"), 2.0);
        assert_eq!(radius_of(&sim, "Earth"), 3.0);
        assert_eq!(radius_of(&sim, "Saturn"), 27.0);
        assert_eq!(radius_of(&sim, "Jupiter"), 30.0);
    }

    #[test]
    fn test_draw_order() {
        let scene = compose(&sim(), VIEWPORT, &SceneStyle::default(), &help());
        let last_guide = scene
            .shapes
            .iter()
            .rposition(|s| matches!(s, Shape::OrbitGuide { .. }))
            .unwrap();
        let first_body = scene
            .shapes
            .iter()
            .position(|s| matches!(s, Shape::Body { .. }))
            .unwrap();
        assert!(last_guide < first_body);

        for (i, shape) in scene.shapes.iter().enumerate() {
            if let Shape::Body { .. } = shape {
                assert!(matches!(
                    scene.shapes[i + 1],
                    Shape::Text { align: TextAlign::Center, .. }
                ));
            }
        }

        match scene.shapes.last().unwrap() {
            Shape::Text { text, pos, .. } => {
                assert_eq!(text, "Speed: 1.0x");
                assert_eq!(*pos, Vec2::new(10.0, 970.0));
            }
            other => panic!("status line expected, got {other:?}"),
        }
    }

    #[test]
    fn test_help_block_top_left() {
        let scene = compose(&sim(), VIEWPORT, &SceneStyle::default(), &help());
        let help_pos: Vec<_> = scene
            .shapes
            .iter()
            .filter_map(|s| match s {
                Shape::Text { pos, align: TextAlign::TopLeft, text, .. } if text != "Speed: 1.0x" => {
                    Some(*pos)
                }
                _ => None,
            })
            .collect();
        assert_eq!(help_pos, vec![Vec2::new(10.0, 10.0), Vec2::new(10.0, 30.0)]);
    }

    #[test]
    fn test_label_below_body() {
        let frame = Projection::new(DVec2::new(960.0, 500.0), 30.0);
        let specs = vec![BodySpec::planet("Earth", 1.0, 365.25, 6371.0, Rgb(0, 0, 255), 5.972e24)];
        let sim = Simulation::new(
            &specs,
            SimSettings {
                base_step_days: 1.0,
                projection: frame,
            },
        )
        .unwrap();
        let scene = compose(&sim, VIEWPORT, &SceneStyle::default(), &[]);
        assert_eq!(
            scene.shapes[1],
            Shape::Body {
                center: Vec2::new(990.0, 500.0),
                radius: 3.0,
                color: Rgb(0, 0, 255),
            }
        );
        match &scene.shapes[2] {
            Shape::Text { pos, text, size, .. } => {
                assert_eq!(text, "Earth");
                assert_eq!(*pos, Vec2::new(990.0, 513.0));
                assert_eq!(*size, 12.0);
            }
            other => panic!("label expected, got {other:?}"),
        }
    }

    #[test]
    fn test_status_line_tracks_state() {
        let mut sim = sim();
        sim.frame([SimInput::SpeedDown; 4]);
        assert_eq!(status_line(&sim), "Speed: 0.1x");
        sim.frame([SimInput::SpeedUp, SimInput::TogglePause]);
        assert_eq!(status_line(&sim), "Speed: 0.2x  [paused]");
    }

    #[test]
    fn test_compose_is_idempotent() {
        let sim = sim();
        let style = SceneStyle::default();
        assert_eq!(
            compose(&sim, VIEWPORT, &style, &help()),
            compose(&sim, VIEWPORT, &style, &help())
        );
    }
}
