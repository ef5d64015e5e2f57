use std::rc::Rc;

use yew::Reducible;

pub const PARTICLE_COUNT: usize = 20;
pub const PARTICLE_TICK_MS: u32 = 50;
pub const RIPPLE_MS: u32 = 500;

/// One-shot flag for a section's entrance transition. It only ever goes from
/// hidden to entered; later visibility changes are ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EntranceLatch {
    entered: bool,
}

impl EntranceLatch {
    pub fn observe(self, visible: bool) -> Self {
        Self {
            entered: self.entered || visible,
        }
    }

    pub fn entered(self) -> bool {
        self.entered
    }
}

/// Transition classes for an element gated by the latch. `hidden_offset` is
/// the translate class applied before entry, e.g. `translate-y-8`.
pub fn entrance_class(in_view: bool, hidden_offset: &str) -> String {
    if in_view {
        "reveal revealed".to_string()
    } else if hidden_offset.is_empty() {
        "reveal".to_string()
    } else {
        format!("reveal {}", hidden_offset)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub speed: f64,
}

impl Particle {
    /// Draws a particle from four samples in `[0, 1)`.
    pub fn from_samples(mut sample: impl FnMut() -> f64) -> Self {
        Self {
            x: sample() * 100.0,
            y: sample() * 100.0,
            size: sample() * 4.0 + 1.0,
            speed: sample() * 0.5 + 0.1,
        }
    }

    /// Moves down by `speed`, wrapping at the bottom of the container.
    pub fn advance(self) -> Self {
        Self {
            y: (self.y + self.speed).rem_euclid(100.0),
            ..self
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParticleField {
    pub particles: Vec<Particle>,
}

pub enum ParticleAction {
    Seed(Vec<Particle>),
    Tick,
}

impl ParticleField {
    pub fn generate(count: usize, mut sample: impl FnMut() -> f64) -> Vec<Particle> {
        (0..count).map(|_| Particle::from_samples(&mut sample)).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

impl Reducible for ParticleField {
    type Action = ParticleAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ParticleAction::Seed(particles) => Self { particles }.into(),
            ParticleAction::Tick => Self {
                particles: self.particles.iter().map(|p| p.advance()).collect(),
            }
            .into(),
        }
    }
}

/// Pointer offset used by the hero's background shapes, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Parallax {
    pub x: f64,
    pub y: f64,
}

impl Parallax {
    const RANGE: f64 = 20.0;

    pub fn from_pointer(client_x: f64, client_y: f64, width: f64, height: f64) -> Self {
        if width <= 0.0 || height <= 0.0 {
            return Self::default();
        }
        Self {
            x: (client_x / width - 0.5) * Self::RANGE,
            y: (client_y / height - 0.5) * Self::RANGE,
        }
    }

    pub fn transform(self, factor: f64) -> String {
        format!("translate({}px, {}px)", self.x * factor, self.y * factor)
    }
}

/// Where a touch landed, relative to the form's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub x: f64,
    pub y: f64,
}

impl Ripple {
    pub fn at(client_x: f64, client_y: f64, origin_left: f64, origin_top: f64) -> Self {
        Self {
            x: client_x - origin_left,
            y: client_y - origin_top,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn latch_never_reverts() {
        let latch = EntranceLatch::default();
        assert!(!latch.entered());
        let latch = latch.observe(false);
        assert!(!latch.entered());
        let latch = latch.observe(true);
        assert!(latch.entered());
        let latch = latch.observe(false).observe(false);
        assert!(latch.entered());
    }

    #[test]
    fn entrance_classes() {
        assert_eq!(entrance_class(false, "translate-y-8"), "reveal translate-y-8");
        assert_eq!(entrance_class(false, ""), "reveal");
        assert_eq!(entrance_class(true, "translate-y-8"), "reveal revealed");
    }

    #[test]
    fn particle_wraps_at_bottom() {
        let p = Particle { x: 10.0, y: 99.0, size: 2.0, speed: 2.0 };
        let next = p.advance();
        assert_relative_eq!(next.y, 1.0, epsilon = 1e-9);
        assert_relative_eq!(next.x, 10.0);
    }

    #[test]
    fn particle_samples_map_into_ranges() {
        let mut samples = [0.0, 0.5, 0.999, 1.0 - f64::EPSILON].into_iter();
        let p = Particle::from_samples(|| samples.next().unwrap_or(0.0));
        assert_relative_eq!(p.x, 0.0);
        assert_relative_eq!(p.y, 50.0);
        assert!(p.size >= 1.0 && p.size < 5.0);
        assert!(p.speed >= 0.1 && p.speed < 0.6);
    }

    #[test]
    fn generate_draws_requested_count() {
        let mut n = 0.0;
        let particles = ParticleField::generate(PARTICLE_COUNT, || {
            n = (n + 0.37) % 1.0;
            n
        });
        assert_eq!(particles.len(), PARTICLE_COUNT);
        assert!(particles.iter().all(|p| (0.0..100.0).contains(&p.y)));
    }

    #[test]
    fn tick_advances_every_particle() {
        let field = Rc::new(ParticleField::default());
        let field = field.reduce(ParticleAction::Seed(vec![
            Particle { x: 0.0, y: 10.0, size: 1.0, speed: 0.5 },
            Particle { x: 0.0, y: 99.9, size: 1.0, speed: 0.2 },
        ]));
        let field = field.reduce(ParticleAction::Tick);
        assert_relative_eq!(field.particles[0].y, 10.5);
        assert_relative_eq!(field.particles[1].y, 0.1, epsilon = 1e-9);
    }

    #[test]
    fn parallax_is_centered_on_viewport() {
        let center = Parallax::from_pointer(500.0, 400.0, 1000.0, 800.0);
        assert_relative_eq!(center.x, 0.0);
        assert_relative_eq!(center.y, 0.0);

        let corner = Parallax::from_pointer(1000.0, 0.0, 1000.0, 800.0);
        assert_relative_eq!(corner.x, 10.0);
        assert_relative_eq!(corner.y, -10.0);
        assert_eq!(corner.transform(0.5), "translate(5px, -5px)");
        assert_eq!(corner.transform(-0.3), "translate(-3px, 3px)");
    }

    #[test]
    fn parallax_ignores_zero_sized_viewport() {
        assert_eq!(Parallax::from_pointer(10.0, 10.0, 0.0, 0.0), Parallax::default());
    }

    #[test]
    fn ripple_is_relative_to_origin() {
        let ripple = Ripple::at(150.0, 320.0, 100.0, 300.0);
        assert_relative_eq!(ripple.x, 50.0);
        assert_relative_eq!(ripple.y, 20.0);
    }

    #[test]
    fn ripple_stays_form_local_when_form_is_scrolled_partly_off_screen() {
        let ripple = Ripple::at(40.0, 10.0, 20.0, -200.0);
        assert_relative_eq!(ripple.x, 20.0);
        assert_relative_eq!(ripple.y, 210.0);
    }
}
