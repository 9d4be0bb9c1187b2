/// Flames demo: a fixed pool of particles rising from the bottom center,
/// growing and fading out. A free particle is emitted every 200 ms.

use curtain_engine::{Easing, Rng, Scene, SceneContext, SceneError, Viewport};
use glam::Vec2;

use crate::menu::{MainMenu, COMMAND_BACK};

const MAX_PARTICLES: usize = 10;
/// Seconds between emissions.
const EMISSION_INTERVAL: f32 = 0.2;
/// Emitter height above the bottom edge, as a fraction of the viewport.
const EMITTER_HEIGHT: f32 = 0.15;
/// Rise distance as a fraction of the viewport height.
const RISE: f32 = 0.1;
const MIN_LIFETIME: f32 = 1.0;
const LIFETIME_RANGE: f32 = 0.5;
const GROWTH: f32 = 10.5;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Particle {
    pub active: bool,
    pub position: Vec2,
    pub scale: f32,
    pub alpha: f32,
    pub rotation: f32,
    start: Vec2,
    end: Vec2,
    start_scale: f32,
    spin: f32,
    age: f32,
    lifetime: f32,
}

impl Particle {
    fn step(&mut self, seconds: f32) {
        self.age += seconds;
        let t = (self.age / self.lifetime).min(1.0);
        let eased = Easing::CubicOut.apply(t);
        self.position = self.start.lerp(self.end, eased);
        self.alpha = 1.0 - eased;
        self.scale = self.start_scale * (1.0 + (GROWTH - 1.0) * eased);
        self.rotation += self.spin * seconds;
        if t >= 1.0 {
            self.active = false;
        }
    }
}

#[derive(Debug)]
pub struct Flames {
    origin: Vec2,
    height: f32,
    particles: Vec<Particle>,
    since_emit: f32,
    rng: Rng,
}

impl Flames {
    pub fn new(viewport: Viewport) -> Self {
        let mut flames = Self {
            origin: Vec2::ZERO,
            height: viewport.height,
            particles: Vec::new(),
            since_emit: 0.0,
            rng: Rng::new(7),
        };
        flames.place(viewport);
        flames
    }

    fn place(&mut self, viewport: Viewport) {
        self.height = viewport.height;
        self.origin = Vec2::new(
            viewport.width / 2.0,
            viewport.height * (1.0 - EMITTER_HEIGHT),
        );
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn active_count(&self) -> usize {
        self.particles.iter().filter(|p| p.active).count()
    }

    fn emit(&mut self) {
        let Some(index) = self.particles.iter().position(|p| !p.active) else {
            return;
        };
        let rng = &mut self.rng;
        let start = self.origin + Vec2::new((rng.next_f32() - 0.5) * 5.0, 0.0);
        let end = start
            + Vec2::new(
                (rng.next_f32() - 0.5) * 0.5,
                -(self.height * RISE) - rng.next_f32() * 5.0,
            );
        let start_scale = 0.015 + rng.next_f32() * 0.03;
        self.particles[index] = Particle {
            active: true,
            position: start,
            scale: start_scale,
            alpha: 1.0,
            rotation: rng.next_f32() * std::f32::consts::TAU,
            start,
            end,
            start_scale,
            spin: (rng.next_f32() - 0.5) * std::f32::consts::PI,
            age: 0.0,
            lifetime: MIN_LIFETIME + rng.next_f32() * LIFETIME_RANGE,
        };
    }
}

impl Scene for Flames {
    fn name(&self) -> &str {
        "flames"
    }

    fn on_enter(&mut self, ctx: &mut SceneContext) -> Result<(), SceneError> {
        self.place(ctx.viewport());
        self.particles = vec![Particle::default(); MAX_PARTICLES];
        self.since_emit = 0.0;
        Ok(())
    }

    fn on_exit(&mut self) -> Result<(), SceneError> {
        self.particles.clear();
        Ok(())
    }

    fn update(&mut self, ctx: &mut SceneContext, delta: f32) -> Result<(), SceneError> {
        if ctx.commands().any(|id| id == COMMAND_BACK) {
            ctx.request_scene(MainMenu::new(), None);
        }

        let seconds = ctx.seconds(delta);
        for particle in self.particles.iter_mut().filter(|p| p.active) {
            particle.step(seconds);
        }

        self.since_emit += seconds;
        while self.since_emit >= EMISSION_INTERVAL {
            self.since_emit -= EMISSION_INTERVAL;
            self.emit();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entered() -> (Flames, SceneContext) {
        let viewport = Viewport::new(800.0, 600.0);
        let mut ctx = SceneContext::new(viewport);
        let mut flames = Flames::new(viewport);
        flames.on_enter(&mut ctx).unwrap();
        (flames, ctx)
    }

    #[test]
    fn pool_is_fixed() {
        let (mut flames, mut ctx) = entered();
        assert_eq!(flames.particles().len(), MAX_PARTICLES);
        assert_eq!(flames.active_count(), 0);

        // 12 emissions requested in 2.4 s; the pool caps them.
        for _ in 0..12 {
            flames.update(&mut ctx, 12.0).unwrap();
        }
        assert_eq!(flames.particles().len(), MAX_PARTICLES);
        assert!(flames.active_count() <= MAX_PARTICLES);
        assert!(flames.active_count() > 0);
    }

    #[test]
    fn particles_rise_and_fade() {
        let (mut flames, mut ctx) = entered();
        flames.update(&mut ctx, 12.0).unwrap();
        let emitted = flames.particles()[0];
        assert!(emitted.active);
        assert_eq!(emitted.alpha, 1.0);

        flames.update(&mut ctx, 6.0).unwrap();
        let later = flames.particles()[0];
        assert!(later.position.y < emitted.position.y);
        assert!(later.alpha < 1.0);
        assert!(later.scale > emitted.scale);
    }

    #[test]
    fn particles_expire() {
        let (mut flames, mut ctx) = entered();
        flames.update(&mut ctx, 12.0).unwrap();
        // Straight past the longest possible lifetime.
        flames.particles[0].step(MIN_LIFETIME + LIFETIME_RANGE);
        assert!(!flames.particles()[0].active);
        assert_eq!(flames.particles()[0].alpha, 0.0);
    }

    #[test]
    fn exit_releases_pool() {
        let (mut flames, _) = entered();
        flames.on_exit().unwrap();
        assert!(flames.particles().is_empty());
    }
}
