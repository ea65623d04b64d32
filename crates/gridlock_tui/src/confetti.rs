//! Win-celebration particle burst.
//!
//! A hundred particles launch from the center of the screen with random
//! velocities, fall under constant gravity, and die when they leave the
//! bottom edge. Wins only - draws get no confetti.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use ratatui::style::Color;

const PARTICLE_COUNT: usize = 100;
const GRAVITY: f32 = 0.1;

/// A single piece of confetti.
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    /// Horizontal position in cells.
    pub x: f32,
    /// Vertical position in cells.
    pub y: f32,
    dx: f32,
    dy: f32,
    /// Render color.
    pub color: Color,
}

/// The particle system driving the celebration animation.
#[derive(Debug)]
pub struct Confetti {
    particles: Vec<Particle>,
    rng: SmallRng,
}

impl Confetti {
    /// Creates an idle particle system.
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
            rng: SmallRng::from_entropy(),
        }
    }

    /// Launches a burst from the center of a `width` x `height` viewport.
    pub fn burst(&mut self, width: u16, height: u16) {
        self.particles.clear();
        let (cx, cy) = (f32::from(width) / 2.0, f32::from(height) / 2.0);
        for _ in 0..PARTICLE_COUNT {
            // Terminal cells are roughly twice as tall as wide, so spread
            // sideways faster than vertically.
            let particle = Particle {
                x: cx,
                y: cy,
                dx: self.rng.gen_range(-2.5..2.5),
                dy: self.rng.gen_range(-1.25..1.25),
                color: hue_color(self.rng.gen_range(0.0..360.0)),
            };
            self.particles.push(particle);
        }
    }

    /// Advances the animation one tick; particles below `height` are culled.
    pub fn step(&mut self, height: u16) {
        for particle in &mut self.particles {
            particle.x += particle.dx;
            particle.y += particle.dy;
            particle.dy += GRAVITY;
        }
        self.particles
            .retain(|particle| particle.y < f32::from(height));
    }

    /// True while any particles are still falling.
    pub fn is_active(&self) -> bool {
        !self.particles.is_empty()
    }

    /// Stops the animation immediately.
    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// Live particles, for rendering.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}

impl Default for Confetti {
    fn default() -> Self {
        Self::new()
    }
}

/// Fully saturated mid-lightness color for a hue in degrees.
fn hue_color(hue: f32) -> Color {
    let h = (hue / 60.0) % 6.0;
    let x = (1.0 - (h % 2.0 - 1.0).abs()) * 255.0;
    let x = x as u8;
    match h as u32 {
        0 => Color::Rgb(255, x, 0),
        1 => Color::Rgb(x, 255, 0),
        2 => Color::Rgb(0, 255, x),
        3 => Color::Rgb(0, x, 255),
        4 => Color::Rgb(x, 0, 255),
        _ => Color::Rgb(255, 0, x),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_spawns_from_center() {
        let mut confetti = Confetti::new();
        confetti.burst(80, 24);
        assert!(confetti.is_active());
        assert!(
            confetti
                .particles()
                .iter()
                .all(|p| p.x == 40.0 && p.y == 12.0)
        );
    }

    #[test]
    fn test_particles_fall_off_screen_and_die() {
        let mut confetti = Confetti::new();
        confetti.burst(80, 24);
        // Gravity wins eventually; every particle exits through the bottom.
        for _ in 0..200 {
            confetti.step(24);
        }
        assert!(!confetti.is_active());
    }

    #[test]
    fn test_clear_stops_the_animation() {
        let mut confetti = Confetti::new();
        confetti.burst(80, 24);
        confetti.clear();
        assert!(!confetti.is_active());
    }
}
