//! Damped spring used for card slides.
//!
//! Closed-form solution of `m x'' + c x' + k x = 0` released from rest at
//! displacement `x0`, so a pose can be computed from elapsed time alone.

/// Points below which a spring counts as at rest
pub const REST_DELTA: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl Default for Spring {
    fn default() -> Self {
        Self {
            stiffness: 300.0,
            damping: 30.0,
            mass: 1.0,
        }
    }
}

impl Spring {
    fn natural_frequency(&self) -> f32 {
        (self.stiffness / self.mass).sqrt()
    }

    fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Displacement at `t` seconds after release from `x0` with no velocity.
    pub fn displacement(&self, x0: f32, t: f32) -> f32 {
        if t <= 0.0 {
            return x0;
        }
        let omega = self.natural_frequency();
        let zeta = self.damping_ratio();

        if zeta < 1.0 {
            let decay = zeta * omega;
            let omega_d = omega * (1.0 - zeta * zeta).sqrt();
            (-decay * t).exp() * (x0 * (omega_d * t).cos() + (decay * x0 / omega_d) * (omega_d * t).sin())
        } else if (zeta - 1.0).abs() < f32::EPSILON {
            (-omega * t).exp() * (x0 + omega * x0 * t)
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -omega * (zeta - root);
            let r2 = -omega * (zeta + root);
            let a = -r2 * x0 / (r1 - r2);
            let b = r1 * x0 / (r1 - r2);
            a * (r1 * t).exp() + b * (r2 * t).exp()
        }
    }

    /// Fraction of the initial displacement still remaining at `t`.
    pub fn remaining(&self, t: f32) -> f32 {
        self.displacement(1.0, t)
    }

    /// Time after which a release from `x0` stays within `REST_DELTA`.
    pub fn settle_time(&self, x0: f32) -> f32 {
        let x0 = x0.abs();
        if x0 <= REST_DELTA {
            return 0.0;
        }
        let omega = self.natural_frequency();
        let zeta = self.damping_ratio();

        let (amplitude, decay) = if zeta < 1.0 {
            let decay = zeta * omega;
            let omega_d = omega * (1.0 - zeta * zeta).sqrt();
            (x0 * (1.0 + (decay / omega_d).powi(2)).sqrt(), decay)
        } else {
            // slowest root dominates; the factor covers the polynomial term
            let root = (zeta * zeta - 1.0).max(0.0).sqrt();
            (x0 * 2.0, omega * (zeta - root))
        };

        if decay <= 0.0 {
            return f32::INFINITY;
        }
        ((amplitude / REST_DELTA).ln() / decay).max(0.0)
    }
}

/// Linear fade from 0 to 1 over `duration` seconds.
pub fn fade_in(t: f32, duration: f32) -> f32 {
    if duration <= 0.0 {
        return 1.0;
    }
    (t / duration).clamp(0.0, 1.0)
}
