use crate::foundation::error::{FolioError, FolioResult};
use crate::foundation::math::clamp_finite;

/// Largest time step integrated in one call; longer gaps (tab switches, stalls) are clamped.
pub const MAX_STEP_SECS: f64 = 0.1;

/// Magnitude limit applied to targets before integration.
pub const INPUT_LIMIT: f64 = 1.0e6;

/// Damped spring parameters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    /// Spring constant `k`.
    pub stiffness: f64,
    /// Damping coefficient `c`.
    pub damping: f64,
    /// Attached mass `m`.
    pub mass: f64,
    /// Displacement below which the spring may settle, in output units.
    ///
    /// Must sit well under the smallest visible change of the narrowest channel (scale and
    /// opacity span less than one unit).
    pub rest_delta: f64,
    /// Speed below which the spring may settle, in output units per second.
    pub rest_speed: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            damping: 30.0,
            mass: 1.0,
            rest_delta: 1.0e-4,
            rest_speed: 1.0e-3,
        }
    }
}

impl SpringConfig {
    /// Validate that all parameters are finite and physically meaningful.
    pub fn validate(&self) -> FolioResult<()> {
        let all = [
            self.stiffness,
            self.damping,
            self.mass,
            self.rest_delta,
            self.rest_speed,
        ];
        if !all.iter().all(|v| v.is_finite()) {
            return Err(FolioError::animation("spring parameters must be finite"));
        }
        if self.stiffness <= 0.0 {
            return Err(FolioError::animation("spring stiffness must be > 0"));
        }
        if self.mass <= 0.0 {
            return Err(FolioError::animation("spring mass must be > 0"));
        }
        if self.damping < 0.0 || self.rest_delta < 0.0 || self.rest_speed < 0.0 {
            return Err(FolioError::animation(
                "spring damping and rest thresholds must be >= 0",
            ));
        }
        Ok(())
    }

    /// Undamped angular frequency `sqrt(k / m)`.
    pub fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    /// Damping ratio `c / (2 * sqrt(k * m))`; `>= 1` means no oscillation.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

/// Second-order smoothing filter following a moving target.
///
/// Each [`Spring::step`] integrates the closed-form solution of
/// `m x'' + c x' + k (x - target) = 0` with the target held constant over the step, so the
/// result is exact for piecewise-constant input regardless of frame rate.
#[derive(Clone, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    /// Create a spring resting at `initial`.
    pub fn new(config: SpringConfig, initial: f64) -> FolioResult<Self> {
        config.validate()?;
        let initial = clamp_finite(initial, INPUT_LIMIT, 0.0);
        Ok(Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        })
    }

    /// Current output value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Current velocity in units per second.
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Current target.
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Spring parameters.
    pub fn config(&self) -> SpringConfig {
        self.config
    }

    /// Teleport to `value` and settle there.
    pub fn jump(&mut self, value: f64) {
        let value = clamp_finite(value, INPUT_LIMIT, self.value);
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    /// Retarget the spring. NaN targets are ignored; infinities clamp to the input limit.
    pub fn set_target(&mut self, target: f64) {
        self.target = clamp_finite(target, INPUT_LIMIT, self.target);
    }

    /// `true` when displacement and speed are both under the rest thresholds.
    pub fn is_at_rest(&self) -> bool {
        (self.value - self.target).abs() <= self.config.rest_delta
            && self.velocity.abs() <= self.config.rest_speed
    }

    /// Advance by `dt_secs` and return the new value.
    ///
    /// The rest test runs after integration, so a small retarget is still followed smoothly.
    pub fn step(&mut self, dt_secs: f64) -> f64 {
        let dt = if dt_secs.is_finite() {
            dt_secs.clamp(0.0, MAX_STEP_SECS)
        } else {
            0.0
        };
        if dt == 0.0 || (self.value == self.target && self.velocity == 0.0) {
            return self.value;
        }

        let x0 = self.value - self.target;
        let v0 = self.velocity;
        let omega = self.config.natural_frequency();
        let zeta = self.config.damping_ratio();

        let (x, v) = if (zeta - 1.0).abs() < 1e-9 {
            let e = (-omega * dt).exp();
            let b = v0 + omega * x0;
            ((x0 + b * dt) * e, (v0 - omega * b * dt) * e)
        } else if zeta < 1.0 {
            let a = zeta * omega;
            let wd = omega * (1.0 - zeta * zeta).sqrt();
            let e = (-a * dt).exp();
            let (sin, cos) = (wd * dt).sin_cos();
            let b = (v0 + a * x0) / wd;
            (
                e * (x0 * cos + b * sin),
                e * (v0 * cos - ((a * v0 + omega * omega * x0) / wd) * sin),
            )
        } else {
            let s = omega * (zeta * zeta - 1.0).sqrt();
            let r1 = -zeta * omega + s;
            let r2 = -zeta * omega - s;
            let c2 = (v0 - r1 * x0) / (r2 - r1);
            let c1 = x0 - c2;
            let (e1, e2) = ((r1 * dt).exp(), (r2 * dt).exp());
            (c1 * e1 + c2 * e2, c1 * r1 * e1 + c2 * r2 * e2)
        };

        self.value = self.target + x;
        self.velocity = v;
        if self.is_at_rest() {
            self.value = self.target;
            self.velocity = 0.0;
        }
        self.value
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
