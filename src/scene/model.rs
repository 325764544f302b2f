use crate::foundation::core::{FrameIndex, Fps, Point, Rgba8};
use crate::foundation::error::{FolioError, FolioResult};
use crate::foundation::math::Rng64;
use crate::scene::theme::Palette;

/// Points in the particle field.
pub const PARTICLE_COUNT: usize = 500;
/// Edge length of the cube the particles are scattered in.
pub const PARTICLE_EXTENT: f64 = 15.0;
/// Seed used by [`SceneSpec::hero`] when none is configured.
pub const DEFAULT_SEED: u64 = 0x5EED_F011_0000_0001;

/// Screen-reader description of the hero scene.
pub const SCENE_LABEL: &str = "Interactive 3D abstract visualization representing Haseeb Labs: \
     Software Dev, Thinker, and Best Programmer services with Young Energy.";

/// World-space vector `[x, y, z]`.
pub type Vec3 = [f64; 3];

/// Rotate `v` by Euler angles applied in `XYZ` order (matrix `Rx·Ry·Rz`).
pub fn rotate_xyz(v: Vec3, euler: Vec3) -> Vec3 {
    let [x, y, z] = v;
    let (sx, cx) = euler[0].sin_cos();
    let (sy, cy) = euler[1].sin_cos();
    let (sz, cz) = euler[2].sin_cos();

    // Rz
    let (x, y) = (x * cz - y * sz, x * sz + y * cz);
    // Ry
    let (x, z) = (x * cy + z * sy, -x * sy + z * cy);
    // Rx
    let (y, z) = (y * cx - z * sx, y * sx + z * cx);
    [x, y, z]
}

fn add(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

/// Which palette entry a primitive is drawn with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorRole {
    /// Palette primary.
    Primary,
    /// Palette accent.
    Accent,
    /// Palette particle color.
    Particles,
}

impl ColorRole {
    /// Resolve against `palette`.
    pub fn resolve(self, palette: &Palette) -> Rgba8 {
        match self {
            Self::Primary => palette.primary,
            Self::Accent => palette.accent,
            Self::Particles => palette.particles,
        }
    }
}

/// Primitive geometry.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    /// Sphere with a noise-distorted surface.
    DistortedSphere {
        /// Radius.
        radius: f64,
        /// Distortion amount.
        distort: f64,
    },
    /// Torus.
    Torus {
        /// Ring radius.
        radius: f64,
        /// Tube radius.
        tube: f64,
    },
    /// Wireframe icosahedron.
    Icosahedron {
        /// Circumradius.
        radius: f64,
    },
}

/// Floating-group parameters: gentle bobbing and wobble around the primitive's placement.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FloatParams {
    /// Animation speed.
    pub speed: f64,
    /// Wobble amplitude multiplier.
    pub rotation_intensity: f64,
    /// Bob amplitude multiplier.
    pub float_intensity: f64,
    /// Phase offset in seconds.
    pub offset: f64,
}

impl FloatParams {
    /// Group rotation and vertical offset at time `t` seconds.
    pub fn sample(&self, t: f64) -> (Vec3, f64) {
        let phase = (self.offset + t) / 4.0 * self.speed;
        let (s, c) = phase.sin_cos();
        let rotation = [
            c / 8.0 * self.rotation_intensity,
            s / 8.0 * self.rotation_intensity,
            s / 20.0 * self.rotation_intensity,
        ];
        let y = s / 10.0 * self.float_intensity;
        (rotation, y)
    }
}

/// Per-primitive rotation law, evaluated at elapsed time `t` and frame count `n`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "law", rename_all = "snake_case")]
pub enum Spin {
    /// `rx = sin(t·speed)·0.3`, `ry += 0.005` per frame.
    Wobble {
        /// Sine speed.
        speed: f64,
    },
    /// `rx = 0.3·t`, `ry = 0.2·t`.
    Tumble,
    /// `rx += 0.003` per frame, `rz = sin(0.5·t)·0.3`.
    Drift,
}

impl Spin {
    /// Local rotation after `frames` frames at elapsed time `t`.
    pub fn rotation(self, t: f64, frames: u64) -> Vec3 {
        let n = frames as f64;
        match self {
            Self::Wobble { speed } => [(t * speed).sin() * 0.3, 0.005 * n, 0.0],
            Self::Tumble => [t * 0.3, t * 0.2, 0.0],
            Self::Drift => [0.003 * n, 0.0, (t * 0.5).sin() * 0.3],
        }
    }
}

/// One floating primitive.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Primitive {
    /// Geometry.
    pub shape: Shape,
    /// Placement inside its floating group.
    pub position: Vec3,
    /// Palette entry.
    pub color: ColorRole,
    /// Floating group parameters.
    pub float: FloatParams,
    /// Own rotation law.
    pub spin: Spin,
}

/// Perspective camera looking down `-z`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Camera {
    /// Distance from the origin along `+z`.
    pub z: f64,
    /// Vertical field of view in degrees.
    pub fov_deg: f64,
    /// Near clip distance.
    pub near: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            z: 6.0,
            fov_deg: 60.0,
            near: 0.1,
        }
    }
}

/// A projected point: screen position plus scale and distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    /// Pixel position, origin top-left.
    pub screen: Point,
    /// Pixels per world unit at this depth.
    pub pixels_per_unit: f64,
    /// Distance in front of the camera.
    pub depth: f64,
}

impl Camera {
    /// Project `p` onto a `width`×`height` frame; `None` behind the near plane.
    pub fn project(&self, p: Vec3, width: u32, height: u32) -> Option<Projected> {
        let depth = self.z - p[2];
        if depth <= self.near {
            return None;
        }
        let (w, h) = (f64::from(width), f64::from(height));
        let focal = 1.0 / (self.fov_deg.to_radians() / 2.0).tan();
        let aspect = w / h;
        let ndc_x = p[0] * focal / aspect / depth;
        let ndc_y = p[1] * focal / depth;
        Some(Projected {
            screen: Point::new((ndc_x + 1.0) * 0.5 * w, (1.0 - ndc_y) * 0.5 * h),
            pixels_per_unit: focal / depth * h * 0.5,
            depth,
        })
    }
}

/// Static description of the decorative hero scene.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SceneSpec {
    /// Floating primitives.
    pub primitives: Vec<Primitive>,
    /// Particle positions.
    #[serde(skip)]
    pub particles: Vec<Vec3>,
    /// Particle size in world units.
    pub particle_size: f64,
    /// Particle opacity.
    pub particle_opacity: f64,
    /// Viewing camera.
    pub camera: Camera,
    /// Accessible description.
    pub label: String,
}

/// Placement of one primitive at a sampled instant.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PrimitivePose {
    /// Geometry.
    pub shape: Shape,
    /// Palette entry.
    pub color: ColorRole,
    /// Primitive placement inside its group.
    pub position: Vec3,
    /// Primitive's own rotation.
    pub rotation: Vec3,
    /// Floating group rotation.
    pub group_rotation: Vec3,
    /// Floating group vertical offset.
    pub group_offset_y: f64,
}

impl PrimitivePose {
    /// Map a vertex from primitive-local space into world space.
    pub fn transform(&self, local: Vec3) -> Vec3 {
        let in_group = add(rotate_xyz(local, self.rotation), self.position);
        add(rotate_xyz(in_group, self.group_rotation), [0.0, self.group_offset_y, 0.0])
    }

    /// World-space center.
    pub fn center(&self) -> Vec3 {
        self.transform([0.0; 3])
    }
}

/// All primitive poses at one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SceneSample {
    /// Frame sampled, relative to scene mount.
    pub frame: FrameIndex,
    /// Elapsed seconds.
    pub time_secs: f64,
    /// One pose per primitive, in declaration order.
    pub primitives: Vec<PrimitivePose>,
    /// Rotation of the whole particle field.
    pub particle_rotation: Vec3,
}

impl SceneSpec {
    /// The hero scene: two distorted spheres, a torus, a wireframe icosahedron and a seeded
    /// particle field.
    pub fn hero(seed: u64) -> Self {
        let mut rng = Rng64::new(seed);
        let mut float = |speed: f64, rotation_intensity: f64, float_intensity: f64| FloatParams {
            speed,
            rotation_intensity,
            float_intensity,
            offset: rng.next_f64_01() * 10_000.0,
        };

        let primitives = vec![
            Primitive {
                shape: Shape::DistortedSphere {
                    radius: 1.0,
                    distort: 0.4,
                },
                position: [-2.5, 1.0, -2.0],
                color: ColorRole::Primary,
                float: float(2.0, 1.0, 2.0),
                spin: Spin::Wobble { speed: 0.5 },
            },
            Primitive {
                shape: Shape::DistortedSphere {
                    radius: 0.6,
                    distort: 0.4,
                },
                position: [3.0, -1.0, -1.0],
                color: ColorRole::Accent,
                float: float(2.0, 1.0, 2.0),
                spin: Spin::Wobble { speed: 0.7 },
            },
            Primitive {
                shape: Shape::Torus {
                    radius: 0.8,
                    tube: 0.3,
                },
                position: [2.0, 2.0, -3.0],
                color: ColorRole::Primary,
                float: float(1.5, 2.0, 1.0),
                spin: Spin::Tumble,
            },
            Primitive {
                shape: Shape::Icosahedron { radius: 0.7 },
                position: [-3.0, -2.0, -2.0],
                color: ColorRole::Accent,
                float: float(2.0, 1.5, 2.0),
                spin: Spin::Drift,
            },
        ];

        let half = PARTICLE_EXTENT / 2.0;
        let particles = (0..PARTICLE_COUNT)
            .map(|_| {
                [
                    rng.next_centered(half),
                    rng.next_centered(half),
                    rng.next_centered(half),
                ]
            })
            .collect();

        Self {
            primitives,
            particles,
            particle_size: 0.03,
            particle_opacity: 0.8,
            camera: Camera::default(),
            label: SCENE_LABEL.to_owned(),
        }
    }

    /// Check that every value the rasterizer consumes is finite and positive where needed.
    pub fn validate(&self) -> FolioResult<()> {
        let finite = |v: &Vec3| v.iter().all(|c| c.is_finite());
        let primitives_ok = self.primitives.iter().all(|p| finite(&p.position));
        if !primitives_ok || !self.particles.iter().all(finite) {
            return Err(FolioError::scene("scene positions must be finite"));
        }
        if !(self.camera.fov_deg > 0.0 && self.camera.fov_deg < 180.0) {
            return Err(FolioError::scene("camera fov must be in (0, 180) degrees"));
        }
        Ok(())
    }

    /// Poses at `frame` frames after mount.
    pub fn sample(&self, frame: FrameIndex, fps: Fps) -> SceneSample {
        let t = fps.frames_to_secs(frame.0);
        let primitives = self
            .primitives
            .iter()
            .map(|p| {
                let (group_rotation, group_offset_y) = p.float.sample(t);
                PrimitivePose {
                    shape: p.shape,
                    color: p.color,
                    position: p.position,
                    rotation: p.spin.rotation(t, frame.0),
                    group_rotation,
                    group_offset_y,
                }
            })
            .collect();
        SceneSample {
            frame,
            time_secs: t,
            primitives,
            particle_rotation: [(t * 0.1).sin() * 0.1, t * 0.02, 0.0],
        }
    }
}

impl Default for SceneSpec {
    fn default() -> Self {
        Self::hero(DEFAULT_SEED)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
