use std::ops::RangeInclusive;

use image::{Rgba, RgbaImage};

use crate::foundation::core::{Point, Rgba8};
use crate::foundation::error::FolioResult;
use crate::scene::backend::{SceneBackend, SceneFrameRGBA, SceneSettings};
use crate::scene::model::{PrimitivePose, SceneSample, SceneSpec, Shape, Vec3, rotate_xyz};
use crate::scene::theme::Palette;

const TORUS_RING_SEGMENTS: usize = 64;
const TORUS_TUBE_SEGMENTS: usize = 16;

/// Software rasterizer: shaded discs for spheres, splatted tori, line wireframes and point
/// particles, composited back to front.
pub struct CpuSceneBackend {
    settings: SceneSettings,
}

impl CpuSceneBackend {
    /// Backend producing frames of `settings` size.
    pub fn new(settings: SceneSettings) -> Self {
        Self { settings }
    }

    fn clear(&self) -> RgbaImage {
        let c = self.settings.clear.unwrap_or_else(Rgba8::transparent);
        RgbaImage::from_pixel(
            self.settings.width,
            self.settings.height,
            Rgba([c.r, c.g, c.b, c.a]),
        )
    }
}

impl SceneBackend for CpuSceneBackend {
    fn name(&self) -> &'static str {
        "cpu"
    }

    #[tracing::instrument(level = "trace", skip_all, fields(frame = sample.frame.0))]
    fn render(
        &mut self,
        spec: &SceneSpec,
        sample: &SceneSample,
        palette: &Palette,
    ) -> FolioResult<SceneFrameRGBA> {
        spec.validate()?;
        let (w, h) = (self.settings.width, self.settings.height);
        let mut img = self.clear();
        let cam = spec.camera;

        let particle = palette.particles.with_opacity(spec.particle_opacity);
        for p in &spec.particles {
            let world = rotate_xyz(*p, sample.particle_rotation);
            if let Some(pr) = cam.project(world, w, h) {
                let r = (spec.particle_size * pr.pixels_per_unit * 0.5).max(0.5);
                fill_disc(&mut img, pr.screen, r, particle);
            }
        }

        let mut order: Vec<(f64, &PrimitivePose)> = sample
            .primitives
            .iter()
            .filter_map(|pose| cam.project(pose.center(), w, h).map(|pr| (pr.depth, pose)))
            .collect();
        order.sort_by(|a, b| b.0.total_cmp(&a.0));

        for (_, pose) in order {
            let color = pose.color.resolve(palette);
            match pose.shape {
                Shape::DistortedSphere { radius, distort } => {
                    draw_sphere(&mut img, spec, sample, pose, radius, distort, color)
                }
                Shape::Torus { radius, tube } => {
                    draw_torus(&mut img, spec, pose, radius, tube, color)
                }
                Shape::Icosahedron { radius } => {
                    draw_icosahedron(&mut img, spec, pose, radius, color)
                }
            }
        }

        Ok(SceneFrameRGBA {
            width: w,
            height: h,
            data: img.into_raw(),
        })
    }
}

fn blend(img: &mut RgbaImage, x: i64, y: i64, c: Rgba8, coverage: f64) {
    if x < 0 || y < 0 || x >= i64::from(img.width()) || y >= i64::from(img.height()) {
        return;
    }
    let sa = f64::from(c.a) / 255.0 * coverage.clamp(0.0, 1.0);
    if sa <= 0.0 {
        return;
    }
    let dst = img.get_pixel_mut(x as u32, y as u32);
    let da = f64::from(dst[3]) / 255.0;
    let out_a = sa + da * (1.0 - sa);
    let channel = |s: u8, d: u8| {
        let v = (f64::from(s) * sa + f64::from(d) * da * (1.0 - sa)) / out_a;
        v.round().clamp(0.0, 255.0) as u8
    };
    *dst = Rgba([
        channel(c.r, dst[0]),
        channel(c.g, dst[1]),
        channel(c.b, dst[2]),
        (out_a * 255.0).round() as u8,
    ]);
}

fn shade(c: Rgba8, k: f64) -> Rgba8 {
    let ch = |v: u8| (f64::from(v) * k).round().clamp(0.0, 255.0) as u8;
    Rgba8 {
        r: ch(c.r),
        g: ch(c.g),
        b: ch(c.b),
        a: c.a,
    }
}

/// Pixel rows and columns covered by a disc of radius `r`, clipped to the image.
fn clip_span(
    img: &RgbaImage,
    center: Point,
    r: f64,
) -> Option<(RangeInclusive<i64>, RangeInclusive<i64>)> {
    if !(center.x.is_finite() && center.y.is_finite() && r.is_finite()) {
        return None;
    }
    let (w, h) = (i64::from(img.width()), i64::from(img.height()));
    let x0 = ((center.x - r).floor().max(0.0)) as i64;
    let y0 = ((center.y - r).floor().max(0.0)) as i64;
    let x1 = ((center.x + r).ceil() as i64).min(w - 1);
    let y1 = ((center.y + r).ceil() as i64).min(h - 1);
    if x0 > x1 || y0 > y1 {
        return None;
    }
    Some((x0..=x1, y0..=y1))
}

fn fill_disc(img: &mut RgbaImage, center: Point, r: f64, c: Rgba8) {
    if !(center.x.is_finite() && center.y.is_finite()) {
        return;
    }
    if r < 1.0 {
        blend(img, center.x.floor() as i64, center.y.floor() as i64, c, r);
        return;
    }
    let Some((xs, ys)) = clip_span(img, center, r) else {
        return;
    };
    for y in ys {
        for x in xs.clone() {
            let d = Point::new(x as f64 + 0.5, y as f64 + 0.5).distance(center);
            let coverage = (r - d + 0.5).clamp(0.0, 1.0);
            if coverage > 0.0 {
                blend(img, x, y, c, coverage);
            }
        }
    }
}

fn draw_sphere(
    img: &mut RgbaImage,
    spec: &SceneSpec,
    sample: &SceneSample,
    pose: &PrimitivePose,
    radius: f64,
    distort: f64,
    c: Rgba8,
) {
    let (w, h) = (img.width(), img.height());
    let Some(pr) = spec.camera.project(pose.center(), w, h) else {
        return;
    };
    let wobble = 1.0 + distort * 0.1 * (sample.time_secs * 2.0 + pose.rotation[0]).sin();
    let r = radius * wobble * pr.pixels_per_unit;
    let Some((xs, ys)) = clip_span(img, pr.screen, r) else {
        return;
    };
    // Light from the upper right, toward the viewer.
    let light = [0.5, 0.6, 0.62];
    for y in ys {
        for x in xs.clone() {
            let dx = (x as f64 + 0.5 - pr.screen.x) / r;
            let dy = (pr.screen.y - (y as f64 + 0.5)) / r;
            let d2 = dx * dx + dy * dy;
            if d2 > 1.0 {
                continue;
            }
            let nz = (1.0 - d2).sqrt();
            let lambert = (dx * light[0] + dy * light[1] + nz * light[2]).max(0.0);
            blend(img, x, y, shade(c, 0.35 + 0.75 * lambert), 1.0);
        }
    }
}

fn draw_torus(
    img: &mut RgbaImage,
    spec: &SceneSpec,
    pose: &PrimitivePose,
    radius: f64,
    tube: f64,
    c: Rgba8,
) {
    let (w, h) = (img.width(), img.height());
    let emissive = shade(c, 1.2);
    for i in 0..TORUS_RING_SEGMENTS {
        let u = i as f64 / TORUS_RING_SEGMENTS as f64 * std::f64::consts::TAU;
        for j in 0..TORUS_TUBE_SEGMENTS {
            let v = j as f64 / TORUS_TUBE_SEGMENTS as f64 * std::f64::consts::TAU;
            let ring = radius + tube * v.cos();
            let local: Vec3 = [ring * u.cos(), ring * u.sin(), tube * v.sin()];
            if let Some(pr) = spec.camera.project(pose.transform(local), w, h) {
                let k = 0.6 + 0.4 * v.sin().abs();
                fill_disc(img, pr.screen, tube * 0.45 * pr.pixels_per_unit, shade(emissive, k));
            }
        }
    }
}

/// Unit icosahedron vertices and its 30 edges.
fn icosahedron() -> ([Vec3; 12], Vec<(usize, usize)>) {
    let phi = (1.0 + 5.0_f64.sqrt()) / 2.0;
    let raw = [
        [-1.0, phi, 0.0],
        [1.0, phi, 0.0],
        [-1.0, -phi, 0.0],
        [1.0, -phi, 0.0],
        [0.0, -1.0, phi],
        [0.0, 1.0, phi],
        [0.0, -1.0, -phi],
        [0.0, 1.0, -phi],
        [phi, 0.0, -1.0],
        [phi, 0.0, 1.0],
        [-phi, 0.0, -1.0],
        [-phi, 0.0, 1.0],
    ];
    let norm = (1.0 + phi * phi).sqrt();
    let verts = raw.map(|v: Vec3| [v[0] / norm, v[1] / norm, v[2] / norm]);

    // Adjacent vertices are exactly one edge (2 / norm) apart.
    let edge = 2.0 / norm;
    let mut edges = Vec::with_capacity(30);
    for a in 0..verts.len() {
        for b in a + 1..verts.len() {
            let d = (0..3).map(|k| (verts[a][k] - verts[b][k]).powi(2)).sum::<f64>().sqrt();
            if (d - edge).abs() < 1e-9 {
                edges.push((a, b));
            }
        }
    }
    (verts, edges)
}

fn draw_icosahedron(
    img: &mut RgbaImage,
    spec: &SceneSpec,
    pose: &PrimitivePose,
    radius: f64,
    c: Rgba8,
) {
    let (w, h) = (img.width(), img.height());
    let (verts, edges) = icosahedron();
    let projected = verts.map(|v| {
        spec.camera
            .project(pose.transform([v[0] * radius, v[1] * radius, v[2] * radius]), w, h)
            .map(|p| p.screen)
    });
    for (a, b) in edges {
        if let (Some(pa), Some(pb)) = (projected[a], projected[b]) {
            draw_line(img, pa, pb, c);
        }
    }
}

fn draw_line(img: &mut RgbaImage, a: Point, b: Point, c: Rgba8) {
    let steps = (b - a).hypot().ceil().max(1.0) as usize;
    for i in 0..=steps {
        let p = a.lerp(b, i as f64 / steps as f64);
        blend(img, p.x.floor() as i64, p.y.floor() as i64, c, 1.0);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/cpu.rs"]
mod tests;
