use std::sync::Arc;

use serde::{Deserialize, Serialize};

use harigane::{
    geometry::Mesh,
    math::{transforms::rotation_z, Point3},
    renderer::{render, RenderSettings},
};

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
struct Settings {
    scene: SceneSettings,
    render: RenderSettings,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
struct SceneSettings {
    /// Cells per side in the demo grid
    grid: u32,
    /// Peak deformation over the shutter interval, in world units
    deform: f32,
    /// Grid rotation around the z-axis in degrees
    rotation_z: f32,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            grid: 8,
            deform: 0.0,
            rotation_z: 15.0,
        }
    }
}

fn setup_logger() -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}:{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.level(),
                record.target(),
                record.line().unwrap_or(0),
                message
            ))
        })
        .level(log::LevelFilter::Info)
        .chain(std::io::stdout())
        .chain(std::fs::File::create("harigane.log")?)
        .apply()?;
    Ok(())
}

fn load_settings() -> Settings {
    let path = match std::env::args().nth(1) {
        Some(path) => path,
        None => return Settings::default(),
    };

    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(why) => {
            panic!("Failed to read settings from '{}': {}", path, why);
        }
    };
    match serde_yaml::from_str(&content) {
        Ok(settings) => settings,
        Err(why) => {
            panic!("Failed to parse settings from '{}': {}", path, why);
        }
    }
}

/// Builds a grid mesh on the xy unit square, optionally deforming upward
/// over the shutter interval.
fn demo_grid(settings: &SceneSettings) -> Mesh {
    let n = settings.grid.max(1) as usize;

    let mut points = Vec::with_capacity((n + 1) * (n + 1));
    for yi in 0..=n {
        for xi in 0..=n {
            let x = (xi as f32 / n as f32) * 2.0 - 1.0;
            let y = (yi as f32 / n as f32) * 2.0 - 1.0;
            points.push(Point3::new(x, y, 0.0));
        }
    }

    let mut indices = Vec::with_capacity(n * n * 6);
    for yi in 0..n {
        for xi in 0..n {
            let i0 = yi * (n + 1) + xi;
            let i1 = i0 + 1;
            let i2 = i0 + (n + 1);
            let i3 = i2 + 1;
            indices.extend_from_slice(&[i0, i1, i3]);
            indices.extend_from_slice(&[i0, i3, i2]);
        }
    }

    let object_to_world = rotation_z(settings.rotation_z.to_radians());
    let mesh = Mesh::new(&object_to_world, indices, points.clone());

    if settings.deform == 0.0 {
        return mesh;
    }
    let end = points
        .iter()
        .map(|p| {
            let z = settings.deform
                * (std::f32::consts::PI * p.x).sin()
                * (std::f32::consts::PI * p.y).sin();
            Point3::new(p.x, p.y, z)
        })
        .collect();
    mesh.with_motion(points, end)
}

fn main() {
    if let Err(why) = setup_logger() {
        panic!("{}", why);
    };

    let settings = load_settings();
    log::info!("Using {} threads", num_cpus::get());

    let mesh = Arc::new(demo_grid(&settings.scene));
    log::info!(
        "Demo grid has {} triangles{}",
        mesh.triangle_count(),
        if mesh.has_motion() { ", deforming" } else { "" }
    );

    let mask = render(&mesh, &settings.render);

    let [width, height] = settings.render.resolution;
    let img = image::GrayImage::from_fn(width, height, |x, y| {
        let fac = mask[(y * width + x) as usize].clamp(0.0, 1.0);
        image::Luma([(fac * 255.0 + 0.5) as u8])
    });
    if let Err(why) = img.save(&settings.render.output) {
        panic!(
            "Failed to write '{}': {}",
            settings.render.output.display(),
            why
        );
    }
    log::info!("Wrote '{}'", settings.render.output.display());
}
