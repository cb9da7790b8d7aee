use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use log::info;
use serde::{Deserialize, Serialize};

use crate::camera::{self, Camera};
use crate::light::Light;
use crate::math::Vec3;
use crate::transform::Transform;

/// Everything needed to set up a headless frame loop: cameras, projection and
/// the objects to place.
///
/// Missing sections fall back to their defaults, except `objects`: a config
/// that lists no objects gets an empty scene, not the demo cubes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// The main camera, index 0
    pub camera: CameraSettings,
    /// Additional cameras, indices 1..
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cameras: Vec<CameraSettings>,
    pub active_camera: usize,
    pub projection: ProjectionSettings,
    #[serde(default)]
    pub objects: Vec<ObjectConfig>,
}

/// Initial camera state. Angles are in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub name: String,
    pub position: Vec3,
    pub world_up: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub movement_speed: f32,
    pub mouse_sensitivity: f32,
    pub zoom: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionSettings {
    pub width: u32,
    pub height: u32,
    pub near: f32,
    pub far: f32,
}

/// One placed object. `rotation` is Euler degrees (`x` pitch, `y` yaw,
/// `z` roll); `spin` is a per-second rotation in the same convention.
/// Objects with a `light` block are light sources, the rest are models.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectConfig {
    pub name: String,
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
    pub spin: Vec3,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub light: Option<Light>,
}

impl SceneConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).with_context(|| format!("Failed to read scene config: {:?}", path))?;
        let config = Self::from_json(&text).with_context(|| format!("Invalid scene config: {:?}", path))?;
        info!("Loaded scene config {:?} ({} objects)", path, config.objects.len());
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: SceneConfig = serde_json::from_str(text).context("Failed to parse scene config JSON")?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize scene config")
    }

    /// Reject settings the projection math can't handle. The math itself does
    /// no checking, so bad values have to be caught here.
    pub fn validate(&self) -> Result<()> {
        let p = &self.projection;
        if p.width == 0 || p.height == 0 {
            bail!("viewport must be non-empty, got {}x{}", p.width, p.height);
        }
        if !(p.near > 0.0) {
            bail!("near plane must be > 0, got {}", p.near);
        }
        if !(p.far > p.near) {
            bail!("far plane ({}) must be beyond near plane ({})", p.far, p.near);
        }
        for settings in self.all_cameras() {
            if settings.world_up.magnitude_squared() == 0.0 {
                bail!("camera {:?}: world_up must be non-zero", settings.name);
            }
        }
        let camera_count = 1 + self.cameras.len();
        if self.active_camera >= camera_count {
            bail!("active_camera {} out of range, {} cameras defined", self.active_camera, camera_count);
        }
        Ok(())
    }

    /// Main camera followed by the extra cameras, in index order.
    pub fn all_cameras(&self) -> impl Iterator<Item = &CameraSettings> {
        std::iter::once(&self.camera).chain(self.cameras.iter())
    }
}

impl Default for SceneConfig {
    /// Ten cubes in front of a camera at (0, 0, 5), each rotated by
    /// `(a, 0.3a, 0.5a)` degrees with `a = 20 * index`.
    fn default() -> Self {
        let positions = [
            Vec3::new(0.0, 0.0, -3.0),
            Vec3::new(2.0, 5.0, -15.0),
            Vec3::new(-1.5, -2.2, -2.5),
            Vec3::new(-3.8, -2.0, -12.3),
            Vec3::new(2.4, -0.4, -3.5),
            Vec3::new(-1.7, 3.0, -7.5),
            Vec3::new(1.3, -2.0, -2.5),
            Vec3::new(1.5, 2.0, -2.5),
            Vec3::new(1.5, 0.2, -1.5),
            Vec3::new(-1.3, 1.0, -1.5),
        ];

        let objects = positions
            .iter()
            .enumerate()
            .map(|(i, &position)| {
                let angle = 20.0 * i as f32;
                ObjectConfig {
                    name: format!("cube_{}", i),
                    position,
                    rotation: Vec3::new(angle, angle * 0.3, angle * 0.5),
                    ..ObjectConfig::default()
                }
            })
            .collect();

        Self {
            camera: CameraSettings::default(),
            cameras: Vec::new(),
            active_camera: 0,
            projection: ProjectionSettings::default(),
            objects,
        }
    }
}

impl CameraSettings {
    pub fn build(&self) -> Camera {
        let mut camera = Camera::new(self.position, self.world_up, self.yaw, self.pitch);
        camera.movement_speed = self.movement_speed;
        camera.mouse_sensitivity = self.mouse_sensitivity;
        camera.set_zoom(self.zoom);
        camera
    }
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            name: String::from("Main Camera"),
            position: Vec3::new(0.0, 0.0, 5.0),
            world_up: Vec3::Y,
            yaw: camera::YAW,
            pitch: camera::PITCH,
            movement_speed: camera::SPEED,
            mouse_sensitivity: camera::SENSITIVITY,
            zoom: camera::ZOOM,
        }
    }
}

impl ProjectionSettings {
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

impl Default for ProjectionSettings {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl ObjectConfig {
    pub fn transform(&self) -> Transform {
        Transform::from_euler_degrees(self.position, self.rotation, self.scale)
    }
}

impl Default for ObjectConfig {
    fn default() -> Self {
        Self {
            name: String::from("object"),
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            spin: Vec3::ZERO,
            light: None,
        }
    }
}
