use log::{info, trace, warn};

use crate::camera::Camera;
use crate::config::{ProjectionSettings, SceneConfig};
use crate::core::{CameraInputAdapter, ControlFlow, Controller};
use crate::light::{Light, LightUniform};
use crate::math::{degrees_to_radians, Mat4, Quat, Vec3};
use crate::transform::Transform;
use crate::types::FrameUniforms;

/// What a scene object is. Models get drawn; lights feed the light uniforms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntityKind {
    Model,
    Light(Light),
}

/// A placed object. Plain data; the renderer decides what to draw for it.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub name: String,
    pub transform: Transform,
    /// Euler degrees per second (`x` pitch, `y` yaw, `z` roll)
    pub spin: Vec3,
    pub kind: EntityKind,
}

impl SceneObject {
    pub fn new(name: impl Into<String>, transform: Transform) -> Self {
        Self {
            name: name.into(),
            transform,
            spin: Vec3::ZERO,
            kind: EntityKind::Model,
        }
    }

    pub fn light(name: impl Into<String>, transform: Transform, light: Light) -> Self {
        Self {
            kind: EntityKind::Light(light),
            ..Self::new(name, transform)
        }
    }

    pub fn is_model(&self) -> bool {
        matches!(self.kind, EntityKind::Model)
    }
}

/// A camera the scene can view through.
#[derive(Debug, Clone)]
pub struct SceneCamera {
    pub name: String,
    pub camera: Camera,
}

/// Cameras, viewport and objects for one view. Owned by the frame loop.
///
/// There is always at least one camera, and exactly one is active: input is
/// applied to it and the view matrix is taken from it.
#[derive(Debug, Clone)]
pub struct Scene {
    cameras: Vec<SceneCamera>,
    active_camera: usize,
    pub projection: ProjectionSettings,
    pub objects: Vec<SceneObject>,
}

impl Scene {
    pub fn new(camera: Camera, projection: ProjectionSettings) -> Self {
        Self {
            cameras: vec![SceneCamera {
                name: String::from("Main Camera"),
                camera,
            }],
            active_camera: 0,
            projection,
            objects: Vec::new(),
        }
    }

    pub fn from_config(config: &SceneConfig) -> Self {
        let mut scene = Self::new(config.camera.build(), config.projection);
        scene.cameras = config
            .all_cameras()
            .map(|settings| SceneCamera {
                name: settings.name.clone(),
                camera: settings.build(),
            })
            .collect();
        scene.set_active_camera(config.active_camera);
        scene.objects = config
            .objects
            .iter()
            .map(|object| SceneObject {
                name: object.name.clone(),
                transform: object.transform(),
                spin: object.spin,
                kind: object.light.map_or(EntityKind::Model, EntityKind::Light),
            })
            .collect();

        info!(
            "Scene ready: {} objects ({} lights), {} cameras, active {:?} at {}, {}x{} viewport",
            scene.objects.len(),
            scene.objects.iter().filter(|o| !o.is_model()).count(),
            scene.cameras.len(),
            scene.cameras[scene.active_camera].name,
            scene.camera().position,
            scene.projection.width,
            scene.projection.height
        );
        scene
    }

    pub fn add(&mut self, object: SceneObject) {
        self.objects.push(object);
    }

    /// Register another camera and return its index. The active camera is
    /// unchanged.
    pub fn add_camera(&mut self, name: impl Into<String>, camera: Camera) -> usize {
        self.cameras.push(SceneCamera {
            name: name.into(),
            camera,
        });
        self.cameras.len() - 1
    }

    /// Switch the active camera. Out-of-range indices are ignored and return
    /// `false`.
    pub fn set_active_camera(&mut self, index: usize) -> bool {
        if index >= self.cameras.len() {
            warn!("No camera at index {} ({} cameras)", index, self.cameras.len());
            return false;
        }
        self.active_camera = index;
        true
    }

    pub fn active_camera(&self) -> usize {
        self.active_camera
    }

    pub fn cameras(&self) -> &[SceneCamera] {
        &self.cameras
    }

    pub fn camera(&self) -> &Camera {
        &self.cameras[self.active_camera].camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.cameras[self.active_camera].camera
    }

    /// Framebuffer resize. Zero-sized viewports (minimized windows) are ignored
    /// so the aspect ratio never divides by zero.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.projection.width = width;
        self.projection.height = height;
    }

    /// Apply input, then advance object animation by `delta_time` seconds.
    pub fn step(
        &mut self,
        adapter: &mut CameraInputAdapter,
        controller: &impl Controller,
        delta_time: f32,
    ) -> ControlFlow {
        let flow = adapter.apply(self.camera_mut(), controller, delta_time);
        self.update(delta_time);
        let camera = self.camera();
        trace!(
            "camera pos={} yaw={:.2} pitch={:.2} zoom={:.2}",
            camera.position,
            camera.yaw(),
            camera.pitch(),
            camera.zoom()
        );
        flow
    }

    /// Spin animated objects.
    pub fn update(&mut self, delta_time: f32) {
        for object in self.objects.iter_mut().filter(|o| o.spin != Vec3::ZERO) {
            let step = object.spin * delta_time;
            let delta = Quat::from_euler_yxz(Vec3::new(
                degrees_to_radians(step.x),
                degrees_to_radians(step.y),
                degrees_to_radians(step.z),
            ));
            object.transform.rotate(delta);
        }
    }

    /// View matrix of the active camera
    pub fn view_matrix(&self) -> Mat4 {
        self.camera().view_matrix()
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.camera()
            .projection_matrix(self.projection.aspect(), self.projection.near, self.projection.far)
    }

    /// Uniform blocks for every model, sharing this frame's view and
    /// projection. Lights are not drawn.
    pub fn frame_uniforms(&self) -> Vec<FrameUniforms> {
        let view = self.view_matrix();
        let projection = self.projection_matrix();
        let view_pos = self.camera().position;
        self.objects
            .iter()
            .filter(|object| object.is_model())
            .map(|object| FrameUniforms::new(&object.transform.model_matrix(), &view, &projection, view_pos))
            .collect()
    }

    /// One block per light object, in scene order. Disabled lights are
    /// included with `enabled = 0` so indices stay stable.
    pub fn light_uniforms(&self) -> Vec<LightUniform> {
        self.objects
            .iter()
            .filter_map(|object| match &object.kind {
                EntityKind::Light(light) => Some(light.uniform(&object.transform)),
                EntityKind::Model => None,
            })
            .collect()
    }
}
