//! The [`Environment`] keeps physics truth and its visual representation in
//! step with each other.
//!
//! It owns the physics world, the camera and an ordered list of
//! [`PhysicsObject`]s, each pairing one [`RenderShape`] with one rigid body.
//! Every frame the world is advanced with [`Environment::step`] and the shapes
//! are re-synchronized from the post-step body poses and drawn with
//! [`Environment::render`]. All conversions between screen pixels and world
//! meters go through the environment's [`Camera2D`].

use crate::camera::{Camera2D, CameraTarget};
use crate::config::{DEFAULT_PIXELS_PER_METER, EnvironmentConfig};
use crate::physics::{BodyPose, BoxBodyDesc, PhysicsSimulator};
use crate::rendering::RenderTarget;
use crate::shape::RenderShape;
use log::{debug, info, trace, warn};
use nalgebra::{Point2, Vector2};
use rapier2d::prelude::RigidBodyHandle;
use snafu::{Snafu, ensure};
use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u64);

impl Display for ObjectId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Snafu)]
#[snafu(context(suffix(Err)))]
pub enum EnvironmentError {
    #[snafu(display("Box extents must be positive and finite, got {width} x {height}"))]
    InvalidExtent { width: f32, height: f32 },

    #[snafu(display("Box position must be finite, got ({x}, {y})"))]
    InvalidPosition { x: f32, y: f32 },
}

/// One render shape bound to one rigid body for its whole lifetime.
#[derive(Debug)]
pub struct PhysicsObject {
    id: ObjectId,
    shape: RenderShape,
    body: RigidBodyHandle,
    dynamic: bool,
}

impl PhysicsObject {
    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn shape(&self) -> &RenderShape {
        &self.shape
    }

    pub fn body(&self) -> RigidBodyHandle {
        self.body
    }

    pub fn is_dynamic(&self) -> bool {
        self.dynamic
    }
}

pub struct Environment {
    physics: PhysicsSimulator,
    camera: Camera2D,
    camera_target: CameraTarget,
    objects: Vec<PhysicsObject>,
    config: EnvironmentConfig,
    next_object_id: ObjectId,
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new(EnvironmentConfig::default())
    }
}

impl Environment {
    pub fn new(config: EnvironmentConfig) -> Self {
        let physics = PhysicsSimulator::new(config.gravity, config.iterations);

        let mut pixels_per_meter = config.pixels_per_meter;
        if !Camera2D::is_valid_scale(pixels_per_meter) {
            warn!(
                "Invalid scale of {pixels_per_meter} pixels per meter, using {DEFAULT_PIXELS_PER_METER}"
            );
            pixels_per_meter = DEFAULT_PIXELS_PER_METER;
        }

        let mut camera = Camera2D::new(pixels_per_meter, config.zoom);
        camera.reframe(config.viewport.x, config.viewport.y);
        if let CameraTarget::Fixed(center) = config.camera_target {
            camera.center_on(center);
        }

        Environment {
            physics,
            camera,
            camera_target: config.camera_target,
            objects: Vec::new(),
            config,
            next_object_id: ObjectId(0),
        }
    }

    /// Populates the environment with a static ground and two falling boxes,
    /// and makes the camera follow the ground.
    pub fn spawn_default_scene(&mut self) -> Result<ObjectId, EnvironmentError> {
        let ground = self.create_box(5.0, 1.0, 0.0, 0.0, false)?;
        self.create_box(2.0, 1.0, -0.2, 8.0, true)?;
        self.create_box(1.0, 1.0, 1.0, 5.0, true)?;

        self.track(CameraTarget::Object(ground));
        info!("Spawned default scene with {} objects", self.objects.len());

        Ok(ground)
    }

    /// Advances the physics world by `delta_time` seconds.
    ///
    /// Callers are expected to clamp the frame time, a very large step makes
    /// the solver unstable.
    pub fn step(&mut self, delta_time: f32) {
        if !delta_time.is_finite() || delta_time <= 0.0 {
            trace!("Skipping physics step with delta time {delta_time}");
            return;
        }

        self.physics.step(delta_time);
    }

    /// Frames the camera for a `width` x `height` surface, copies every body
    /// pose onto its shape and draws the shapes in list order.
    pub fn render(&mut self, target: &mut impl RenderTarget, width: u32, height: u32) {
        self.camera.reframe(width, height);
        if let Some(center) = self.tracked_point() {
            self.camera.center_on(center);
        }
        target.set_view(&self.camera);

        self.sync_shapes();

        for object in &self.objects {
            target.draw(&object.shape);
        }
    }

    /// Copies the current body poses into the render shapes.
    ///
    /// Screen Y points down, so the world angle is negated and the shape is
    /// scaled by `-scale` on its Y axis.
    pub fn sync_shapes(&mut self) {
        let camera = self.camera;
        let scale = camera.scale();

        for object in &mut self.objects {
            let Some(pose) = self.physics.pose(object.body) else {
                warn!("Object {} lost its rigid body", object.id);
                continue;
            };

            let position = camera.world_to_screen_position(Point2::from(pose.translation));
            object.shape.set_position(position);
            object.shape.set_rotation(-pose.angle.to_degrees());
            object.shape.set_scale(Vector2::new(scale, -scale));
        }
    }

    fn tracked_point(&self) -> Option<Point2<f32>> {
        match self.camera_target {
            CameraTarget::Fixed(point) => Some(point),
            CameraTarget::Object(id) => self
                .body_pose(id)
                .map(|pose| Point2::from(pose.translation)),
        }
    }

    /// Creates a `width` x `height` box centered at `(x, y)` in meters.
    ///
    /// Dynamic boxes react to gravity and collisions, static ones never move.
    pub fn create_box(
        &mut self,
        width: f32,
        height: f32,
        x: f32,
        y: f32,
        dynamic: bool,
    ) -> Result<ObjectId, EnvironmentError> {
        ensure!(
            width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0,
            InvalidExtentErr { width, height }
        );
        ensure!(x.is_finite() && y.is_finite(), InvalidPositionErr { x, y });

        let id = self.next_object_id;
        self.next_object_id.0 += 1;

        let style = if dynamic {
            self.config.dynamic_style
        } else {
            self.config.static_style
        };
        let shape = RenderShape::rectangle(width, height, style);

        let body = self.physics.insert_box(&BoxBodyDesc {
            half_extents: Vector2::new(width / 2.0, height / 2.0),
            position: Vector2::new(x, y),
            angle: 0.0,
            dynamic,
            material: self.config.material,
            user_data: id.0 as u128,
        });

        self.objects.push(PhysicsObject {
            id,
            shape,
            body,
            dynamic,
        });

        debug!("Created box {id} ({width} x {height}) at ({x}, {y})");

        Ok(id)
    }

    /// Removes an object from the list, then destroys its body.
    pub fn remove_object(&mut self, id: ObjectId) -> Option<PhysicsObject> {
        let index = self.objects.iter().position(|o| o.id == id)?;
        let object = self.objects.remove(index);

        if !self.physics.remove_body(object.body) {
            warn!("Body of object {id} was already gone from the physics world");
        }

        debug!("Removed object {id}");
        Some(object)
    }

    /// Removes every object, list first and bodies second.
    pub fn clear(&mut self) {
        let objects = std::mem::take(&mut self.objects);
        for object in &objects {
            self.physics.remove_body(object.body);
        }
        debug!("Cleared {} objects", objects.len());
    }

    /// The topmost object covering a screen position.
    pub fn object_at_screen(&mut self, p: Point2<f32>) -> Option<ObjectId> {
        let world = self.screen_to_world_position(p);
        self.object_at_world(world)
    }

    /// The topmost object covering a world position. Later objects are drawn
    /// on top, so the hit with the highest list index wins.
    pub fn object_at_world(&mut self, p: Point2<f32>) -> Option<ObjectId> {
        let hits = self.physics.user_data_at_point(p);

        self.objects
            .iter()
            .rev()
            .find(|o| hits.contains(&(o.id.0 as u128)))
            .map(|o| o.id)
    }

    pub fn object(&self, id: ObjectId) -> Option<&PhysicsObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub fn objects(&self) -> &[PhysicsObject] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn body_pose(&self, id: ObjectId) -> Option<BodyPose> {
        let object = self.object(id)?;
        self.physics.pose(object.body)
    }

    pub fn track(&mut self, target: CameraTarget) {
        self.camera_target = target;
    }

    pub fn camera_target(&self) -> CameraTarget {
        self.camera_target
    }

    pub fn camera(&self) -> &Camera2D {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera2D {
        &mut self.camera
    }

    pub fn physics(&self) -> &PhysicsSimulator {
        &self.physics
    }

    pub fn config(&self) -> &EnvironmentConfig {
        &self.config
    }

    pub fn screen_to_world_position(&self, p: Point2<f32>) -> Point2<f32> {
        self.camera.screen_to_world_position(p)
    }

    pub fn world_to_screen_position(&self, p: Point2<f32>) -> Point2<f32> {
        self.camera.world_to_screen_position(p)
    }

    pub fn screen_to_world_size(&self, size: Vector2<f32>) -> Vector2<f32> {
        self.camera.screen_to_world_size(size)
    }

    pub fn world_to_screen_size(&self, size: Vector2<f32>) -> Vector2<f32> {
        self.camera.world_to_screen_size(size)
    }
}
