use crate::config::{BoxMaterial, SolverIterations};
use log::trace;
use nalgebra::{Point2, Vector2};
use rapier2d::prelude::*;
use std::num::NonZeroUsize;

/// Position and orientation of a body after the last step.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BodyPose {
    pub translation: Vector2<f32>,
    /// Counter-clockwise, in radians.
    pub angle: f32,
}

/// Everything needed to insert one rectangular body.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoxBodyDesc {
    pub half_extents: Vector2<f32>,
    pub position: Vector2<f32>,
    pub angle: f32,
    pub dynamic: bool,
    pub material: BoxMaterial,
    pub user_data: u128,
}

pub struct PhysicsSimulator {
    pub gravity: Vector<Real>,
    pub rigid_body_set: RigidBodySet,
    pub collider_set: ColliderSet,
    pub integration_parameters: IntegrationParameters,
    pub physics_pipeline: PhysicsPipeline,
    pub island_manager: IslandManager,
    pub broad_phase: Box<dyn BroadPhase>,
    pub narrow_phase: NarrowPhase,
    pub impulse_joint_set: ImpulseJointSet,
    pub multibody_joint_set: MultibodyJointSet,
    pub ccd_solver: CCDSolver,
    pub query_pipeline: QueryPipeline,
    pub physics_hooks: (),
    pub event_handler: (),
}

const EARTH_GRAVITY: f32 = 9.8;

impl Default for PhysicsSimulator {
    fn default() -> Self {
        PhysicsSimulator::new(Vector2::new(0.0, -EARTH_GRAVITY), SolverIterations::default())
    }
}

impl PhysicsSimulator {
    pub fn new(gravity: Vector2<f32>, iterations: SolverIterations) -> Self {
        let mut simulator = PhysicsSimulator {
            gravity,
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
            integration_parameters: IntegrationParameters::default(),
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: Box::<DefaultBroadPhase>::default(),
            narrow_phase: NarrowPhase::new(),
            impulse_joint_set: ImpulseJointSet::new(),
            multibody_joint_set: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
            physics_hooks: (),
            event_handler: (),
        };
        simulator.set_iterations(iterations);
        simulator
    }

    pub fn set_iterations(&mut self, iterations: SolverIterations) {
        self.integration_parameters.num_solver_iterations =
            NonZeroUsize::new(iterations.velocity).unwrap_or(NonZeroUsize::MIN);
        self.integration_parameters
            .num_internal_stabilization_iterations = iterations.position;
    }

    /// Advances every body by `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        self.integration_parameters.dt = dt;

        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            self.broad_phase.as_mut(),
            &mut self.narrow_phase,
            &mut self.rigid_body_set,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            &mut self.ccd_solver,
            Some(&mut self.query_pipeline),
            &self.physics_hooks,
            &self.event_handler,
        );
    }

    pub fn insert_box(&mut self, desc: &BoxBodyDesc) -> RigidBodyHandle {
        let body_type = if desc.dynamic {
            RigidBodyType::Dynamic
        } else {
            RigidBodyType::Fixed
        };

        let rigid_body = RigidBodyBuilder::new(body_type)
            .translation(desc.position)
            .rotation(desc.angle)
            .user_data(desc.user_data)
            .build();
        let body_handle = self.rigid_body_set.insert(rigid_body);

        let mut collider = ColliderBuilder::cuboid(desc.half_extents.x, desc.half_extents.y)
            .friction(desc.material.friction)
            .user_data(desc.user_data);
        if desc.dynamic {
            collider = collider.density(desc.material.density);
        }

        self.collider_set.insert_with_parent(
            collider.build(),
            body_handle,
            &mut self.rigid_body_set,
        );

        trace!(
            "Inserted {} box body at ({}, {})",
            if desc.dynamic { "dynamic" } else { "static" },
            desc.position.x,
            desc.position.y
        );

        body_handle
    }

    /// Destroys a body along with its colliders. Returns `false` for a stale handle.
    pub fn remove_body(&mut self, handle: RigidBodyHandle) -> bool {
        self.rigid_body_set
            .remove(
                handle,
                &mut self.island_manager,
                &mut self.collider_set,
                &mut self.impulse_joint_set,
                &mut self.multibody_joint_set,
                true,
            )
            .is_some()
    }

    pub fn pose(&self, handle: RigidBodyHandle) -> Option<BodyPose> {
        let body = self.rigid_body_set.get(handle)?;
        Some(BodyPose {
            translation: *body.translation(),
            angle: body.rotation().angle(),
        })
    }

    pub fn body_count(&self) -> usize {
        self.rigid_body_set.len()
    }

    /// User data of every collider containing `point`.
    pub fn user_data_at_point(&mut self, point: Point2<f32>) -> Vec<u128> {
        self.query_pipeline.update(&self.collider_set);

        let mut hits = Vec::new();
        self.query_pipeline.intersections_with_point(
            &self.rigid_body_set,
            &self.collider_set,
            &point,
            QueryFilter::default(),
            |handle| {
                if let Some(collider) = self.collider_set.get(handle) {
                    hits.push(collider.user_data);
                }
                true
            },
        );
        hits
    }
}
