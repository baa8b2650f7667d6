// Rigid body and collider presets for platformer levels

use super::collision::CollisionGroups;
use rapier2d::prelude::*;

pub use rapier2d::prelude::{ColliderHandle, RigidBodyHandle};

/// Common rigid body configurations for game objects
pub mod presets {
    use super::*;

    /// Dynamic, upright character body
    ///
    /// No damping and no sleeping: the motion controller writes velocity
    /// every tick and expects it to stick.
    pub fn player_body(x: Real, y: Real) -> RigidBody {
        RigidBodyBuilder::dynamic()
            .translation(vector![x, y])
            .lock_rotations()
            .gravity_scale(1.0)
            .linear_damping(0.0)
            .can_sleep(false)
            .build()
    }

    /// Capsule of `width` x `height` standing on its lower cap
    pub fn player_collider(width: Real, height: Real) -> Collider {
        let radius = width / 2.0;
        // Segment length excludes the two caps
        let half_segment = (height / 2.0 - radius).max(0.0);

        ColliderBuilder::capsule_y(half_segment, radius)
            .collision_groups(CollisionGroups::Player.to_interaction_groups())
            .friction(0.0) // walls must not catch a dashing character
            .restitution(0.0)
            .density(1.0)
            .build()
    }

    /// Fixed body for level geometry
    pub fn platform_body(x: Real, y: Real) -> RigidBody {
        RigidBodyBuilder::fixed().translation(vector![x, y]).build()
    }

    /// Box collider on the floor layer
    pub fn platform_collider(width: Real, height: Real) -> Collider {
        ColliderBuilder::cuboid(width / 2.0, height / 2.0)
            .collision_groups(CollisionGroups::Platform.to_interaction_groups())
            .friction(0.3)
            .restitution(0.0)
            .build()
    }
}
