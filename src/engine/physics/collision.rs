use rapier2d::prelude::*;

/// Collision groups for filtering what objects can collide with each other
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionGroups {
    /// Default group - interacts with everything
    Default = 0b0000_0001,

    /// Player characters
    Player = 0b0000_0010,

    /// Static floors, platforms and walls
    Platform = 0b0000_1000,
}

impl CollisionGroups {
    /// Raw membership bit of this group
    pub fn bits(self) -> u32 {
        self as u32
    }

    /// Convert to rapier2d's InteractionGroups
    pub fn to_interaction_groups(self) -> InteractionGroups {
        let memberships = Group::from_bits_truncate(self.bits());

        let filter = match self {
            // Players stand on platforms but pass through each other
            CollisionGroups::Player => Group::from_bits_truncate(
                CollisionGroups::Platform.bits() | CollisionGroups::Default.bits(),
            ),
            CollisionGroups::Platform => Group::from_bits_truncate(
                CollisionGroups::Player.bits() | CollisionGroups::Default.bits(),
            ),
            CollisionGroups::Default => Group::ALL,
        };

        InteractionGroups::new(memberships, filter)
    }
}

/// Set of collision groups a query is allowed to hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerMask(u32);

impl LayerMask {
    pub const NONE: LayerMask = LayerMask(0);

    /// Mask that only hits floors and platforms
    pub const FLOOR: LayerMask = LayerMask(CollisionGroups::Platform as u32);

    pub fn from_groups(groups: &[CollisionGroups]) -> Self {
        Self(groups.iter().fold(0, |bits, group| bits | group.bits()))
    }

    pub fn bits(self) -> u32 {
        self.0
    }

    pub fn contains(self, group: CollisionGroups) -> bool {
        self.0 & group.bits() != 0
    }

    /// Interaction groups for a query issued on behalf of `querier`
    /// that should only report colliders in this mask
    pub fn query_groups(self, querier: CollisionGroups) -> InteractionGroups {
        InteractionGroups::new(
            Group::from_bits_truncate(querier.bits()),
            Group::from_bits_truncate(self.0),
        )
    }
}

impl Default for LayerMask {
    fn default() -> Self {
        Self::FLOOR
    }
}
