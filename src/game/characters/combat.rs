// Directional melee attack, attachable to a motion controller

use glam::Vec2;

/// How attacks and dashes block each other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExclusionPolicy {
    /// A dash blocks new attacks, but a dash may start mid-attack
    #[default]
    AttackYieldsToDash,
    /// Neither may start while the other is active
    Exclusive,
}

impl ExclusionPolicy {
    pub fn attack_allowed(self, dashing: bool) -> bool {
        !dashing
    }

    pub fn dash_allowed(self, attacking: bool) -> bool {
        match self {
            Self::AttackYieldsToDash => true,
            Self::Exclusive => !attacking,
        }
    }
}

/// Tuning of the melee capability
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CombatConfig {
    pub exclusion: ExclusionPolicy,
}

impl CombatConfig {
    pub fn exclusive() -> Self {
        Self {
            exclusion: ExclusionPolicy::Exclusive,
        }
    }
}

/// Melee capability of a character
#[derive(Debug, Clone, Default)]
pub struct MeleeCombat {
    config: CombatConfig,
}

impl MeleeCombat {
    pub fn new(config: CombatConfig) -> Self {
        Self { config }
    }

    pub fn policy(&self) -> ExclusionPolicy {
        self.config.exclusion
    }

    /// Whether an attack press should start an attack right now
    pub fn can_attack(&self, attacking: bool, dashing: bool) -> bool {
        !attacking && self.config.exclusion.attack_allowed(dashing)
    }

    /// Direction of an attack started now
    ///
    /// The stored facing is used unless the character stands still
    /// horizontally while holding up or down, which aims straight along y.
    pub fn aim(move_direction: Vec2, raw: Vec2, velocity_x: f32) -> Vec2 {
        if velocity_x == 0.0 && raw.y != 0.0 {
            return Vec2::new(0.0, raw.y);
        }

        let y = if raw.y != 0.0 { raw.y } else { move_direction.y };
        Vec2::new(move_direction.x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_is_asymmetric() {
        let policy = ExclusionPolicy::default();
        assert!(!policy.attack_allowed(true));
        assert!(policy.dash_allowed(true));
    }

    #[test]
    fn test_exclusive_policy() {
        let policy = ExclusionPolicy::Exclusive;
        assert!(!policy.attack_allowed(true));
        assert!(!policy.dash_allowed(true));
        assert!(policy.attack_allowed(false));
        assert!(policy.dash_allowed(false));
    }

    #[test]
    fn test_can_attack() {
        let combat = MeleeCombat::default();
        assert!(combat.can_attack(false, false));
        assert!(!combat.can_attack(true, false));
        assert!(!combat.can_attack(false, true));
    }

    #[test]
    fn test_aim_uses_facing() {
        let aim = MeleeCombat::aim(Vec2::new(-1.0, 0.0), Vec2::ZERO, -10.0);
        assert_eq!(aim, Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn test_aim_diagonal_while_moving() {
        let aim = MeleeCombat::aim(Vec2::new(1.0, 0.0), Vec2::new(1.0, 1.0), 10.0);
        assert_eq!(aim, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_aim_straight_up_when_standing() {
        let aim = MeleeCombat::aim(Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0), 0.0);
        assert_eq!(aim, Vec2::new(0.0, 1.0));
    }

    #[test]
    fn test_aim_straight_down_when_standing() {
        let aim = MeleeCombat::aim(Vec2::new(-1.0, 0.0), Vec2::new(0.0, -1.0), 0.0);
        assert_eq!(aim, Vec2::new(0.0, -1.0));
    }

    #[test]
    fn test_aim_keeps_stored_up_direction() {
        let aim = MeleeCombat::aim(Vec2::new(0.0, 1.0), Vec2::ZERO, 0.0);
        assert_eq!(aim, Vec2::new(0.0, 1.0));
    }
}
