// Hit detection between attack reach and body boxes

use log::debug;

use crate::game::characters::Combatant;

/// A landed hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub damage: i32,
    /// Defender health after the hit
    pub remaining_health: i32,
}

/// Damage for one hit at the given frame scale
///
/// Rounded to the nearest point, but never below 1 while `base_damage` is
/// positive, so a landed hit always costs health.
pub fn scaled_damage(base_damage: f32, frame_scale: f32) -> i32 {
    let damage = (base_damage * frame_scale).round() as i32;
    if base_damage > 0.0 {
        damage.max(1)
    } else {
        damage
    }
}

/// Land `attacker`'s open attack on `defender` if the reach strictly overlaps
/// the defender's body
///
/// A landed hit closes the attack window, so each window hits at most once.
pub fn resolve(
    attacker: &mut Combatant,
    defender: &mut Combatant,
    base_damage: f32,
    frame_scale: f32,
) -> Option<Hit> {
    if !attacker.is_attacking() || !attacker.attack_box().hits(&defender.body_box()) {
        return None;
    }

    attacker.land_hit();
    let damage = scaled_damage(base_damage, frame_scale);
    let remaining_health = defender.take_damage(damage);
    debug!(
        "{} hits {} for {} ({} left)",
        attacker.name(),
        defender.name(),
        damage,
        remaining_health
    );

    Some(Hit {
        damage,
        remaining_health,
    })
}

/// Resolve both directions for one frame: `first` attacks, then `second`
pub fn resolve_exchange(
    first: &mut Combatant,
    second: &mut Combatant,
    base_damage: f32,
    frame_scale: f32,
) -> [Option<Hit>; 2] {
    let forward = resolve(first, second, base_damage, frame_scale);
    let backward = resolve(second, first, base_damage, frame_scale);
    [forward, backward]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::characters::character::tests::unloaded;
    use crate::game::characters::Archetype;
    use glam::Vec2;

    /// Player at x=100 with an enemy body `gap` pixels right of its reach
    fn facing_off(gap: f32) -> (Combatant, Combatant) {
        let mut player = unloaded(&Archetype::player());
        let mut enemy = unloaded(&Archetype::enemy());
        player.set_position(Vec2::new(100.0, 330.0));
        // Player reach spans x 100..200
        enemy.set_position(Vec2::new(200.0 + gap, 330.0));
        (player, enemy)
    }

    #[test]
    fn test_scaled_damage_rounds() {
        assert_eq!(scaled_damage(10.0, 1.0), 10);
        assert_eq!(scaled_damage(10.0, 2.0), 20);
        assert_eq!(scaled_damage(10.0, 1.26), 13);
    }

    #[test]
    fn test_tiny_frame_scale_still_costs_a_point() {
        assert_eq!(scaled_damage(10.0, 0.01), 1);
        assert_eq!(scaled_damage(0.0, 1.0), 0);

        let (mut player, mut enemy) = facing_off(-10.0);
        player.attack();
        let hit = resolve(&mut player, &mut enemy, 10.0, 0.01);
        assert_eq!(hit.map(|h| h.damage), Some(1));
        assert_eq!(enemy.health(), 99);
        assert!(!player.is_attacking());
    }

    #[test]
    fn test_hit_applies_damage_and_closes_window() {
        let (mut player, mut enemy) = facing_off(-10.0);
        player.attack();

        let hit = resolve(&mut player, &mut enemy, 10.0, 1.0);
        assert_eq!(
            hit,
            Some(Hit {
                damage: 10,
                remaining_health: 90
            })
        );
        assert!(!player.is_attacking());
    }

    #[test]
    fn test_one_hit_per_window() {
        let (mut player, mut enemy) = facing_off(-10.0);
        player.attack();
        resolve(&mut player, &mut enemy, 10.0, 1.0);

        assert_eq!(resolve(&mut player, &mut enemy, 10.0, 1.0), None);
        assert_eq!(enemy.health(), 90);
    }

    #[test]
    fn test_no_hit_without_attack() {
        let (mut player, mut enemy) = facing_off(-10.0);
        assert_eq!(resolve(&mut player, &mut enemy, 10.0, 1.0), None);
        assert_eq!(enemy.health(), 100);
    }

    #[test]
    fn test_touching_edges_do_not_hit() {
        let (mut player, mut enemy) = facing_off(0.0);
        player.attack();
        assert_eq!(resolve(&mut player, &mut enemy, 10.0, 1.0), None);
        assert!(player.is_attacking());
    }

    #[test]
    fn test_frame_scale_damage_clamps() {
        let (mut player, mut enemy) = facing_off(-10.0);
        enemy.set_health(15);
        player.attack();

        let hit = resolve(&mut player, &mut enemy, 10.0, 2.0);
        assert_eq!(hit.map(|h| h.damage), Some(20));
        assert_eq!(enemy.health(), 0);
    }

    #[test]
    fn test_exchange_resolves_both_directions() {
        // Enemy reach spans x - 50 .. x + 50, so both reaches cover the other body
        let (mut player, mut enemy) = facing_off(-60.0);
        player.attack();
        enemy.attack();

        let [forward, backward] = resolve_exchange(&mut player, &mut enemy, 10.0, 1.0);
        assert!(forward.is_some());
        assert!(backward.is_some());
        assert_eq!(player.health(), 90);
        assert_eq!(enemy.health(), 90);
    }
}
