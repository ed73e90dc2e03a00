//! Tests for attack lifecycle systems.

#[cfg(test)]
mod tests {
    use bevy::prelude::*;
    use bevy_rapier2d::prelude::*;

    use super::super::test_support::*;
    use crate::combat::events::{EndAttack, EngageAttack, HitLanded, ReleaseAttack, UseWeaponIntent};
    use crate::combat::ledger::{HitKey, HitLedger};
    use crate::combat::systems::attack_lifecycle::AttackExpiry;
    use crate::components::{Attack, AttackUid, EquipmentKey, Power, WeaponVariant};
    use crate::physics::{is_body_active, SuppressedContacts};

    fn attack_of(app: &App, entity: Entity) -> Attack {
        app.world().get::<Attack>(entity).cloned().expect("attack component")
    }

    fn attacks_in_world(app: &mut App) -> Vec<(Entity, Attack)> {
        let world = app.world_mut();
        let mut query = world.query::<(Entity, &Attack)>();
        query.iter(world).map(|(e, a)| (e, a.clone())).collect()
    }

    #[test]
    fn test_use_weapon_spawns_launched_dart() {
        let mut app = combat_test_app();
        let player = spawn_test_player(&mut app, 1);

        app.world_mut()
            .send_event(UseWeaponIntent::new(player, WeaponVariant::Dart, Vec2::new(0.0, 10.0)));
        tick(&mut app);

        let attacks = attacks_in_world(&mut app);
        assert_eq!(attacks.len(), 1);
        let (entity, attack) = &attacks[0];
        assert_eq!(attack.wielder, player);
        assert_eq!(attack.variant, WeaponVariant::Dart);
        assert_eq!(attack.equipment, EquipmentKey::new("dart"));

        // launch_speed 600 по направлению броска, без вращения
        let velocity = app.world().get::<Velocity>(*entity).copied().expect("dart velocity");
        assert_eq!(velocity.linvel, Vec2::new(0.0, 600.0));
        assert_eq!(velocity.angvel, 0.0);

        // lifetime 2.0 от старта (Time не двигался)
        let expiry = app.world().get::<AttackExpiry>(*entity).map(|e| e.expires_at);
        assert_eq!(expiry, Some(2.0));
    }

    #[test]
    fn test_thrown_fan_keeps_spinning() {
        let mut app = combat_test_app();
        let player = spawn_test_player(&mut app, 1);

        app.world_mut()
            .send_event(UseWeaponIntent::new(player, WeaponVariant::SpinningFan, Vec2::X));
        tick(&mut app);

        let attacks = attacks_in_world(&mut app);
        let velocity = app.world().get::<Velocity>(attacks[0].0).copied().expect("fan velocity");
        assert_eq!(velocity.linvel, Vec2::new(600.0, 0.0));
        assert_eq!(velocity.angvel, 1.0);
    }

    #[test]
    fn test_thrown_attack_ends_after_lifetime() {
        let mut app = combat_test_app();
        let player = spawn_test_player(&mut app, 1);
        let enemy = spawn_test_enemy(&mut app, 10, Vec2::ZERO);

        app.world_mut()
            .send_event(UseWeaponIntent::new(player, WeaponVariant::Dart, Vec2::X));
        tick(&mut app);
        let dart = attacks_in_world(&mut app)[0].0;

        contact(&mut app, dart, enemy);
        tick(&mut app);
        assert_eq!(app.world().get::<HitLedger>(enemy).map(HitLedger::len), Some(1));

        // Ещё не истекла
        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(std::time::Duration::from_secs_f32(1.0));
        tick(&mut app);
        assert!(app.world().get_entity(dart).is_ok());

        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(std::time::Duration::from_secs_f32(1.5));
        tick(&mut app);

        assert!(app.world().get_entity(dart).is_err());
        assert!(app.world().get::<HitLedger>(enemy).is_some_and(HitLedger::is_empty));
        assert_eq!(sent::<EndAttack>(&app).len(), 1);
    }

    #[test]
    fn test_use_weapon_allocates_distinct_uids() {
        let mut app = combat_test_app();
        let player = spawn_test_player(&mut app, 1);

        for _ in 0..3 {
            app.world_mut()
                .send_event(UseWeaponIntent::new(player, WeaponVariant::Cleave, Vec2::X));
        }
        tick(&mut app);

        let mut uids: Vec<AttackUid> = attacks_in_world(&mut app).into_iter().map(|(_, a)| a.uid).collect();
        uids.sort_by_key(|uid| uid.0);
        uids.dedup();
        assert_eq!(uids.len(), 3);
    }

    #[test]
    fn test_use_weapon_without_wielder_is_ignored() {
        let mut app = combat_test_app();
        let ghost = app.world_mut().spawn_empty().id();
        app.world_mut().despawn(ghost);

        app.world_mut()
            .send_event(UseWeaponIntent::new(ghost, WeaponVariant::Dart, Vec2::X));
        tick(&mut app);

        assert!(attacks_in_world(&mut app).is_empty());
    }

    #[test]
    fn test_release_parks_blade_and_clears_latch_key() {
        let mut app = combat_test_app();
        let player = spawn_test_player(&mut app, 1);
        let enemy = spawn_test_enemy(&mut app, 10, Vec2::ZERO);
        let blade = spawn_test_attack(&mut app, player, WeaponVariant::TetheredBlade);

        let key = HitKey::latched(attack_of(&app, blade).uid, EquipmentKey::new("dagger"));
        app.world_mut()
            .get_mut::<HitLedger>(enemy)
            .expect("enemy ledger")
            .confirm_hit(key.clone());

        app.world_mut().send_event(ReleaseAttack { attack: blade });
        tick(&mut app);

        assert!(!attack_of(&app, blade).latch);
        assert!(app.world().get::<ImpulseJoint>(blade).is_none());
        assert!(!is_body_active(app.world(), blade));
        assert!(app.world().get::<HitLedger>(enemy).is_some_and(|l| !l.is_recorded(&key)));
    }

    #[test]
    fn test_release_ignores_non_latching_attack() {
        let mut app = combat_test_app();
        let player = spawn_test_player(&mut app, 1);
        let dart = spawn_test_attack(&mut app, player, WeaponVariant::Dart);

        app.world_mut().send_event(ReleaseAttack { attack: dart });
        tick(&mut app);

        assert!(is_body_active(app.world(), dart));
    }

    #[test]
    fn test_reengaged_blade_can_hit_again() {
        let mut app = combat_test_app();
        let player = spawn_test_player(&mut app, 1);
        let enemy = spawn_test_enemy(&mut app, 10, Vec2::ZERO);
        let blade = spawn_test_attack(&mut app, player, WeaponVariant::TetheredBlade);

        // Первое попадание: клинок parked
        contact(&mut app, blade, enemy);
        tick(&mut app);
        assert_eq!(app.world().get::<Power>(enemy).map(Power::value), Some(9));

        app.world_mut().send_event(EngageAttack { attack: blade });
        tick(&mut app);

        assert!(attack_of(&app, blade).latch);
        assert!(app.world().get::<ImpulseJoint>(blade).is_some());
        assert!(is_body_active(app.world(), blade));

        contact(&mut app, blade, enemy);
        tick(&mut app);

        assert_eq!(app.world().get::<Power>(enemy).map(Power::value), Some(8));
        assert_eq!(sent::<HitLanded>(&app).len(), 2);
    }

    #[test]
    fn test_reengage_lifts_contact_suppression() {
        let mut app = combat_test_app();
        let player = spawn_test_player(&mut app, 1);
        let enemy = spawn_test_enemy(&mut app, 10, Vec2::ZERO);
        let blade = spawn_test_attack(&mut app, player, WeaponVariant::TetheredBlade);

        // Физика сообщила контакт дважды в шаге попадания: второй подавлен
        contact(&mut app, blade, enemy);
        contact(&mut app, enemy, blade);
        tick(&mut app);
        assert!(app.world().resource::<SuppressedContacts>().is_suppressed(blade, enemy));

        app.world_mut().send_event(EngageAttack { attack: blade });
        tick(&mut app);

        // Hooks больше не фильтруют пару: новый контакт доходит и засчитывается
        assert!(!app.world().resource::<SuppressedContacts>().is_suppressed(blade, enemy));

        contact(&mut app, blade, enemy);
        tick(&mut app);
        assert_eq!(app.world().get::<Power>(enemy).map(Power::value), Some(8));
    }

    #[test]
    fn test_release_lifts_contact_suppression() {
        let mut app = combat_test_app();
        let player = spawn_test_player(&mut app, 1);
        let enemy = spawn_test_enemy(&mut app, 10, Vec2::ZERO);
        let blade = spawn_test_attack(&mut app, player, WeaponVariant::TetheredBlade);
        app.world_mut()
            .resource_mut::<SuppressedContacts>()
            .suppress(blade, enemy);

        app.world_mut().send_event(ReleaseAttack { attack: blade });
        tick(&mut app);

        assert!(app.world().resource::<SuppressedContacts>().is_empty());
    }

    #[test]
    fn test_end_attack_purges_ledgers_and_despawns() {
        let mut app = combat_test_app();
        let player = spawn_test_player(&mut app, 1);
        let enemy = spawn_test_enemy(&mut app, 10, Vec2::ZERO);
        let fan = spawn_test_attack(&mut app, player, WeaponVariant::SpinningFan);

        contact(&mut app, fan, enemy);
        tick(&mut app);
        contact(&mut app, fan, enemy);
        tick(&mut app);
        assert_eq!(app.world().get::<HitLedger>(enemy).map(HitLedger::len), Some(1));
        assert!(app.world().resource::<SuppressedContacts>().is_suppressed(fan, enemy));

        // Двойной EndAttack в одном тике не должен паниковать
        app.world_mut().send_event(EndAttack { attack: fan });
        app.world_mut().send_event(EndAttack { attack: fan });
        tick(&mut app);

        assert!(app.world().get_entity(fan).is_err());
        assert!(app.world().get::<HitLedger>(enemy).is_some_and(HitLedger::is_empty));
        assert!(!app.world().resource::<SuppressedContacts>().is_suppressed(fan, enemy));
    }
}
