//! Tests for pickup collection.

#[cfg(test)]
mod tests {
    use bevy::prelude::*;

    use super::super::test_support::*;
    use crate::combat::events::{PickupCollected, TreasureOpened};
    use crate::components::{Pickup, PickupKind};
    use crate::physics::is_body_active;

    #[test]
    fn test_experience_drop_collected_once() {
        let mut app = combat_test_app();
        let player = spawn_test_player(&mut app, 1);
        let orb = spawn_test_pickup(&mut app, PickupKind::ExperienceDrop);

        contact(&mut app, player, orb);
        contact(&mut app, orb, player);
        tick(&mut app);

        let collected = sent::<PickupCollected>(&app);
        assert_eq!(collected.len(), 1);
        assert_eq!(collected[0].pickup, orb);
        assert_eq!(collected[0].collector, player);
        assert!(app.world().get::<Pickup>(orb).is_some_and(|p| p.collected));
        assert!(sent::<TreasureOpened>(&app).is_empty());
    }

    #[test]
    fn test_treasure_opens_and_leaves_simulation() {
        let mut app = combat_test_app();
        let player = spawn_test_player(&mut app, 1);
        let treasure = spawn_test_pickup(&mut app, PickupKind::Treasure);

        contact(&mut app, treasure, player);
        tick(&mut app);

        let opened = sent::<TreasureOpened>(&app);
        assert_eq!(opened.len(), 1);
        assert_eq!(opened[0].treasure, treasure);
        assert!(!is_body_active(app.world(), treasure));
    }

    #[test]
    fn test_enemy_cannot_collect() {
        let mut app = combat_test_app();
        let enemy = spawn_test_enemy(&mut app, 3, Vec2::ZERO);
        let orb = spawn_test_pickup(&mut app, PickupKind::ExperienceDrop);

        contact(&mut app, enemy, orb);
        tick(&mut app);

        assert!(sent::<PickupCollected>(&app).is_empty());
        assert!(app.world().get::<Pickup>(orb).is_some_and(|p| !p.collected));
    }
}
