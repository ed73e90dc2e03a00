//! Body lifecycle: вход/выход тела из живой симуляции без уничтожения entity.
//!
//! Parked тело (`RigidBodyDisabled` + `ColliderDisabled`) не двигается,
//! не получает силы и не генерирует контакты. Все компоненты entity остаются,
//! поэтому тело можно вернуть обратно (pooled attack) или удалить позже
//! (death presentation ещё играет).
//!
//! Обе операции идемпотентны: insert/remove маркеров повторно: no-op.

use bevy::ecs::system::EntityCommands;
use bevy::prelude::*;
use bevy_rapier2d::prelude::{ColliderDisabled, RigidBodyDisabled};

pub trait BodyLifecycle {
    /// Вернуть тело в симуляцию
    fn activate_body(&mut self) -> &mut Self;

    /// Убрать тело из симуляции (entity и её состояние сохраняются)
    fn deactivate_body(&mut self) -> &mut Self;
}

impl BodyLifecycle for EntityCommands<'_> {
    fn activate_body(&mut self) -> &mut Self {
        self.remove::<(RigidBodyDisabled, ColliderDisabled)>()
    }

    fn deactivate_body(&mut self) -> &mut Self {
        self.insert((RigidBodyDisabled, ColliderDisabled))
    }
}

/// Тело участвует в симуляции (нет маркеров отключения).
pub fn is_body_active(world: &World, entity: Entity) -> bool {
    world
        .get_entity(entity)
        .map(|e| !e.contains::<RigidBodyDisabled>() && !e.contains::<ColliderDisabled>())
        .unwrap_or(false)
}
