//! Отложенное уничтожение поверженных врагов.

use bevy::prelude::*;

use crate::physics::SuppressedContacts;

/// Компонент-маркер: деспавн entity после указанного времени
///
/// Тело уже вне симуляции; entity живёт, пока presentation играет death эффект.
#[derive(Component, Debug, Clone, Copy)]
pub struct DespawnAfter {
    /// Время деспавна (в секундах от старта)
    pub despawn_time: f32,
}

/// Система: деспавн entities с истёкшим DespawnAfter timeout
///
/// Ledger врага уходит вместе с entity; подавленные пары с его участием забываем.
pub fn despawn_after_timeout(
    mut commands: Commands,
    query: Query<(Entity, &DespawnAfter)>,
    mut suppressed: ResMut<SuppressedContacts>,
    time: Res<Time>,
) {
    let current_time = time.elapsed_secs();

    for (entity, despawn_after) in query.iter() {
        if current_time >= despawn_after.despawn_time {
            suppressed.forget(entity);
            commands.entity(entity).despawn();
            crate::logger::log(&format!("⚰️ Despawning entity {:?} (timeout)", entity));
        }
    }
}
