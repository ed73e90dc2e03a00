//! Подавление физического отклика для уже засчитанных пар.
//!
//! Combat core помечает пару (attack, defender) неактивной сразу при
//! обработке контакта; Rapier спрашивает hooks перед narrow phase, и
//! подавленная пара больше не даёт ни solver contacts, ни collision events.

use std::collections::HashSet;

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

/// Неупорядоченные пары тел, чей контакт выключен.
#[derive(Resource, Debug, Default)]
pub struct SuppressedContacts {
    pairs: HashSet<(Entity, Entity)>,
}

impl SuppressedContacts {
    fn key(a: Entity, b: Entity) -> (Entity, Entity) {
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }

    /// Выключить контакт пары. `true` если пара ещё не была подавлена.
    pub fn suppress(&mut self, a: Entity, b: Entity) -> bool {
        self.pairs.insert(Self::key(a, b))
    }

    pub fn is_suppressed(&self, a: Entity, b: Entity) -> bool {
        self.pairs.contains(&Self::key(a, b))
    }

    /// Забыть все пары с участием entity (entity уходит из мира).
    pub fn forget(&mut self, entity: Entity) {
        self.pairs.retain(|(a, b)| *a != entity && *b != entity);
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Rapier physics hooks поверх `SuppressedContacts`.
///
/// Работает только для colliders с `ActiveHooks::FILTER_CONTACT_PAIRS`
/// (solid) или `ActiveHooks::FILTER_INTERSECTION_PAIR` (sensor).
#[derive(SystemParam)]
pub struct ContactSuppressionHooks<'w> {
    suppressed: Res<'w, SuppressedContacts>,
}

impl BevyPhysicsHooks for ContactSuppressionHooks<'_> {
    fn filter_contact_pair(&self, context: PairFilterContextView) -> Option<SolverFlags> {
        if self.suppressed.is_suppressed(context.collider1(), context.collider2()) {
            None
        } else {
            Some(SolverFlags::COMPUTE_IMPULSES)
        }
    }

    fn filter_intersection_pair(&self, context: PairFilterContextView) -> bool {
        !self.suppressed.is_suppressed(context.collider1(), context.collider2())
    }
}
