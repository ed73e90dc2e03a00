//! Hit validator: raw contact → (attack, defender) → admissible или нет.
//!
//! # Flow
//!
//! ```text
//! CollisionEvent::Started(a, b)
//!   ↓ resolve_participants: какой из двух: attack, какой: живой враг
//!   ↓ validate_hit: attack hit-capable? ledger.confirm_hit(key)
//!   ↓
//! Ok(HitKey) → variant effects + combat resolver
//! Err(rejection) → контакт игнорируется (пара подавлена, если это повтор)
//! ```
//!
//! Ни одна ошибка не выходит наружу: все аномалии деградируют в "игнорировать".

use bevy::prelude::*;

use crate::combat::ledger::{HitConfirmation, HitKey, HitLedger};
use crate::combat::roster::ActiveEnemies;
use crate::components::Attack;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ContactRejection {
    #[error("neither body belongs to an attack")]
    NotAnAttack,
    #[error("no tracked enemy in contact (defeated or stale event)")]
    StaleDefender,
    #[error("attack wielder no longer exists")]
    StaleWielder,
    #[error("latching attack is released and inert")]
    InertAttack,
    #[error("attack already counted against this defender")]
    DuplicateHit,
}

impl ContactRejection {
    /// Пару стоит выключить в физике (повтор уже засчитанного/инертного контакта).
    pub fn suppresses_contact(&self) -> bool {
        matches!(self, ContactRejection::DuplicateHit | ContactRejection::InertAttack)
    }
}

/// Участники admissible контакта.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactParticipants {
    pub attack: Entity,
    pub defender: Entity,
}

/// Разрешает пару тел в (attack, defender).
///
/// Любой из двух может быть атакой; второй обязан числиться в `ActiveEnemies`.
pub fn resolve_participants(
    a: Entity,
    b: Entity,
    is_attack: impl Fn(Entity) -> bool,
    enemies: &ActiveEnemies,
) -> Result<ContactParticipants, ContactRejection> {
    let (attack, other) = if is_attack(a) {
        (a, b)
    } else if is_attack(b) {
        (b, a)
    } else {
        return Err(ContactRejection::NotAnAttack);
    };

    if !enemies.contains(other) {
        return Err(ContactRejection::StaleDefender);
    }

    Ok(ContactParticipants {
        attack,
        defender: other,
    })
}

/// Проверяет и сразу записывает попадание в ledger защитника.
pub fn validate_hit(ledger: &mut HitLedger, attack: &Attack) -> Result<HitKey, ContactRejection> {
    if !attack.is_hit_capable() {
        return Err(ContactRejection::InertAttack);
    }

    let key = HitKey::for_attack(attack);
    match ledger.confirm_hit(key.clone()) {
        HitConfirmation::New => Ok(key),
        HitConfirmation::Duplicate => Err(ContactRejection::DuplicateHit),
    }
}
