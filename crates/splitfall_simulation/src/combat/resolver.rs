//! Combat resolver: сравнение power атакующего и защитника.
//!
//! - `attacker >= defender` → защитник повержен, на его месте появляются два новых
//! - `attacker < defender` → power защитника уменьшается на power атакующего
//!
//! Урон всегда равен полному power атакующего, без scaling/mitigation.

use crate::components::Power;

/// Сколько замен спавнится за одного поверженного врага ("split on defeat").
pub const SPLIT_SPAWN_COUNT: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatOutcome {
    /// Защитник повержен; caller спавнит `SPLIT_SPAWN_COUNT` замен
    Defeated,
    /// Защитник жив, power уменьшен
    Damaged { remaining: u32 },
}

impl CombatOutcome {
    pub fn is_defeated(&self) -> bool {
        matches!(self, CombatOutcome::Defeated)
    }

    /// Сколько замен нужно заспавнить.
    pub fn replacement_spawns(&self) -> usize {
        match self {
            CombatOutcome::Defeated => SPLIT_SPAWN_COUNT,
            CombatOutcome::Damaged { .. } => 0,
        }
    }
}

/// Применяет попадание к power защитника.
///
/// При поражении power защитника не трогаем (presentation ещё может его показать).
pub fn resolve_hit(attacker_power: u32, defender: &mut Power) -> CombatOutcome {
    if attacker_power >= defender.value() {
        return CombatOutcome::Defeated;
    }

    defender.reduce(attacker_power);
    CombatOutcome::Damaged {
        remaining: defender.value(),
    }
}
