//! Hit ledger: per-defender учёт уже засчитанных попаданий.
//!
//! Один attack instance может дать несколько raw контактов с одним
//! защитником подряд (перекрывающиеся shapes, повторные события в одном
//! шаге). Ledger гарантирует не больше одного засчитанного попадания на
//! ключ `(attack uid, latch discriminator)`.
//!
//! Проверка и запись: одна операция (`confirm_hit`), поэтому два контакта
//! одной пары в одном тике не могут оба пройти.

use std::collections::HashSet;

use bevy::prelude::*;

use crate::components::{Attack, AttackUid, EquipmentKey};

/// Ключ ledger. `latch` = equipment key, пока latching оружие взведено.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HitKey {
    pub attack: AttackUid,
    pub latch: Option<EquipmentKey>,
}

impl HitKey {
    pub fn new(attack: AttackUid, latch: Option<EquipmentKey>) -> Self {
        Self { attack, latch }
    }

    /// Ключ, под которым атака засчитывается прямо сейчас.
    pub fn for_attack(attack: &Attack) -> Self {
        Self::new(attack.uid, attack.latch_discriminator().cloned())
    }

    /// Ключ взведённого latching оружия (его и чистит release).
    pub fn latched(attack: AttackUid, equipment: EquipmentKey) -> Self {
        Self::new(attack, Some(equipment))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitConfirmation {
    /// Первое попадание по ключу: засчитано и записано
    New,
    /// Ключ уже записан
    Duplicate,
}

#[derive(Component, Debug, Default, Clone)]
pub struct HitLedger {
    recorded: HashSet<HitKey>,
}

impl HitLedger {
    /// Check + write за один шаг.
    pub fn confirm_hit(&mut self, key: HitKey) -> HitConfirmation {
        if self.recorded.insert(key) {
            HitConfirmation::New
        } else {
            HitConfirmation::Duplicate
        }
    }

    pub fn is_recorded(&self, key: &HitKey) -> bool {
        self.recorded.contains(key)
    }

    /// Явный release: следующий `confirm_hit` с этим ключом снова `New`.
    pub fn release(&mut self, key: &HitKey) -> bool {
        self.recorded.remove(key)
    }

    /// Удаляет все записи attack instance. Возвращает количество удалённых.
    pub fn purge_attack(&mut self, attack: AttackUid) -> usize {
        let before = self.recorded.len();
        self.recorded.retain(|key| key.attack != attack);
        before - self.recorded.len()
    }

    pub fn clear(&mut self) {
        self.recorded.clear();
    }

    pub fn len(&self) -> usize {
        self.recorded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recorded.is_empty()
    }
}
