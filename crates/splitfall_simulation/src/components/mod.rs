//! ECS Components для игровых entity
//!
//! Организация по доменам:
//! - actor: комбатанты (Player, Enemy, Power, ArchetypeKey, Defeated)
//! - equipment: применение оружия (Attack, AttackUid, WeaponVariant)
//! - pickup: sensor pickups (Pickup, PickupKind)

pub mod actor;
pub mod equipment;
pub mod pickup;

// Re-exports для удобного импорта
pub use actor::*;
pub use equipment::*;
pub use pickup::*;
