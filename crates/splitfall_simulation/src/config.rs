//! Tuning constants для combat core (data-driven, JSON).
//!
//! Все размеры заданы в "design pixels" и умножаются на `base_scale_factor`
//! при создании тел.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Ошибки загрузки конфига (единственный `Result`, который видит caller).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read combat config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed combat config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Width × height прямоугольного тела (design units, до масштабирования).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Reflect)]
pub struct BodySize {
    pub width: f32,
    pub height: f32,
}

impl BodySize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Surface friction + air friction (air friction → Rapier linear damping).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Reflect)]
pub struct FrictionSettings {
    pub surface: f32,
    pub air: f32,
}

impl FrictionSettings {
    pub const fn new(surface: f32, air: f32) -> Self {
        Self { surface, air }
    }
}

/// Форма тела атаки для каждого варианта оружия.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Reflect)]
#[serde(default)]
pub struct WeaponShapes {
    pub blade: BodySize,
    pub fan_radius: f32,
    pub cleave: BodySize,
    pub dart: BodySize,
}

impl Default for WeaponShapes {
    fn default() -> Self {
        Self {
            blade: BodySize::new(24.0, 64.0),
            fan_radius: 48.0,
            cleave: BodySize::new(120.0, 80.0),
            dart: BodySize::new(40.0, 12.0),
        }
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize, Reflect)]
#[reflect(Resource)]
#[serde(default)]
pub struct CombatConfig {
    /// Display-resolution factor (DPR), применяется ко всем размерам
    pub base_scale_factor: f32,

    pub player_body: BodySize,
    pub player_friction: FrictionSettings,

    pub enemy_body: BodySize,
    pub enemy_friction: FrictionSettings,
    pub enemy_restitution: f32,

    pub weapon_shapes: WeaponShapes,
    /// Blade до попадания: скользит почти без трения
    pub blade_friction: FrictionSettings,
    /// Трение атаки после попадания (blade "тормозит", остальные: штатно)
    pub attack_friction: FrictionSettings,
    pub fan_angular_velocity: f32,
    /// Скорость броска dart/fan, px/s (умножается на scale)
    pub launch_speed: f32,
    /// Сколько секунд брошенная атака живёт до `EndAttack`
    pub launched_attack_lifetime_secs: f32,

    /// Power первого врага; замены получают `base + enemies_defeated`
    pub base_enemy_power: u32,
    pub player_power: u32,
    /// Радиус случайного spawn вокруг игрока
    pub spawn_distance: f32,
    /// Насколько ниже верхней кромки врага появляется combat text
    pub combat_text_offset: f32,
    /// Сколько секунд death presentation держит тело до despawn
    pub death_presentation_secs: f32,

    pub player_key: String,
    pub enemy_keys: Vec<String>,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            base_scale_factor: 1.0,
            player_body: BodySize::new(80.0, 100.0),
            player_friction: FrictionSettings::new(0.4, 0.1),
            enemy_body: BodySize::new(60.0, 80.0),
            enemy_friction: FrictionSettings::new(0.4, 0.2),
            enemy_restitution: 0.8,
            weapon_shapes: WeaponShapes::default(),
            blade_friction: FrictionSettings::new(0.1, 0.01),
            attack_friction: FrictionSettings::new(0.4, 0.1),
            fan_angular_velocity: 1.0,
            launch_speed: 600.0,
            launched_attack_lifetime_secs: 2.0,
            base_enemy_power: 3,
            player_power: 5,
            spawn_distance: 300.0,
            combat_text_offset: 20.0,
            death_presentation_secs: 0.5,
            player_key: "bandit".to_string(),
            enemy_keys: vec![
                "skeleton".to_string(),
                "slime".to_string(),
                "wraith".to_string(),
            ],
        }
    }
}

impl CombatConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Design units → world units.
    pub fn scaled(&self, value: f32) -> f32 {
        value * self.base_scale_factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = CombatConfig::from_json_str(r#"{ "base_scale_factor": 2.0, "base_enemy_power": 7 }"#)
            .expect("valid config");

        assert_eq!(config.base_scale_factor, 2.0);
        assert_eq!(config.base_enemy_power, 7);
        assert_eq!(config.enemy_body, BodySize::new(60.0, 80.0));
        assert_eq!(config.player_key, "bandit");
        assert_eq!(config.scaled(10.0), 20.0);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = CombatConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = CombatConfig::load("/definitely/not/here/combat.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
