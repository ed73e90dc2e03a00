//! Combat systems (FixedUpdate, один tick thread)

pub mod attack_lifecycle;
pub mod contact;
pub mod death;
pub mod pickup;

// Tests (separate files with _tests suffix)
#[cfg(test)]
mod test_support;
#[cfg(test)]
mod attack_lifecycle_tests;
#[cfg(test)]
mod pickup_tests;

// Re-export all systems
pub use attack_lifecycle::*;
pub use contact::*;
pub use death::*;
pub use pickup::*;
