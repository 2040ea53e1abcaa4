//! Combat domain: boss behaviour and melee resolution.

mod boss;
mod components;
mod melee;

pub use components::{Boss, BossSprite, SpinState, Strike, StrikeKind};
pub use melee::{AttackOutcome, MeleeState};
