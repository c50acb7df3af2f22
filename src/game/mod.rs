//! Game entities
//!
//! - `projectile` - thrown firecrackers on a ballistic trajectory
//! - `character` - the player: movement, shooting, projectile ownership
//! - `npc` - passive characters with optional glow
//! - `entity` - shared capabilities and the scene's entity set

mod character;
mod entity;
mod npc;
mod projectile;

pub use character::{Character, MovementMode};
pub use entity::{Actor, EntitySet, UpdateContext};
pub use npc::{Npc, NpcGlow};
pub use projectile::LAUNCH_SPEED;
