//! Platform module: триггерные поворотные платформы (не зависят от AI)

use bevy::prelude::*;

pub mod rotation;

pub use rotation::{rotate_platforms, trigger_platforms, RetriggerPolicy, RotatingPlatform};

/// Platform Plugin
///
/// Update (variable tick): trigger_platforms → rotate_platforms
pub struct PlatformPlugin;

impl Plugin for PlatformPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<crate::events::ContactEvent>()
            .register_type::<RotatingPlatform>()
            .add_systems(Update, (trigger_platforms, rotate_platforms).chain());
    }
}
