pub mod config;
pub mod constants;
pub mod layout;
pub mod scene;
pub mod scroll;
pub mod section;
pub mod state;
pub mod visibility;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use config::*;
pub use constants::*;
pub use layout::*;
pub use scene::*;
pub use scroll::*;
pub use section::*;
pub use state::*;
pub use visibility::*;
