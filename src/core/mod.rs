pub mod animation;
pub mod capability;
pub mod config;
pub mod constants;
pub mod mapping;
pub mod schedule;
pub mod specular;
pub mod uniforms;

pub use animation::*;
pub use capability::*;
pub use config::*;
pub use constants::*;
pub use mapping::*;
pub use schedule::*;
pub use specular::*;
pub use uniforms::*;

// Shaders bundled as string constants
pub static HOLO_WGSL: &str = include_str!("../../shaders/holo.wgsl");
