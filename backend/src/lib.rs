pub mod system;
pub mod texture;

pub use system::{System, SystemConfig, SystemError};
pub use texture::{load_texture, texture_size, TextureError};
