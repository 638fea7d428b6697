pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod host;
pub mod mask;
pub mod session;
pub mod transform;

pub use config::*;
pub use engine::*;
pub use error::*;
pub use geometry::*;
pub use host::*;
pub use mask::*;
pub use session::*;
pub use transform::*;
