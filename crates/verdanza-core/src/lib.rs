pub mod config;
pub mod constants;
pub mod easing;
pub mod entrance;
pub mod error;
pub mod mapper;
pub mod navbar;
pub mod route;
pub mod scene;
pub mod scroll;
pub mod session;
pub mod spotlight;
pub mod spring;
pub mod ticker;
pub mod tween;

pub use config::*;
pub use constants::*;
pub use easing::*;
pub use entrance::*;
pub use error::*;
pub use mapper::*;
pub use navbar::*;
pub use route::*;
pub use scene::*;
pub use scroll::*;
pub use session::*;
pub use spotlight::*;
pub use spring::*;
pub use ticker::*;
pub use tween::*;
