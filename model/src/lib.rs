#[macro_use]
extern crate anyhow;
#[macro_use]
extern crate log;

mod arc;
mod config;
mod export;
mod projection;
mod scene;
mod trail;
mod view;

pub use self::arc::FlightArc;
pub use self::config::{Config, Place};
pub use self::projection::{from_web_mercator, to_web_mercator};
pub use self::scene::{Flight, FlightMap, FrameUpdate};
pub use self::trail::{Trail, TrailFrame};
pub use self::view::{CameraMove, ViewChange, ViewMode};
