pub mod auto_advance;
pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod slide;
pub mod state;
pub mod surface;

pub use auto_advance::{AutoAdvance, TimerState};
pub use config::CarouselConfig;
pub use controller::{CarouselEvent, Controller};
pub use error::CarouselError;
pub use state::{CarouselState, Transition, Triggers, Visibility, trigger_visibility};
pub use surface::{RecordingSurface, Surface};
