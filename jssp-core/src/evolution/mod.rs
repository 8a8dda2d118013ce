//! Contains the generational control loop and its configuration.

mod config;
pub use self::config::*;

mod control;
pub use self::control::*;

mod controller;
pub use self::controller::*;

mod sink;
pub use self::sink::*;

mod telemetry;
pub use self::telemetry::*;
