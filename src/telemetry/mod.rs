//! Simulated node telemetry: the sample generator, the rolling window and
//! earnings counter it feeds, and the timer-driven controllers that own them.
//!
//! Nothing here knows about the terminal; controllers deliver ticks through
//! any channel whose event type converts from [`ticker::Tick`].

pub mod clock;
pub mod dashboard;
pub mod descriptors;
pub mod earnings;
pub mod generator;
pub mod random;
pub mod realtime;
pub mod ticker;
pub mod window;
