//! Core runtime: tick scheduling, composition, publishing and the periodic alert

mod alert;
mod composer;
mod publisher;
mod scheduler;

pub use alert::{should_fire, AlertTrigger};
pub use composer::Composer;
pub use publisher::{PublishError, Publisher, StdoutPublisher, WriterPublisher, X11Publisher};
pub use scheduler::{Scheduler, Tick, TickState};
