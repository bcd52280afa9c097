mod animation;
mod frame;
mod loader;
mod reporter;
mod splitter;
mod trimmer;

pub use animation::Animation;
pub use frame::Frame;
pub use reporter::report;
pub use splitter::{FrameFormat, Splitter};
pub use trimmer::TrimRange;
