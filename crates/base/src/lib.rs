pub mod log;
pub use log::*;

mod timestamp;
pub use timestamp::*;
