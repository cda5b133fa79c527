pub mod collision;
pub mod input;
pub mod timer;

pub use collision::{detect_hit, overlaps};
pub use input::{apply_key, direction_for, Direction};
pub use timer::TickTimer;
