pub mod error;
pub mod types;

pub use error::{FenceRejection, QuoridorError, Result};
pub use types::{Fence, NotationError, Orientation, PlayerId, Position};
