mod durations;
pub mod progress;
mod session;
pub mod view;

pub use durations::*;
pub use progress::{Gradient, ProgressCell, ProgressGrid, Rgb};
pub use session::*;
pub use view::{compose, Composition, Theme};
