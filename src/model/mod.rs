pub mod step;
pub mod transition;

pub use step::*;
pub use transition::*;
