//! Check detection, the self-check filter, and game status.

pub mod attacks;
pub mod legality;
pub mod status;
