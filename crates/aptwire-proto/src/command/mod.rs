//! Command encoders.
//!
//! Every encoder takes the destination and source addresses followed by
//! the command's typed parameters and returns the complete frame. The
//! destination must be a 7-bit address; the eighth bit is set only by the
//! long-form header encoder.

pub mod generic;
pub mod motor;
pub mod piezo;

pub use generic::*;
pub use motor::*;
pub use piezo::*;
