//! Domain layer: pure, synchronous model and ports.

pub mod error;
pub mod markup;
pub mod model;
pub mod rename;
pub mod traits;
