pub mod orientation;
pub mod pointer;

pub use orientation::*;
pub use pointer::*;
