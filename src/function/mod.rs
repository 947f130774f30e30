//! Function seam between the gateway host and the code it invokes.

pub mod generate_image;
pub mod handler;

pub use generate_image::GenerateImageFunction;
pub use handler::{CloudFunction, FunctionContext, FunctionError};
