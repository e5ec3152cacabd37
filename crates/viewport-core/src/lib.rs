pub mod bounds;
pub mod constants;
pub mod error;
pub mod input;
pub mod motion;
pub mod sizer;
pub mod state;
pub mod timing;
pub mod viewport;
#[cfg(not(target_arch = "wasm32"))]
pub mod worker;

pub use bounds::*;
pub use error::*;
pub use input::*;
pub use motion::*;
pub use sizer::*;
pub use state::*;
pub use timing::*;
pub use viewport::*;
#[cfg(not(target_arch = "wasm32"))]
pub use worker::*;
