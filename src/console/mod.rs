pub use traits::*;

pub mod backends;
mod logging;
mod traits;
