pub use bare::*;

mod bare;
