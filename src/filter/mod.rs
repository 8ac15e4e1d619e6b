mod filter;
pub use filter::*;
