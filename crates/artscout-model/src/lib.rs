pub mod artist;
pub mod analysis;

pub use artist::*;
pub use analysis::*;
