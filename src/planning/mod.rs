// Route planning algorithms module

pub mod grid_search;
pub mod session;

pub use grid_search::*;
pub use session::*;
