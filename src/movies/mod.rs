pub mod history;
pub mod service;

pub use history::*;
pub use service::*;
