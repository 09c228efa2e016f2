pub mod announcement;
pub mod content;
pub mod registry;
pub mod shared;
