pub mod difficulty;
pub mod quiz;
pub mod summary;
