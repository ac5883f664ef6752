pub mod assistant;
pub mod editor;
