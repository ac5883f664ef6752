pub mod catalog;
pub mod preferences;
pub mod template;
pub mod variable;
