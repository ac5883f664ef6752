pub mod catalog;
pub mod drafts;
pub mod export;
pub mod preferences;
pub mod templates;
