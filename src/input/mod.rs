//! Input processing module
//! Handles loading questionnaire submissions and profession catalogs from disk

pub mod manager;

pub use manager::InputManager;
