pub mod actions;
pub mod config;
pub mod events;
pub mod gui;
pub mod haptics;
pub mod services;
pub mod store;
pub mod sys;
