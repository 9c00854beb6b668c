pub mod app;
pub mod cards;
pub mod icon;
pub mod overlay;
pub mod theme;
