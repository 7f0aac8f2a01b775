pub mod canvas;
pub mod controls;
pub mod geometry;
pub mod types;
