pub mod assets;
pub mod core;
pub mod game;
pub mod input;
pub mod installer;
pub mod rendering;
