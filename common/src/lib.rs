pub mod display;
pub mod poll;
pub mod render;
pub mod sensor;
