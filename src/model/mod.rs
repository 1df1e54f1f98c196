pub mod point;
pub mod story;
pub mod style;
