pub mod blend;
pub mod ease;
pub mod scroll;
