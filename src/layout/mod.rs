pub mod binning;
pub mod calculator;
pub mod collision;
pub mod config;
pub mod kind;
pub mod positions;
