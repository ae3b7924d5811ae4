pub mod packages;
pub mod play;
pub mod reset;
pub mod status;
