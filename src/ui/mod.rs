pub mod banner;
pub mod braille;
pub mod render;

pub use banner::WinnerBanner;
pub use render::{render, Hud};
