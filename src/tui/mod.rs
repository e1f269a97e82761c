pub mod app;
pub mod input;
pub mod render;
pub mod status;
pub mod theme;

pub use app::run;
