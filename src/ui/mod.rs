pub mod app;
pub mod calculator;
pub mod theme;

pub use app::run;
