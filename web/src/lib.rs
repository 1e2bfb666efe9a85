mod app;
mod board;
mod help;

pub use app::App;
