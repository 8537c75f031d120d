mod commands;
mod console;
mod menu;
mod render;
mod setup;

pub use commands::run;
