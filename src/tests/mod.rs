// Make common test utilities available
pub mod common;

mod controller;
mod theme;
