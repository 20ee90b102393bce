pub mod api;
pub mod controller;
pub mod events;
pub mod logging;
pub mod render;
pub mod state;
