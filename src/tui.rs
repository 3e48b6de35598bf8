//! Terminal front-end: a menu scene for house rules and a table scene that
//! drives the engine through [`crate::agents::Table`].

pub mod app;
pub mod controller;
mod ui;
