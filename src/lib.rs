//! Treasure Hunter - Terminal Treasure Hunt Library
//!
//! The whole rule core lives here so tests and alternative frontends can
//! drive a full game headlessly: scripted commands in, styled messages out.

pub mod build_info;
pub mod constants;
pub mod display;
pub mod game;
pub mod hunter;
pub mod items;
pub mod shop;
pub mod terrain;
pub mod town;
