//! Seed-driven dungeon layout generation.
//!
//! [`generator::MapGenerator`] places rooms, connects them through a
//! triangulation and spanning tree, carves corridors with a grid search and
//! finally assigns walls and doors. Equal [`settings::MapSettings`] always
//! produce the same [`map::MapData`].

pub mod app;
pub mod corridors;
pub mod error;
pub mod generator;
pub mod generators;
pub mod geometry;
pub mod grid;
pub mod map;
pub mod settings;
pub mod solvers;
pub mod walls;
