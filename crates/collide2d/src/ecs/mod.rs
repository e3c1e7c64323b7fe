//! Entity-Component-System implementation
//!
//! A minimal world for the collision kernel: entities, the rectangle arena
//! they share with movement systems, and the systems that run each tick.

pub mod world;
pub mod entity;
pub mod system;
pub mod components;
pub mod systems;

#[cfg(test)]
mod tests;

pub use world::World;
pub use entity::Entity;
pub use system::System;
