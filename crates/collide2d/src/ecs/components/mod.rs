//! ECS components

pub mod collision;

pub use collision::CollisionDescriptor;
