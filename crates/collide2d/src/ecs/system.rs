//! System trait and implementations

/// System trait for processing entities and components once per tick
pub trait System {
    /// Run the system for one tick
    fn update(&mut self, world: &mut crate::ecs::World, delta_time: f32);
}
