/// Scene module - game objects, components and bounding volumes
///
/// The editor view of the scene graph: a tree of `GameObject`s, each with a
/// world transform and typed `Component`s. Cullable components publish an
/// `OrientedBoundingBox` that the debug overlay draws.

mod bounds;
mod component;
mod game_object;

pub use bounds::{AABB, OrientedBoundingBox};
pub use component::{Component, ComponentKey, ComponentKind, ComponentRegistry, Cullable};
pub use game_object::{GameObject, GameObjectId};
