/// Scene objects: a tree of transforms carrying typed components
///
/// The editor only reads this tree (the debug overlay walks it every frame)
/// apart from building it. Children and components keep insertion order.

use glam::{Mat4, Vec3};
use super::component::{Component, ComponentKey};

/// Identity of a game object inside a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GameObjectId(pub u64);

/// A node of the scene tree
#[derive(Debug, Clone)]
pub struct GameObject {
    id: GameObjectId,
    name: String,
    active: bool,
    /// World-space transform
    transform: Mat4,
    components: Vec<Component>,
    children: Vec<GameObject>,
}

impl GameObject {
    /// Create an active object with an identity transform
    pub fn new(id: GameObjectId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            active: true,
            transform: Mat4::IDENTITY,
            components: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_transform(mut self, transform: Mat4) -> Self {
        self.set_transform(transform);
        self
    }

    pub fn with_component(mut self, component: Component) -> Self {
        self.add_component(component);
        self
    }

    pub fn with_child(mut self, child: GameObject) -> Self {
        self.add_child(child);
        self
    }

    // ===== ACCESSORS =====

    pub fn id(&self) -> GameObjectId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn transform(&self) -> &Mat4 {
        &self.transform
    }

    /// Set the world transform and propagate it to every cullable OBB.
    pub fn set_transform(&mut self, transform: Mat4) {
        self.transform = transform;
        for component in &mut self.components {
            if let Some(cullable) = component.cullable_mut() {
                cullable.update_world_transform(transform);
            }
        }
    }

    /// World-space position (translation column of the transform)
    pub fn position(&self) -> Vec3 {
        self.transform.w_axis.truncate()
    }

    /// Unit forward direction: local +Z carried by the world transform.
    ///
    /// Zero if the transform collapses the Z axis.
    pub fn forward_direction(&self) -> Vec3 {
        self.transform.transform_vector3(Vec3::Z).normalize_or_zero()
    }

    // ===== COMPONENTS =====

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn components_mut(&mut self) -> &mut [Component] {
        &mut self.components
    }

    /// Append a component. Its cullable OBB is moved to this object's transform.
    pub fn add_component(&mut self, mut component: Component) {
        if let Some(cullable) = component.cullable_mut() {
            cullable.update_world_transform(self.transform);
        }
        self.components.push(component);
    }

    /// Detach a component by key
    pub fn remove_component(&mut self, key: ComponentKey) -> Option<Component> {
        let index = self.components.iter().position(|c| c.key() == key)?;
        Some(self.components.remove(index))
    }

    pub fn component(&self, key: ComponentKey) -> Option<&Component> {
        self.components.iter().find(|c| c.key() == key)
    }

    // ===== CHILDREN =====

    pub fn children(&self) -> &[GameObject] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [GameObject] {
        &mut self.children
    }

    pub fn add_child(&mut self, child: GameObject) {
        self.children.push(child);
    }

    /// Detach a direct child by id
    pub fn remove_child(&mut self, id: GameObjectId) -> Option<GameObject> {
        let index = self.children.iter().position(|c| c.id == id)?;
        Some(self.children.remove(index))
    }

    /// Depth-first search of this subtree (self included)
    pub fn find(&self, id: GameObjectId) -> Option<&GameObject> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    pub fn find_mut(&mut self, id: GameObjectId) -> Option<&mut GameObject> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter_mut().find_map(|child| child.find_mut(id))
    }
}

#[cfg(test)]
#[path = "game_object_tests.rs"]
mod tests;
