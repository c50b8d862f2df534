/// Scene components and their identity tokens.
///
/// Components are identified by a `ComponentKey` issued by a
/// `ComponentRegistry`. Keys carry a generation, so a key of a removed
/// component never matches a component created later in the same slot.

use glam::{Mat4, Vec3};
use slotmap::{new_key_type, SlotMap};
use super::bounds::{AABB, OrientedBoundingBox};

// ===== SLOT MAP KEY =====

new_key_type! {
    /// Stable identity of a component.
    ///
    /// Used by the debug overlay to key its mesh caches.
    pub struct ComponentKey;
}

// ===== KIND =====

/// Component category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// Renderable model
    Model,
    /// Height field terrain
    Terrain,
    /// Water plane
    Water,
    /// Anything else (lights, scripts, audio, ...)
    Other,
}

// ===== CULLABLE =====

/// Bounds data published by components that take part in frustum culling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cullable {
    /// `None` until the host has computed the bounds
    oriented_bounding_box: Option<OrientedBoundingBox>,
    /// Full extent of the component
    dimensions: Vec3,
}

impl Cullable {
    /// Cullable whose bounds are not computed yet
    pub fn pending() -> Self {
        Self {
            oriented_bounding_box: None,
            dimensions: Vec3::ZERO,
        }
    }

    /// Cullable with local bounds placed by `world_transform`
    pub fn from_bounds(bounds: AABB, world_transform: Mat4) -> Self {
        Self {
            oriented_bounding_box: Some(OrientedBoundingBox::new(bounds, world_transform)),
            dimensions: bounds.dimensions(),
        }
    }

    pub fn oriented_bounding_box(&self) -> Option<&OrientedBoundingBox> {
        self.oriented_bounding_box.as_ref()
    }

    pub fn dimensions(&self) -> Vec3 {
        self.dimensions
    }

    /// Replace the local bounds, keeping the current world transform.
    pub fn set_bounds(&mut self, bounds: AABB) {
        let transform = self
            .oriented_bounding_box
            .map(|obb| *obb.transform())
            .unwrap_or(Mat4::IDENTITY);
        self.oriented_bounding_box = Some(OrientedBoundingBox::new(bounds, transform));
        self.dimensions = bounds.dimensions();
    }

    /// Keep the OBB transform in sync with the owner's world transform.
    pub fn update_world_transform(&mut self, world_transform: Mat4) {
        if let Some(obb) = self.oriented_bounding_box.as_mut() {
            obb.set_transform(world_transform);
        }
    }
}

// ===== COMPONENT =====

/// A component attached to a game object
#[derive(Debug, Clone)]
pub struct Component {
    key: ComponentKey,
    kind: ComponentKind,
    cullable: Option<Cullable>,
}

impl Component {
    /// Non-cullable component
    pub fn new(key: ComponentKey, kind: ComponentKind) -> Self {
        Self { key, kind, cullable: None }
    }

    /// Attach cullable bounds data
    pub fn with_cullable(mut self, cullable: Cullable) -> Self {
        self.cullable = Some(cullable);
        self
    }

    pub fn key(&self) -> ComponentKey {
        self.key
    }

    /// Move the component under a key issued by another registry
    pub(crate) fn set_key(&mut self, key: ComponentKey) {
        self.key = key;
    }

    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    /// Bounds data, `None` for components that are not cullable
    pub fn cullable(&self) -> Option<&Cullable> {
        self.cullable.as_ref()
    }

    pub fn cullable_mut(&mut self) -> Option<&mut Cullable> {
        self.cullable.as_mut()
    }

    pub fn is_cullable(&self) -> bool {
        self.cullable.is_some()
    }
}

// ===== REGISTRY =====

/// Issues component keys and remembers each live component's kind.
#[derive(Debug, Clone, Default)]
pub struct ComponentRegistry {
    components: SlotMap<ComponentKey, ComponentKind>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self { components: SlotMap::with_key() }
    }

    /// Register a new component and return its key
    pub fn register(&mut self, kind: ComponentKind) -> ComponentKey {
        self.components.insert(kind)
    }

    /// Forget a component. Returns its kind, or `None` if the key was stale.
    pub fn unregister(&mut self, key: ComponentKey) -> Option<ComponentKind> {
        self.components.remove(key)
    }

    pub fn contains(&self, key: ComponentKey) -> bool {
        self.components.contains_key(key)
    }

    pub fn kind(&self, key: ComponentKey) -> Option<ComponentKind> {
        self.components.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ComponentKey, ComponentKind)> + '_ {
        self.components.iter().map(|(key, kind)| (key, *kind))
    }

    /// Forget every component.
    ///
    /// Slot versions advance, so no key issued afterwards equals a key
    /// issued before.
    pub fn clear(&mut self) {
        self.components.clear();
    }

    /// Register a key and build the component in one step
    pub fn create(&mut self, kind: ComponentKind) -> Component {
        Component::new(self.register(kind), kind)
    }
}
