//! Project state shared by editor tools.
//!
//! A `ProjectContext` holds what is currently loaded: the project reference,
//! the scene roots, the terrains and the component registry. Tools share it
//! as `Arc<RwLock<ProjectContext>>`.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use rustc_hash::FxHashMap;
use crate::scene::{ComponentKey, ComponentRegistry, GameObject, GameObjectId};
use crate::terrain::Terrain;
use crate::engine_info;

/// Name and location of a project on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRef {
    pub name: String,
    pub path: PathBuf,
}

impl ProjectRef {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self { name: name.into(), path: path.into() }
    }
}

#[derive(Debug, Default)]
pub struct ProjectContext {
    project_ref: Option<ProjectRef>,
    entities: Vec<GameObject>,
    terrains: Vec<Terrain>,
    registry: ComponentRegistry,
    next_available_id: AtomicU64,
}

impl ProjectContext {
    /// Empty, unnamed project
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ref(project_ref: ProjectRef) -> Self {
        Self {
            project_ref: Some(project_ref),
            ..Self::default()
        }
    }

    // ===== REF =====

    pub fn project_ref(&self) -> Option<&ProjectRef> {
        self.project_ref.as_ref()
    }

    pub fn set_project_ref(&mut self, project_ref: Option<ProjectRef>) {
        self.project_ref = project_ref;
    }

    // ===== IDS =====

    /// Hand out a fresh ID. IDs are never reused within a project.
    pub fn obtain_available_id(&self) -> u64 {
        self.next_available_id.fetch_add(1, Ordering::Relaxed)
    }

    /// The ID the next `obtain_available_id` call will return
    pub fn next_available_id(&self) -> u64 {
        self.next_available_id.load(Ordering::Relaxed)
    }

    /// New game object carrying a fresh ID
    pub fn create_game_object(&self, name: impl Into<String>) -> GameObject {
        GameObject::new(GameObjectId(self.obtain_available_id()), name)
    }

    // ===== ENTITIES =====

    /// Scene roots
    pub fn entities(&self) -> &[GameObject] {
        &self.entities
    }

    pub fn entities_mut(&mut self) -> &mut Vec<GameObject> {
        &mut self.entities
    }

    pub fn add_entity(&mut self, entity: GameObject) {
        self.entities.push(entity);
    }

    /// Search every root subtree
    pub fn find_entity(&self, id: GameObjectId) -> Option<&GameObject> {
        self.entities.iter().find_map(|root| root.find(id))
    }

    // ===== TERRAINS =====

    pub fn terrains(&self) -> &[Terrain] {
        &self.terrains
    }

    pub fn terrains_mut(&mut self) -> &mut [Terrain] {
        &mut self.terrains
    }

    /// Returns the index of the new terrain
    pub fn add_terrain(&mut self, terrain: Terrain) -> usize {
        self.terrains.push(terrain);
        self.terrains.len() - 1
    }

    // ===== COMPONENTS =====

    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ComponentRegistry {
        &mut self.registry
    }

    // ===== LIFECYCLE =====

    /// Replace this project's state with a copy of `other`'s.
    ///
    /// Copied components are re-registered here, so their keys come from
    /// this project's registry and never collide with keys it issued before.
    pub fn copy_from(&mut self, other: &ProjectContext) {
        self.project_ref = other.project_ref.clone();
        self.terrains = other.terrains.clone();
        self.next_available_id = AtomicU64::new(other.next_available_id());

        self.registry.clear();
        let mut rekeyed: FxHashMap<ComponentKey, ComponentKey> = FxHashMap::default();
        for (key, kind) in other.registry.iter() {
            rekeyed.insert(key, self.registry.register(kind));
        }
        self.entities = other.entities.clone();
        for entity in &mut self.entities {
            rekey_components(&mut self.registry, &mut rekeyed, entity);
        }
    }

    /// Drop the loaded scene and terrains. The project reference and the ID
    /// counter survive so IDs stay unique if the project is reloaded.
    pub fn dispose(&mut self) {
        if self.entities.is_empty() && self.terrains.is_empty() && self.registry.is_empty() {
            return;
        }
        engine_info!(
            "galaxy3d::ProjectContext",
            "Disposing project {:?}: {} entities, {} terrains",
            self.project_ref.as_ref().map(|r| r.name.as_str()),
            self.entities.len(),
            self.terrains.len()
        );
        self.entities.clear();
        self.terrains.clear();
        self.registry.clear();
    }
}

fn rekey_components(
    registry: &mut ComponentRegistry,
    rekeyed: &mut FxHashMap<ComponentKey, ComponentKey>,
    object: &mut GameObject,
) {
    for component in object.components_mut() {
        let key = *rekeyed
            .entry(component.key())
            .or_insert_with(|| registry.register(component.kind()));
        component.set_key(key);
    }
    for child in object.children_mut() {
        rekey_components(registry, rekeyed, child);
    }
}

#[cfg(test)]
#[path = "project_context_tests.rs"]
mod tests;
