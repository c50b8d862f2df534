//! Debug overlay renderer.
//!
//! Draws a wireframe around the oriented bounding box of every cullable
//! component in the scene, plus an optional facing arrow on the selected
//! object. Meshes are cached per component key and reused across frames;
//! entries whose component was not drawn in a frame are evicted and their
//! GPU meshes released.
//!
//! # Frame protocol
//!
//! ```text
//! begin(camera)          clear depth (appear_on_top), open batch
//! render(&roots)         walk, submit, evict
//! end()                  close batch
//! ```
//!
//! `render_object` may be used instead of `render` to feed objects one at a
//! time; the collected instances are then submitted and evicted by `end()`.

use std::sync::{Arc, Mutex, MutexGuard};
use rustc_hash::{FxHashMap, FxHashSet};
use glam::Vec3;
use crate::camera::Camera;
use crate::error::Result;
use crate::graphics_device::{BatchItem, Color, GraphicsDevice};
use crate::scene::{Component, ComponentKey, ComponentKind, GameObject, GameObjectId};
use crate::{engine_debug, engine_err, engine_error, engine_info};
use super::debug_geometry::{ArrowParams, DebugGeometryFactory, DebugModelInstance};

const LOG_SOURCE: &str = "galaxy3d::DebugRenderer";

// ===== CONFIG =====

/// Overlay settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebugRendererConfig {
    /// Draw anything at all
    pub enabled: bool,
    /// Clear the depth buffer before drawing so the overlay is never occluded
    pub appear_on_top: bool,
    /// Draw the facing arrow of the selected object
    pub show_facing_arrow: bool,
    /// Facing arrow shape
    pub arrow: ArrowParams,
}

impl Default for DebugRendererConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            appear_on_top: true,
            show_facing_arrow: false,
            arrow: ArrowParams::default(),
        }
    }
}

/// Wireframe color of a component category
pub fn category_color(kind: ComponentKind) -> Color {
    match kind {
        ComponentKind::Model => Color::RED,
        ComponentKind::Terrain => Color::GREEN,
        ComponentKind::Water => Color::NAVY,
        ComponentKind::Other => Color::WHITE,
    }
}

/// Which cache an entry of the pending list lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum CacheSlot {
    Box,
    Arrow,
}

// ===== DEBUG RENDERER =====

pub struct DebugRenderer {
    device: Arc<Mutex<dyn GraphicsDevice>>,
    config: DebugRendererConfig,
    selected: Option<GameObjectId>,
    box_cache: FxHashMap<ComponentKey, DebugModelInstance>,
    arrow_cache: FxHashMap<ComponentKey, DebugModelInstance>,
    /// Instances collected for the current frame, in draw order
    pending: Vec<(CacheSlot, ComponentKey)>,
    /// `pending` holds entries not yet submitted
    unflushed: bool,
    /// A batch is open on the device
    frame_open: bool,
    last_draw_count: usize,
}

impl DebugRenderer {
    /// Overlay with default settings (disabled, appear on top, no arrow)
    pub fn new(device: Arc<Mutex<dyn GraphicsDevice>>) -> Self {
        Self::with_config(device, DebugRendererConfig::default())
    }

    pub fn with_config(device: Arc<Mutex<dyn GraphicsDevice>>, config: DebugRendererConfig) -> Self {
        Self {
            device,
            config,
            selected: None,
            box_cache: FxHashMap::default(),
            arrow_cache: FxHashMap::default(),
            pending: Vec::new(),
            unflushed: false,
            frame_open: false,
            last_draw_count: 0,
        }
    }

    // ===== SETTINGS =====

    /// Enable or disable the overlay. The caches survive while disabled.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.config.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    pub fn set_appear_on_top(&mut self, appear_on_top: bool) {
        self.config.appear_on_top = appear_on_top;
    }

    pub fn is_appear_on_top(&self) -> bool {
        self.config.appear_on_top
    }

    pub fn set_show_facing_arrow(&mut self, show: bool) {
        self.config.show_facing_arrow = show;
    }

    pub fn is_show_facing_arrow(&self) -> bool {
        self.config.show_facing_arrow
    }

    /// Object that receives the facing arrow
    pub fn set_selected(&mut self, selected: Option<GameObjectId>) {
        self.selected = selected;
    }

    pub fn selected(&self) -> Option<GameObjectId> {
        self.selected
    }

    pub fn config(&self) -> &DebugRendererConfig {
        &self.config
    }

    // ===== QUERIES =====

    pub fn box_cache_len(&self) -> usize {
        self.box_cache.len()
    }

    pub fn arrow_cache_len(&self) -> usize {
        self.arrow_cache.len()
    }

    /// Number of instances submitted by the last flush
    pub fn last_draw_count(&self) -> usize {
        self.last_draw_count
    }

    pub fn has_box(&self, key: ComponentKey) -> bool {
        self.box_cache.contains_key(&key)
    }

    pub fn has_arrow(&self, key: ComponentKey) -> bool {
        self.arrow_cache.contains_key(&key)
    }

    // ===== FRAME =====

    /// Start a frame. Clears depth first when `appear_on_top` is set.
    pub fn begin(&mut self, camera: &Camera) -> Result<()> {
        if !self.config.enabled {
            return Ok(());
        }

        self.pending.clear();
        self.unflushed = false;

        let mut device = lock_device(&self.device)?;
        if self.config.appear_on_top {
            device.clear_depth_buffer()?;
        }
        device.begin_batch(camera)?;
        self.frame_open = true;
        Ok(())
    }

    /// Draw a list of root objects, then evict every cache entry not drawn.
    pub fn render(&mut self, roots: &[GameObject]) -> Result<()> {
        if !self.config.enabled || !self.frame_open {
            return Ok(());
        }

        self.pending.clear();
        let shared = Arc::clone(&self.device);
        let mut device = lock_device(&shared)?;
        for root in roots {
            self.collect(&mut *device, root);
        }
        self.flush(&mut *device)
    }

    /// Collect one object subtree into the current frame.
    ///
    /// Submission and eviction happen in `end()`.
    pub fn render_object(&mut self, object: &GameObject) -> Result<()> {
        if !self.config.enabled || !self.frame_open {
            return Ok(());
        }

        let shared = Arc::clone(&self.device);
        let mut device = lock_device(&shared)?;
        self.collect(&mut *device, object);
        self.unflushed = true;
        Ok(())
    }

    /// Close the frame
    pub fn end(&mut self) -> Result<()> {
        if !self.config.enabled || !self.frame_open {
            return Ok(());
        }

        let shared = Arc::clone(&self.device);
        let mut device = lock_device(&shared)?;
        if self.unflushed {
            self.flush(&mut *device)?;
        }
        self.frame_open = false;
        device.end_batch()
    }

    /// Release every cached mesh. Safe to call more than once.
    ///
    /// A frame still open is closed on the device without drawing what it
    /// collected.
    pub fn dispose(&mut self) {
        if std::mem::take(&mut self.frame_open) {
            if let Err(e) = lock_device(&self.device).and_then(|mut device| device.end_batch()) {
                engine_error!(LOG_SOURCE, "Failed to close the open batch on dispose: {}", e);
            }
        }
        let released = self.box_cache.len() + self.arrow_cache.len();
        self.pending.clear();
        self.unflushed = false;
        self.box_cache.clear();
        self.arrow_cache.clear();
        if released > 0 {
            engine_info!(LOG_SOURCE, "Disposed {} debug meshes", released);
        }
    }

    // ===== INTERNALS =====

    /// Depth-first walk over active objects, building missing meshes.
    fn collect(&mut self, device: &mut dyn GraphicsDevice, object: &GameObject) {
        if !object.is_active() {
            return;
        }

        let arrow_wanted = self.config.show_facing_arrow && self.selected == Some(object.id());

        for component in object.components() {
            let Some(cullable) = component.cullable() else {
                continue;
            };
            let Some(obb) = cullable.oriented_bounding_box() else {
                continue;
            };
            let key = component.key();

            if !self.box_cache.contains_key(&key) {
                let name = format!("debug_box_{:?}", key);
                match DebugGeometryFactory::build_box(device, &name, &obb.local_template(), category_color(component.kind())) {
                    Ok(instance) => {
                        engine_debug!(LOG_SOURCE, "Cached box for component {:?}", key);
                        self.box_cache.insert(key, instance);
                    }
                    Err(e) => {
                        engine_error!(LOG_SOURCE, "Failed to build box for component {:?}: {}", key, e);
                        continue;
                    }
                }
            }
            if let Some(instance) = self.box_cache.get_mut(&key) {
                instance.set_transform(*obb.transform());
                self.pending.push((CacheSlot::Box, key));
            }

            if arrow_wanted {
                self.collect_arrow(device, object, component, cullable.dimensions());
            }
        }

        for child in object.children() {
            self.collect(device, child);
        }
    }

    fn collect_arrow(
        &mut self,
        device: &mut dyn GraphicsDevice,
        object: &GameObject,
        component: &Component,
        dimensions: Vec3,
    ) {
        let key = component.key();
        if !self.arrow_cache.contains_key(&key) {
            // Built in object space; the instance transform places it.
            let tip = Vec3::Z * dimensions.length();
            let name = format!("debug_arrow_{:?}", key);
            match DebugGeometryFactory::build_arrow(device, &name, Vec3::ZERO, tip, &self.config.arrow, Color::MAROON) {
                Ok(instance) => {
                    engine_debug!(LOG_SOURCE, "Cached facing arrow for component {:?}", key);
                    self.arrow_cache.insert(key, instance);
                }
                Err(e) => {
                    engine_error!(LOG_SOURCE, "Failed to build facing arrow for component {:?}: {}", key, e);
                    return;
                }
            }
        }
        if let Some(instance) = self.arrow_cache.get_mut(&key) {
            instance.set_transform(*object.transform());
            self.pending.push((CacheSlot::Arrow, key));
        }
    }

    /// Submit the pending instances, then evict everything else.
    fn flush(&mut self, device: &mut dyn GraphicsDevice) -> Result<()> {
        let items: Vec<BatchItem<'_>> = self
            .pending
            .iter()
            .filter_map(|(slot, key)| match slot {
                CacheSlot::Box => self.box_cache.get(key),
                CacheSlot::Arrow => self.arrow_cache.get(key),
            })
            .map(DebugModelInstance::batch_item)
            .collect();

        self.last_draw_count = items.len();
        if !items.is_empty() {
            device.render_batch(&items)?;
        }
        drop(items);

        self.evict();
        self.unflushed = false;
        Ok(())
    }

    /// Drop every cache entry missing from `pending`, across both caches.
    fn evict(&mut self) {
        let mut drawn: FxHashSet<(CacheSlot, ComponentKey)> = FxHashSet::default();
        drawn.extend(self.pending.iter().copied());

        let mut evicted = 0usize;
        for (slot, cache) in [
            (CacheSlot::Box, &mut self.box_cache),
            (CacheSlot::Arrow, &mut self.arrow_cache),
        ] {
            cache.retain(|key, _| {
                let keep = drawn.contains(&(slot, *key));
                if !keep {
                    evicted += 1;
                }
                keep
            });
        }

        if evicted > 0 {
            engine_debug!(LOG_SOURCE, "Evicted {} stale debug meshes", evicted);
        }
    }
}

impl Drop for DebugRenderer {
    fn drop(&mut self) {
        self.dispose();
    }
}

fn lock_device(device: &Arc<Mutex<dyn GraphicsDevice>>) -> Result<MutexGuard<'_, dyn GraphicsDevice + 'static>> {
    device
        .lock()
        .map_err(|_| engine_err!(LOG_SOURCE, "Graphics device lock poisoned"))
}

#[cfg(test)]
#[path = "debug_renderer_tests.rs"]
mod tests;
