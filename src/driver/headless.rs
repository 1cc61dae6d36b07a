//! In-memory host capabilities for offline rendering and tests.

use std::collections::{BTreeMap, BTreeSet};

use crate::driver::host::{ElementLookup, FrameClock, TickHandle, VisibilitySource, WaveSurface};

/// Frame clock whose ticks are fired by the caller.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    next_id: u64,
    pending: BTreeSet<TickHandle>,
    requested: u64,
    cancelled: u64,
}

impl ManualClock {
    /// Create a clock with no pending ticks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently scheduled ticks.
    pub fn pending(&self) -> Vec<TickHandle> {
        self.pending.iter().copied().collect()
    }

    /// Remove and return the oldest scheduled tick, as the host would when it fires.
    pub fn fire_next(&mut self) -> Option<TickHandle> {
        self.pending.pop_first()
    }

    /// Total ticks ever requested.
    pub fn requested(&self) -> u64 {
        self.requested
    }

    /// Total ticks cancelled while still pending.
    pub fn cancelled(&self) -> u64 {
        self.cancelled
    }
}

impl FrameClock for ManualClock {
    fn request_tick(&mut self) -> TickHandle {
        self.next_id += 1;
        self.requested += 1;
        let handle = TickHandle(self.next_id);
        self.pending.insert(handle);
        handle
    }

    fn cancel_tick(&mut self, handle: TickHandle) {
        if self.pending.remove(&handle) {
            self.cancelled += 1;
        }
    }
}

/// Visibility source that only records observe/disconnect calls.
#[derive(Clone, Copy, Debug, Default)]
pub struct ManualVisibility {
    observing: bool,
    disconnects: u32,
}

impl ManualVisibility {
    /// Create an inactive source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `observe` was called and `disconnect` has not been since.
    pub fn is_observing(&self) -> bool {
        self.observing
    }

    /// Number of `disconnect` calls.
    pub fn disconnects(&self) -> u32 {
        self.disconnects
    }
}

impl VisibilitySource for ManualVisibility {
    fn observe(&mut self) {
        self.observing = true;
    }

    fn disconnect(&mut self) {
        self.observing = false;
        self.disconnects += 1;
    }
}

/// An element holding path data strings in memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemorySurface {
    tag: String,
    paths: Vec<String>,
}

impl MemorySurface {
    /// An `svg` element with `paths` empty path children.
    pub fn svg(paths: usize) -> Self {
        Self::with_tag("svg", paths)
    }

    /// An element of any kind with `paths` empty path children.
    pub fn with_tag(tag: impl Into<String>, paths: usize) -> Self {
        Self {
            tag: tag.into(),
            paths: vec![String::new(); paths],
        }
    }

    /// Current path data of every child.
    pub fn paths(&self) -> &[String] {
        &self.paths
    }
}

impl WaveSurface for MemorySurface {
    fn tag_name(&self) -> &str {
        &self.tag
    }

    fn path_count(&self) -> usize {
        self.paths.len()
    }

    fn set_path_data(&mut self, index: usize, d: &str) {
        if let Some(slot) = self.paths.get_mut(index) {
            d.clone_into(slot);
        }
    }
}

/// Selector-keyed collection of in-memory surfaces.
#[derive(Clone, Debug, Default)]
pub struct SurfaceRegistry {
    surfaces: BTreeMap<String, MemorySurface>,
}

impl SurfaceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `surface` under `selector`.
    pub fn insert(&mut self, selector: impl Into<String>, surface: MemorySurface) {
        self.surfaces.insert(selector.into(), surface);
    }
}

impl ElementLookup<MemorySurface> for SurfaceRegistry {
    fn find(&self, selector: &str) -> Option<MemorySurface> {
        self.surfaces.get(selector).cloned()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/driver/headless.rs"]
mod tests;
