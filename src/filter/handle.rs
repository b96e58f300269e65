//! Publishing rebuilt engines to concurrent readers

use arc_swap::ArcSwap;
use std::sync::Arc;
use tracing::debug;

use super::engine::FilterEngine;

/// Shared slot holding the current engine.
///
/// Readers take a snapshot with [`EngineHandle::load`] and keep using it even
/// if a new engine is published meanwhile. Engines are never mutated in
/// place, so a reader never sees a half-built filter list.
#[derive(Debug)]
pub struct EngineHandle {
    current: ArcSwap<FilterEngine>,
}

impl EngineHandle {
    pub fn new(engine: FilterEngine) -> Self {
        Self {
            current: ArcSwap::from_pointee(engine),
        }
    }

    /// Snapshot of the engine in effect right now
    pub fn load(&self) -> Arc<FilterEngine> {
        self.current.load_full()
    }

    /// Publish a freshly built engine, returning the previous one
    pub fn replace(&self, engine: FilterEngine) -> Arc<FilterEngine> {
        debug!("Publishing {:?} filter engine", engine.mode());
        self.current.swap(Arc::new(engine))
    }
}
