//! Mapper registry: the ordered, version-filtered list of mappers.

use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;
use red_ir::RobotVersion;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::mappers::builtin_mappers;
use crate::ElementMapper;

/// Mappers applicable to one version, in asking order.
pub type MapperList = Arc<[&'static dyn ElementMapper]>;

/// Every built-in mapper plus a per-version cache of the applicable ones.
///
/// Filtering is done once per version; parses share the cached list.
pub struct MapperRegistry {
    mappers: Vec<&'static dyn ElementMapper>,
    by_version: RwLock<FxHashMap<RobotVersion, MapperList>>,
}

impl MapperRegistry {
    fn new() -> Self {
        MapperRegistry {
            mappers: builtin_mappers(),
            by_version: RwLock::new(FxHashMap::default()),
        }
    }

    /// The process-wide registry.
    pub fn global() -> &'static MapperRegistry {
        static REGISTRY: OnceLock<MapperRegistry> = OnceLock::new();
        REGISTRY.get_or_init(MapperRegistry::new)
    }

    /// Every mapper regardless of version.
    pub fn all(&self) -> &[&'static dyn ElementMapper] {
        &self.mappers
    }

    /// Mappers applicable to `version`, in asking order.
    pub fn mappers_for(&self, version: RobotVersion) -> MapperList {
        if let Some(list) = self.by_version.read().get(&version) {
            return Arc::clone(list);
        }
        let list: MapperList = self
            .mappers
            .iter()
            .copied()
            .filter(|mapper| mapper.is_applicable_for(version))
            .collect();
        debug!(%version, count = list.len(), "mappers filtered");
        self.by_version
            .write()
            .entry(version)
            .or_insert(list)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.mappers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappers.is_empty()
    }
}
