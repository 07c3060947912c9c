//! Registry of named feature flags

use crate::admin::FlagAdmin;
use crate::error::{DuplicateNameError, FeatureResult};
use crate::flag::{BooleanFlag, Flag};
use flagset_log::{debug, warn};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// A named set of feature flags.
///
/// Create one per process and share it behind an [`Arc`]. Lookups take a
/// shared lock on the map only; each flag guards its own state, so the map
/// lock is never held while a flag is read or changed.
///
/// ```
/// use flagset_features::{Flag, FlagSet, RatioFlag};
/// use std::sync::Arc;
///
/// let features = FlagSet::new();
/// let (scream, _) = features.new_flag("scream");
///
/// let surprise = Arc::new(RatioFlag::new("surprise", 0.1));
/// features.add(surprise.clone()).unwrap();
///
/// assert!(!scream.is_enabled());
/// assert!(features.get("surprise").is_some());
/// assert!(features.add(surprise).is_err());
/// ```
#[derive(Debug, Default)]
pub struct FlagSet {
    flags: RwLock<HashMap<String, Arc<dyn Flag>>>,
}

impl FlagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `flag` under its name.
    ///
    /// Fails, leaving the existing entry untouched, if the name is taken.
    pub fn add(&self, flag: Arc<dyn Flag>) -> Result<(), DuplicateNameError> {
        let mut flags = self.flags.write();

        let name = flag.name();
        if flags.contains_key(name) {
            warn!("duplicate feature {:?}", name);
            return Err(DuplicateNameError(name.to_string()));
        }

        debug!("registered feature {:?}", name);
        flags.insert(name.to_string(), flag);
        Ok(())
    }

    /// Create a [`BooleanFlag`] and register it.
    ///
    /// The flag is returned even when registration fails, in which case it
    /// is not part of the set.
    pub fn new_flag(
        &self,
        name: impl Into<String>,
    ) -> (Arc<BooleanFlag>, Result<(), DuplicateNameError>) {
        let flag = Arc::new(BooleanFlag::new(name));
        let result = self.add(flag.clone());
        (flag, result)
    }

    /// Look up a flag by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Flag>> {
        self.flags.read().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.flags.read().contains_key(name)
    }

    /// All flags, sorted by name.
    pub fn flags(&self) -> Vec<Arc<dyn Flag>> {
        let mut flags: Vec<_> = self.flags.read().values().cloned().collect();
        flags.sort_by(|a, b| a.name().cmp(b.name()));
        flags
    }

    /// All flag names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.flags.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.flags.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.read().is_empty()
    }

    /// Admin handler for this set with the default configuration.
    pub fn admin(self: &Arc<Self>) -> FeatureResult<FlagAdmin> {
        FlagAdmin::new(Arc::clone(self))
    }
}
