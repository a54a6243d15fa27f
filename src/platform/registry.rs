//! Lookup table from host identity to shipped executable.

use super::{Availability, ExecutableDescriptor, PlatformKey, Target};

/// A single registry row.
#[derive(Debug, Clone, PartialEq)]
pub enum RegistryEntry {
    /// A binary is shipped for this key.
    Available {
        key: PlatformKey,
        descriptor: ExecutableDescriptor,
    },
    /// The key is known but no binary exists for it yet.
    Planned { key: PlatformKey, reason: String },
}

impl RegistryEntry {
    pub fn key(&self) -> &PlatformKey {
        match self {
            RegistryEntry::Available { key, .. } | RegistryEntry::Planned { key, .. } => key,
        }
    }
}

impl From<Target> for RegistryEntry {
    fn from(target: Target) -> Self {
        match target.availability() {
            Availability::Available => RegistryEntry::Available {
                key: target.key(),
                descriptor: target.descriptor(),
            },
            Availability::Planned { reason } => RegistryEntry::Planned {
                key: target.key(),
                reason: reason.to_string(),
            },
        }
    }
}

/// Static mapping from [`PlatformKey`] to [`ExecutableDescriptor`].
///
/// Missing and planned keys are a normal state of the registry; deciding
/// that a host is unsupported is the launcher's job.
#[derive(Debug, Clone, PartialEq)]
pub struct Registry {
    entries: Vec<RegistryEntry>,
}

impl Registry {
    /// The registry of every known [`Target`].
    pub fn builtin() -> Self {
        Self::from_entries(Target::ALL.into_iter().map(RegistryEntry::from))
    }

    /// Build a registry from explicit entries. Later duplicates of a key are ignored.
    pub fn from_entries(entries: impl IntoIterator<Item = RegistryEntry>) -> Self {
        let mut unique: Vec<RegistryEntry> = Vec::new();
        for entry in entries {
            if unique.iter().all(|existing| existing.key() != entry.key()) {
                unique.push(entry);
            }
        }
        Self { entries: unique }
    }

    /// Descriptor for `key`, or `None` if no binary is shipped for it.
    pub fn lookup(&self, key: &PlatformKey) -> Option<&ExecutableDescriptor> {
        self.entries.iter().find_map(|entry| match entry {
            RegistryEntry::Available {
                key: entry_key,
                descriptor,
            } if entry_key == key => Some(descriptor),
            _ => None,
        })
    }

    /// Keys with a shipped binary, in registry order.
    pub fn supported_keys(&self) -> Vec<PlatformKey> {
        self.entries
            .iter()
            .filter_map(|entry| match entry {
                RegistryEntry::Available { key, .. } => Some(key.clone()),
                RegistryEntry::Planned { .. } => None,
            })
            .collect()
    }

    /// Keys that are known but not built yet, in registry order.
    pub fn planned_keys(&self) -> Vec<PlatformKey> {
        self.entries
            .iter()
            .filter_map(|entry| match entry {
                RegistryEntry::Planned { key, .. } => Some(key.clone()),
                RegistryEntry::Available { .. } => None,
            })
            .collect()
    }

    pub fn is_planned(&self, key: &PlatformKey) -> bool {
        self.entries.iter().any(
            |entry| matches!(entry, RegistryEntry::Planned { key: planned, .. } if planned == key),
        )
    }

    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }
}
