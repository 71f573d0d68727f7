//! Names of the lifecycle events published alongside highlighting.
//!
//! The table is built once on first use and never mutated afterwards. It has no
//! interaction with the highlight pipeline.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Lifecycle events a host publishes to its clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    ProjectAdded,
    ProjectChanged,
    ProjectRemoved,
    Error,
    Diagnostic,
    ProjectDiagnosticStatus,
    PackageRestoreStarted,
    PackageRestoreFinished,
    UnresolvedDependencies,
    ProjectConfiguration,
}

const ALL: &[EventType] = &[
    EventType::ProjectAdded,
    EventType::ProjectChanged,
    EventType::ProjectRemoved,
    EventType::Error,
    EventType::Diagnostic,
    EventType::ProjectDiagnosticStatus,
    EventType::PackageRestoreStarted,
    EventType::PackageRestoreFinished,
    EventType::UnresolvedDependencies,
    EventType::ProjectConfiguration,
];

static BY_NAME: LazyLock<HashMap<&'static str, EventType>> =
    LazyLock::new(|| ALL.iter().map(|event| (event.name(), *event)).collect());

impl EventType {
    /// Wire name of the event.
    pub fn name(self) -> &'static str {
        match self {
            EventType::ProjectAdded => "ProjectAdded",
            EventType::ProjectChanged => "ProjectChanged",
            EventType::ProjectRemoved => "ProjectRemoved",
            EventType::Error => "Error",
            EventType::Diagnostic => "Diagnostic",
            EventType::ProjectDiagnosticStatus => "ProjectDiagnosticStatus",
            EventType::PackageRestoreStarted => "PackageRestoreStarted",
            EventType::PackageRestoreFinished => "PackageRestoreFinished",
            EventType::UnresolvedDependencies => "UnresolvedDependencies",
            EventType::ProjectConfiguration => "ProjectConfiguration",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        BY_NAME.get(name).copied()
    }

    pub fn all() -> &'static [EventType] {
        ALL
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_event_resolves_by_name() {
        for event in EventType::all() {
            assert_eq!(EventType::from_name(event.name()), Some(*event));
        }
        assert_eq!(BY_NAME.len(), ALL.len(), "event names must be unique");
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(EventType::from_name("projectadded"), None);
        assert_eq!(EventType::from_name(""), None);
    }

    #[test]
    fn test_display_uses_wire_name() {
        assert_eq!(
            EventType::PackageRestoreFinished.to_string(),
            "PackageRestoreFinished"
        );
    }
}
