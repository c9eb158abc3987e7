//! Host-bundle model injected into the desktop runtime.

use std::rc::Rc;

use crate::{CompanionConfig, CompanionService, NoopCompanionService};

/// Stable host strategy selected for the current build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser build talking to the companion over `fetch`.
    Browser,
    /// Non-browser build without a network transport.
    Offline,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Offline => "offline",
        }
    }
}

/// Runtime-selected host service bundle.
///
/// Environment-specific selection happens before this bundle crosses into `desktop_runtime`, so
/// the runtime never names a concrete adapter.
#[derive(Clone)]
pub struct HostServices {
    /// Companion backend service.
    pub companion: Rc<dyn CompanionService>,
    /// Configuration the companion service was built from.
    pub companion_config: CompanionConfig,
    /// Strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Bundles an explicit companion service.
    pub fn new(
        companion: Rc<dyn CompanionService>,
        companion_config: CompanionConfig,
        host_strategy: HostStrategy,
    ) -> Self {
        Self {
            companion,
            companion_config,
            host_strategy,
        }
    }

    /// Bundle whose companion reports every call as unavailable.
    pub fn offline() -> Self {
        Self::new(
            Rc::new(NoopCompanionService),
            CompanionConfig::default(),
            HostStrategy::Offline,
        )
    }
}

impl std::fmt::Debug for HostServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostServices")
            .field("companion_config", &self.companion_config)
            .field("host_strategy", &self.host_strategy)
            .finish_non_exhaustive()
    }
}
