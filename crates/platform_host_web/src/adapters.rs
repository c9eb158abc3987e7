use std::rc::Rc;

use platform_host::{
    CompanionClient, CompanionConfig, CompanionError, CompanionFuture, CompanionService,
    DesktopIcon, HostServices, HostStrategy, NoopCompanionService, StoreItem,
};

use crate::FetchTransport;

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "offline-host")]
    {
        HostStrategy::Offline
    }

    #[cfg(not(feature = "offline-host"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Adapter enum that erases the concrete companion backend behind [`CompanionService`].
#[derive(Debug, Clone)]
pub enum CompanionServiceAdapter {
    /// HTTP client over the browser `fetch` transport.
    Browser(CompanionClient<FetchTransport>),
    /// Offline fallback; every call reports the companion as unavailable.
    Offline(NoopCompanionService),
}

impl CompanionService for CompanionServiceAdapter {
    fn fetch_icons<'a>(&'a self) -> CompanionFuture<'a, Result<Vec<DesktopIcon>, CompanionError>> {
        match self {
            Self::Browser(service) => service.fetch_icons(),
            Self::Offline(service) => service.fetch_icons(),
        }
    }

    fn launch_app<'a>(
        &'a self,
        app_id: &'a str,
    ) -> CompanionFuture<'a, Result<(), CompanionError>> {
        match self {
            Self::Browser(service) => service.launch_app(app_id),
            Self::Offline(service) => service.launch_app(app_id),
        }
    }

    fn send_chat<'a>(
        &'a self,
        message: &'a str,
    ) -> CompanionFuture<'a, Result<String, CompanionError>> {
        match self {
            Self::Browser(service) => service.send_chat(message),
            Self::Offline(service) => service.send_chat(message),
        }
    }

    fn fetch_store_items<'a>(
        &'a self,
    ) -> CompanionFuture<'a, Result<Vec<StoreItem>, CompanionError>> {
        match self {
            Self::Browser(service) => service.fetch_store_items(),
            Self::Offline(service) => service.fetch_store_items(),
        }
    }
}

/// Builds the companion adapter for the selected host strategy.
pub fn companion_service(config: CompanionConfig) -> CompanionServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => {
            CompanionServiceAdapter::Browser(CompanionClient::new(config, FetchTransport))
        }
        HostStrategy::Offline => CompanionServiceAdapter::Offline(NoopCompanionService),
    }
}

/// Builds the host service bundle for the selected strategy from an explicit configuration.
pub fn build_host_services_with(config: CompanionConfig) -> HostServices {
    HostServices::new(
        Rc::new(companion_service(config.clone())),
        config,
        selected_host_strategy(),
    )
}

/// Builds the host service bundle for the selected strategy using the build-time companion URL.
pub fn build_host_services() -> HostServices {
    build_host_services_with(CompanionConfig::from_build_env())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_build_selects_browser_strategy() {
        if cfg!(feature = "offline-host") {
            assert_eq!(selected_host_strategy(), HostStrategy::Offline);
            assert_eq!(host_strategy_name(), "offline");
        } else {
            assert_eq!(selected_host_strategy(), HostStrategy::Browser);
            assert_eq!(host_strategy_name(), "browser");
        }
    }

    #[test]
    fn host_services_carry_the_supplied_config() {
        let services = build_host_services_with(CompanionConfig::new("http://10.0.0.2:9000/"));
        assert_eq!(services.companion_config.base_url(), "http://10.0.0.2:9000");
        assert_eq!(services.host_strategy, selected_host_strategy());
    }

    #[test]
    fn browser_adapter_keeps_the_config() {
        let adapter = companion_service(CompanionConfig::new("http://companion:1"));
        match adapter {
            CompanionServiceAdapter::Browser(client) => {
                assert_eq!(client.config().base_url(), "http://companion:1");
            }
            CompanionServiceAdapter::Offline(_) => assert!(cfg!(feature = "offline-host")),
        }
    }
}
