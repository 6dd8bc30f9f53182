/// Default base URL of the user service inside the cluster.
pub const DEFAULT_USER_SERVICE_URL: &str = "http://user-service.default.svc.cluster.local:8080";
/// Default base URL of the product service inside the cluster.
pub const DEFAULT_PRODUCT_SERVICE_URL: &str =
    "http://product-service.default.svc.cluster.local:8080";
/// Default trace collector endpoint.
pub const DEFAULT_JAEGER_ENDPOINT: &str =
    "http://jaeger-collector.observability.svc.cluster.local:14268/api/traces";
pub const DEFAULT_PORT: u16 = 8080;

pub const USER_SERVICE_URL_VAR: &str = "USER_SERVICE_URL";
pub const PRODUCT_SERVICE_URL_VAR: &str = "PRODUCT_SERVICE_URL";

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Service settings, read from the environment.
///
/// Every value has a hardcoded fallback, so a missing or unparsable variable
/// never stops a service from starting.
#[derive(Debug, Clone)]
pub struct Config {
    /// Name reported by `/health` and used as the log service field
    pub service_name: String,
    /// Listening port (`PORT`)
    pub port: u16,
    /// Base URL of the user service (`USER_SERVICE_URL`)
    pub user_service_url: String,
    /// Base URL of the product service (`PRODUCT_SERVICE_URL`)
    pub product_service_url: String,
    /// Trace collector endpoint (`JAEGER_ENDPOINT`)
    pub jaeger_endpoint: String,
}

impl Config {
    pub fn from_env(service_name: impl Into<String>) -> Self {
        Self::from_lookup(service_name, env_var)
    }

    /// Builds the config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(service_name: impl Into<String>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            service_name: service_name.into(),
            port: var("PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(DEFAULT_PORT),
            user_service_url: var(USER_SERVICE_URL_VAR)
                .unwrap_or_else(|| DEFAULT_USER_SERVICE_URL.to_string()),
            product_service_url: var(PRODUCT_SERVICE_URL_VAR)
                .unwrap_or_else(|| DEFAULT_PRODUCT_SERVICE_URL.to_string()),
            jaeger_endpoint: var("JAEGER_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_JAEGER_ENDPOINT.to_string()),
        }
    }
}

/// Base URL of a peer service as seen by a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceUrl {
    /// Fixed when the client is built.
    Fixed(String),
    /// Read from the process environment on every resolve, with a fallback.
    Env {
        key: &'static str,
        default: &'static str,
    },
}

impl ServiceUrl {
    pub fn user_service() -> Self {
        ServiceUrl::Env {
            key: USER_SERVICE_URL_VAR,
            default: DEFAULT_USER_SERVICE_URL,
        }
    }

    pub fn product_service() -> Self {
        ServiceUrl::Env {
            key: PRODUCT_SERVICE_URL_VAR,
            default: DEFAULT_PRODUCT_SERVICE_URL,
        }
    }

    /// Current base URL, without a trailing slash.
    pub fn resolve(&self) -> String {
        let url = match self {
            ServiceUrl::Fixed(url) => url.clone(),
            ServiceUrl::Env { key, default } => {
                env_var(key).unwrap_or_else(|| default.to_string())
            }
        };
        url.trim_end_matches('/').to_string()
    }
}

impl From<String> for ServiceUrl {
    fn from(url: String) -> Self {
        ServiceUrl::Fixed(url)
    }
}

impl From<&str> for ServiceUrl {
    fn from(url: &str) -> Self {
        ServiceUrl::Fixed(url.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = Config::from_lookup("order-service", lookup(&[]));

        assert_eq!(config.service_name, "order-service");
        assert_eq!(config.port, 8080);
        assert_eq!(config.user_service_url, DEFAULT_USER_SERVICE_URL);
        assert_eq!(config.product_service_url, DEFAULT_PRODUCT_SERVICE_URL);
        assert_eq!(config.jaeger_endpoint, DEFAULT_JAEGER_ENDPOINT);
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = Config::from_lookup(
            "order-service",
            lookup(&[
                ("PORT", "9000"),
                ("USER_SERVICE_URL", "http://localhost:8081"),
                ("PRODUCT_SERVICE_URL", "http://localhost:8082"),
                ("JAEGER_ENDPOINT", "http://localhost:14268/api/traces"),
            ]),
        );

        assert_eq!(config.port, 9000);
        assert_eq!(config.user_service_url, "http://localhost:8081");
        assert_eq!(config.product_service_url, "http://localhost:8082");
        assert_eq!(config.jaeger_endpoint, "http://localhost:14268/api/traces");
    }

    #[test]
    fn test_bad_port_falls_back() {
        let config = Config::from_lookup("user-service", lookup(&[("PORT", "not-a-port")]));
        assert_eq!(config.port, DEFAULT_PORT);

        let config = Config::from_lookup("user-service", lookup(&[("USER_SERVICE_URL", "  ")]));
        assert_eq!(config.user_service_url, DEFAULT_USER_SERVICE_URL);
    }

    #[test]
    fn test_env_service_url_is_read_on_every_resolve() {
        const KEY: &str = "SHOP_MESH_CONFIG_TEST_PEER_URL";
        let url = ServiceUrl::Env {
            key: KEY,
            default: "http://fallback:8080",
        };

        std::env::remove_var(KEY);
        assert_eq!(url.resolve(), "http://fallback:8080");

        std::env::set_var(KEY, "http://localhost:9001/");
        assert_eq!(url.resolve(), "http://localhost:9001");

        std::env::set_var(KEY, "http://localhost:9002");
        assert_eq!(url.resolve(), "http://localhost:9002");

        std::env::set_var(KEY, "");
        assert_eq!(url.resolve(), "http://fallback:8080");
        std::env::remove_var(KEY);
    }

    #[test]
    fn test_fixed_service_url() {
        assert_eq!(ServiceUrl::from("http://users/").resolve(), "http://users");
        assert_eq!(
            ServiceUrl::user_service(),
            ServiceUrl::Env {
                key: "USER_SERVICE_URL",
                default: DEFAULT_USER_SERVICE_URL,
            }
        );
    }
}
