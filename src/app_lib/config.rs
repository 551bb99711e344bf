//! API endpoint configuration. The base URL is baked in at build time from
//! `MEDICHECK_API_BASE_URL` and may be overridden at runtime through
//! `window.MEDICHECK_CONFIG.api_base_url`, so a static bundle can be pointed
//! at another deployment without rebuilding. Values here are public; never
//! put secrets in the config object.

const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Resolved frontend configuration.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl AppConfig {
    /// Resolves the configuration: runtime override first, then the
    /// build-time value, then the local development default.
    pub fn load() -> Self {
        Self {
            api_base_url: resolve(
                window_override("api_base_url"),
                option_env!("MEDICHECK_API_BASE_URL"),
            ),
        }
    }
}

fn resolve(override_value: Option<String>, baked: Option<&str>) -> String {
    override_value
        .or_else(|| baked.and_then(sanitize))
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

/// Reads a key from `window.MEDICHECK_CONFIG`, discarding blank values.
#[cfg(target_arch = "wasm32")]
fn window_override(key: &str) -> Option<String> {
    use js_sys::Reflect;
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("MEDICHECK_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let value = Reflect::get(&config, &JsValue::from_str(key))
        .ok()?
        .as_string()?;
    sanitize(&value)
}

#[cfg(not(target_arch = "wasm32"))]
fn window_override(_key: &str) -> Option<String> {
    None
}

/// Trims whitespace and treats blank strings as unset.
fn sanitize(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_API_BASE_URL, resolve, sanitize};

    #[test]
    fn sanitize_discards_blank_values() {
        assert_eq!(sanitize(""), None);
        assert_eq!(sanitize("   "), None);
        assert_eq!(
            sanitize(" https://api.medicheck.example "),
            Some("https://api.medicheck.example".to_string())
        );
    }

    #[test]
    fn resolve_prefers_the_runtime_override() {
        let resolved = resolve(
            Some("https://api.override".to_string()),
            Some("https://api.baked"),
        );
        assert_eq!(resolved, "https://api.override");
    }

    #[test]
    fn resolve_uses_the_baked_value_without_an_override() {
        assert_eq!(
            resolve(None, Some(" https://api.baked ")),
            "https://api.baked"
        );
    }

    #[test]
    fn resolve_defaults_for_local_development() {
        assert_eq!(resolve(None, None), DEFAULT_API_BASE_URL);
        assert_eq!(resolve(None, Some("   ")), DEFAULT_API_BASE_URL);
    }
}
