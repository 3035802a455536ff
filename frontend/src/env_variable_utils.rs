use crate::config::AppConfig;
use lazy_static::lazy_static;
use wasm_bindgen::JsValue;
use web_sys::window;

lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_lookup(get_env_var);
}

/// Reads `window.ENV_CONFIG[key]`, populated by `env-config.js` at deploy time.
pub fn get_env_var(key: &str) -> Option<String> {
    let window = window()?;

    // Get the ENV_CONFIG object
    let env_config = js_sys::Reflect::get(&window, &JsValue::from_str("ENV_CONFIG")).ok()?;

    if env_config.is_undefined() {
        log::warn!("ENV_CONFIG is undefined - environment variables not loaded");
        return None;
    }

    let value = js_sys::Reflect::get(&env_config, &JsValue::from_str(key)).ok()?;

    if !value.is_undefined() {
        value.as_string()
    } else {
        log::debug!("Environment variable '{}' is undefined", key);
        None
    }
}
