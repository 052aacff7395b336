use lazy_static::lazy_static;
use web_sys::window;

const DEFAULT_BACKEND_URL: &str = "https://yt-metadata-extractor.onrender.com";

lazy_static! {
    pub static ref BACKEND_URL: String = get_backend_url();
}

pub fn get_env_var(key: &str) -> Option<String> {
    let window = window()?;

    // Get the ENV_CONFIG object
    let env_config = js_sys::Reflect::get(&window, &"ENV_CONFIG".into()).ok()?;

    if env_config.is_undefined() {
        log::warn!("ENV_CONFIG is undefined - using built-in defaults");
        return None;
    }

    let value = js_sys::Reflect::get(&env_config, &key.into()).ok()?;

    if !value.is_undefined() {
        value.as_string()
    } else {
        log::warn!("Environment variable '{}' is undefined", key);
        None
    }
}

pub fn get_backend_url() -> String {
    normalize_base_url(get_env_var("BACKEND_URL").as_deref().unwrap_or(DEFAULT_BACKEND_URL))
}

pub fn get_app_name() -> String {
    get_env_var("APP_NAME").unwrap_or_else(|| "YouTube Metadata Extractor".to_string())
}

pub fn is_debug_mode() -> bool {
    parse_flag(get_env_var("DEBUG_MODE").as_deref())
}

// Endpoint paths are appended with a leading slash.
fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn parse_flag(value: Option<&str>) -> bool {
    match value.map(|v| v.trim().to_ascii_lowercase()) {
        Some(v) => v == "true" || v == "1",
        None => false,
    }
}
