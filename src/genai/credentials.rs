//! API key resolution and storage.
//!
//! Priority: process environment first, then the OS keychain. A keychain
//! hit is loaded into the environment so later lookups are cheap. No key
//! anywhere is a valid state — the client serves demo output.

/// Environment variable holding the Gemini API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

const KEYRING_SERVICE: &str = "nexus-gen";
const KEYRING_USER: &str = "gemini";

/// Resolve the Gemini API key, if one is configured.
pub fn resolve_api_key() -> Option<String> {
    if let Ok(key) = std::env::var(API_KEY_ENV) {
        if !key.is_empty() {
            return Some(key);
        }
    }

    if let Ok(entry) = keyring::Entry::new(KEYRING_SERVICE, KEYRING_USER) {
        if let Ok(key) = entry.get_password() {
            if !key.is_empty() {
                // Load into env so the current session picks it up immediately
                std::env::set_var(API_KEY_ENV, &key);
                log::info!("[SETTINGS] Loaded Gemini key from OS keychain");
                return Some(key);
            }
        }
    }

    None
}

/// Whether a credential is available anywhere.
pub fn is_configured() -> bool {
    resolve_api_key().is_some()
}

/// Save an API key to the OS keychain and the current process environment.
pub fn save_api_key(api_key: &str) -> Result<(), keyring::Error> {
    let entry = keyring::Entry::new(KEYRING_SERVICE, KEYRING_USER)?;
    entry.set_password(api_key)?;

    // Also set as env var so the current session picks it up immediately
    std::env::set_var(API_KEY_ENV, api_key);

    log::info!("[SETTINGS] API key saved to keychain");
    Ok(())
}
