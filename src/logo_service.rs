use tracing::log;

use crate::{db::Db, models::StoreKey, CONFIG};

/// Placeholder shown for any team without a logo of its own.
pub fn default_logo() -> &'static str {
    r#"data:image/svg+xml,<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100"><circle cx="50" cy="50" r="40" fill="%23e2e8f0"/><text x="50" y="60" font-size="30" fill="%236b7280" text-anchor="middle" font-family="Arial">?</text></svg>"#
}

pub struct LogoService;

impl LogoService {
    /// Main site logo: the stored override if the admin uploaded one,
    /// otherwise the bundled asset. Resolved once at startup.
    pub fn resolve() -> String {
        let saved = LogoService::get_db().read_raw(&StoreKey::Logo);
        let saved = saved.trim();
        if saved.is_empty() {
            log::info!("[LOGO] No stored logo, using {}", CONFIG.main_logo_path);
            CONFIG.main_logo_path.clone()
        } else {
            log::info!("[LOGO] Using stored logo ({} bytes)", saved.len());
            saved.to_string()
        }
    }

    fn get_db() -> Db<StoreKey, String> {
        Db::new("site")
    }
}
