/// Blocking browser prompts used by the list: confirm before delete,
/// alert on a failed edit or delete.
pub trait Dialogs {
    fn confirm(&self, message: &str) -> bool;

    fn alert(&self, message: &str);
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserDialogs;

impl Dialogs for BrowserDialogs {
    fn confirm(&self, message: &str) -> bool {
        match web_sys::window() {
            Some(window) => window.confirm_with_message(message).unwrap_or(false),
            None => {
                log::warn!("⚠️ No window available, treating \"{}\" as declined", message);
                false
            }
        }
    }

    fn alert(&self, message: &str) {
        match web_sys::window() {
            Some(window) => {
                if window.alert_with_message(message).is_err() {
                    log::error!("❌ Could not show alert: {}", message);
                }
            }
            None => log::error!("❌ No window available for alert: {}", message),
        }
    }
}
