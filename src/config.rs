/// Static content lives next to the app bundle and is fetched over
/// relative paths, so the same build works on any host.
pub fn data_url(resource: &str) -> String {
    format!("data/{}.json", resource)
}

pub const SATISFIED_CLIENTS_TARGET: u32 = 5280;
pub const COUNTER_DURATION_MS: u32 = 2_000;

/// Delay before a locked form forces navigation back to its entry point.
pub const LOCKOUT_REDIRECT_MS: u32 = 2_500;

/// Delay before the confirmation page returns to the home page.
pub const CONFIRMATION_REDIRECT_MS: u32 = 6_000;
