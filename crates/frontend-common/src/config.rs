//! Frontend configuration

/// Toast notification configuration
pub struct ToastConfig;

impl ToastConfig {
    /// How long a toast stays visible when no duration is given
    pub const DEFAULT_DURATION_MS: u32 = 3_000;

    /// Exit animation allowance between "leaving" and removal
    pub const TRANSITION_MS: u32 = 300;
}

/// Client storage configuration
pub struct StorageConfig;

impl StorageConfig {
    /// Version tag written into migrated notification envelopes
    pub const ENVELOPE_VERSION: &'static str = "2.0";

    /// Key fragments that mark an entry as notification state in debug snapshots
    pub const NOTIFICATION_MARKERS: [&'static str; 3] = ["notification", "read_", "cleared_"];
}
