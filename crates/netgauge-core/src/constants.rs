/// netgauge version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV_VAR: &str = "NETGAUGE_LOG";

/// Environment variable holding an explicit config file path.
pub const CONFIG_ENV_VAR: &str = "NETGAUGE_CONFIG";

/// Prefix for per-field environment overrides (`NETGAUGE_ENGINE_MAX_HISTORY`, ...).
pub const ENV_PREFIX: &str = "NETGAUGE_";

/// Project-level config file name.
pub const CONFIG_FILE_NAME: &str = "netgauge.toml";

/// User-level config directory name under `$HOME`.
pub const USER_CONFIG_DIR: &str = ".netgauge";

/// Tracing target root used by every crate in the workspace.
pub const TRACING_TARGET: &str = "netgauge";

/// Format used for the persisted verdict timestamp.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%SZ";
