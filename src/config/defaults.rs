//! Default value functions for configuration.

// =============================================================================
// Server Defaults
// =============================================================================

pub fn default_realname() -> String {
    "minised bot".to_string()
}

pub fn default_registration_timeout() -> u64 {
    60
}

pub fn default_reconnect_delay() -> u64 {
    10
}

// =============================================================================
// Module Defaults
// =============================================================================

pub fn default_help_command() -> String {
    "!help".to_string()
}

pub fn default_module_name() -> String {
    "MiniSed".to_string()
}

// =============================================================================
// Log Defaults
// =============================================================================

pub fn default_log_filter() -> String {
    "info".to_string()
}
