//! Configuration management for harjar

/// Path assigned to a cookie whose HAR record carries no `path`.
pub const DEFAULT_COOKIE_PATH: &str = "/";

/// Conversion configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionConfig {
    /// Emit a non-zero cookie `version` when converting to HAR.
    ///
    /// Off by default: HAR consumers rarely care about RFC 2109 versions and
    /// the conversion to HAR traditionally leaves the field out.
    pub emit_version: bool,
}

#[cfg(test)]
mod tests {
    use super::{ConversionConfig, DEFAULT_COOKIE_PATH};

    #[test]
    fn default_config_leaves_version_out() {
        let config = ConversionConfig::default();
        assert!(!config.emit_version);
        assert_eq!(DEFAULT_COOKIE_PATH, "/");
    }
}
