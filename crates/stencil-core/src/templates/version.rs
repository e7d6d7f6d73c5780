//! Minimum tool version declared by a template

use semver::Version;

/// Compare the running version against the version a template asks for
///
/// Returns a warning when the tool is older than the template expects.
/// Versions that do not parse are not compared.
pub fn check_compatibility(
    cli_version: &str,
    template_version: &str,
    upgrade_command: &str,
) -> Option<String> {
    let cli_ver = parse_version(cli_version)?;
    let template_ver = parse_version(template_version)?;

    (cli_ver < template_ver).then(|| {
        format!(
            "This template was written for version {} or newer, you are running {}. \
             Consider updating: {}",
            template_ver, cli_ver, upgrade_command
        )
    })
}

/// Parse a version string, accepting a leading `v`
fn parse_version(version_str: &str) -> Option<Version> {
    let trimmed = version_str.trim();
    Version::parse(trimmed.strip_prefix('v').unwrap_or(trimmed)).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const UPGRADE: &str = "cargo install stencil --force";

    #[test]
    fn test_cli_older_than_template() {
        let warning = check_compatibility("0.1.0", "0.2.0", UPGRADE).unwrap();
        assert!(warning.contains("0.2.0"));
        assert!(warning.contains(UPGRADE));
    }

    #[test]
    fn test_cli_same_or_newer() {
        assert!(check_compatibility("0.1.0", "0.1.0", UPGRADE).is_none());
        assert!(check_compatibility("0.2.0", "0.1.0", UPGRADE).is_none());
    }

    #[test]
    fn test_leading_v_accepted() {
        assert!(check_compatibility("v0.1.5", "v0.2.0", UPGRADE).is_some());
    }

    #[test]
    fn test_invalid_versions_skip_warning() {
        assert!(check_compatibility("invalid", "0.1.0", UPGRADE).is_none());
        assert!(check_compatibility("0.1.0", "latest", UPGRADE).is_none());
    }
}
