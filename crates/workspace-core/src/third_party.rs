//! Detection and validation of third-party preset packages
//!
//! A preset string that is not a built-in identifier is treated as an npm
//! package specifier (`name`, `name@version`, `@scope/name@tag`). It is
//! accepted when the package name would be valid for a newly published
//! package and the version part, if any, is a semver range or a dist-tag.

use crate::error::ResolveError;
use crate::preset::Preset;
use semver::VersionReq;

/// Maximum length of an npm package name
const MAX_NAME_LENGTH: usize = 214;

/// Names npm refuses outright
const RESERVED_NAMES: &[&str] = &["node_modules", "favicon.ico"];

/// Node core modules, which cannot be used as new package names.
/// Subpath (`fs/promises`) and underscore (`_http_agent`) builtins fail the
/// character rules already.
const CORE_MODULES: &[&str] = &[
    "assert",
    "async_hooks",
    "buffer",
    "child_process",
    "cluster",
    "console",
    "constants",
    "crypto",
    "dgram",
    "diagnostics_channel",
    "dns",
    "domain",
    "events",
    "fs",
    "http",
    "http2",
    "https",
    "inspector",
    "module",
    "net",
    "os",
    "path",
    "perf_hooks",
    "process",
    "punycode",
    "querystring",
    "readline",
    "repl",
    "stream",
    "string_decoder",
    "sys",
    "timers",
    "tls",
    "trace_events",
    "tty",
    "url",
    "util",
    "v8",
    "vm",
    "wasi",
    "worker_threads",
    "zlib",
];

/// Outcome of looking up a preset string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresetRef {
    BuiltIn(Preset),
    /// Package specifier exactly as supplied
    ThirdParty(String),
}

/// Resolve a preset string to a built-in preset or a third-party package.
///
/// Fails with [`ResolveError::PresetNotFound`] when the string is neither.
pub fn lookup_preset(raw: &str) -> Result<PresetRef, ResolveError> {
    if let Ok(preset) = raw.parse::<Preset>() {
        return Ok(PresetRef::BuiltIn(preset));
    }

    let (name, version) = split_specifier(raw);
    let not_found = |reason: String| ResolveError::PresetNotFound {
        preset: raw.to_string(),
        reason,
    };

    validate_package_name(name).map_err(not_found)?;
    if let Some(version) = version {
        validate_version(version).map_err(not_found)?;
    }

    tracing::debug!(package = name, version, "using third-party preset");
    Ok(PresetRef::ThirdParty(raw.to_string()))
}

/// Split `name@version` into its parts. A leading `@` belongs to the scope.
pub fn split_specifier(spec: &str) -> (&str, Option<&str>) {
    match spec.char_indices().skip(1).find(|(_, c)| *c == '@') {
        Some((idx, _)) => (&spec[..idx], Some(&spec[idx + 1..])),
        None => (spec, None),
    }
}

/// Check a package name against the rules for new npm packages
pub fn validate_package_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("name length must be greater than zero".to_string());
    }
    if name.starts_with('.') {
        return Err("name cannot start with a period".to_string());
    }
    if name.starts_with('_') {
        return Err("name cannot start with an underscore".to_string());
    }
    if name.trim() != name {
        return Err("name cannot contain leading or trailing spaces".to_string());
    }
    if RESERVED_NAMES.iter().any(|r| r.eq_ignore_ascii_case(name)) {
        return Err(format!("{} is not a valid package name", name));
    }
    if CORE_MODULES.contains(&name) {
        return Err(format!("{} is a core module name", name));
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err(format!(
            "name can no longer contain more than {} characters",
            MAX_NAME_LENGTH
        ));
    }
    if name.to_lowercase() != name {
        return Err("name can no longer contain capital letters".to_string());
    }

    let bare = match name.strip_prefix('@') {
        Some(scoped) => {
            let (scope, package) = scoped
                .split_once('/')
                .ok_or_else(|| "scoped name must be of the form @scope/name".to_string())?;
            if scope.is_empty() || package.is_empty() || !is_url_safe(scope) {
                return Err("scoped name must be of the form @scope/name".to_string());
            }
            package
        }
        None => name,
    };

    if bare.contains(['~', '\'', '!', '(', ')', '*']) {
        return Err("name can no longer contain special characters (\"~'!()*\")".to_string());
    }
    if !is_url_safe(bare) {
        return Err("name can only contain URL-friendly characters".to_string());
    }

    Ok(())
}

fn validate_version(version: &str) -> Result<(), String> {
    if version.is_empty() {
        return Err("version after '@' cannot be empty".to_string());
    }
    if is_dist_tag(version) || is_npm_range(version) {
        Ok(())
    } else {
        Err(format!("\"{}\" is not a valid version or tag", version))
    }
}

/// npm range syntax: `||`-separated sets of space-separated comparators or
/// hyphen ranges. Each set is rewritten into a comma-separated requirement.
fn is_npm_range(range: &str) -> bool {
    range
        .split("||")
        .all(|set| comparator_set(set.trim()).is_some())
}

fn comparator_set(set: &str) -> Option<VersionReq> {
    if set.is_empty() {
        return Some(VersionReq::STAR);
    }

    if let Some((low, high)) = set.split_once(" - ") {
        let low = strip_v(low.trim());
        let high = strip_v(high.trim());
        return VersionReq::parse(&format!(">={}, <={}", low, high)).ok();
    }

    // `>= 1.0.0` is one comparator in npm
    let mut comparators: Vec<String> = Vec::new();
    for token in set.split_whitespace() {
        match comparators.last_mut() {
            Some(last) if is_operator(last) => last.push_str(token),
            _ => comparators.push(token.to_string()),
        }
    }

    let normalized: Vec<String> = comparators
        .iter()
        .map(|comparator| {
            let op_len = comparator.len() - comparator.trim_start_matches(is_operator_char).len();
            let (op, version) = comparator.split_at(op_len);
            format!("{}{}", op, strip_v(version))
        })
        .collect();

    VersionReq::parse(&normalized.join(", ")).ok()
}

fn is_operator_char(c: char) -> bool {
    matches!(c, '<' | '>' | '=' | '~' | '^')
}

fn is_operator(token: &str) -> bool {
    !token.is_empty() && token.chars().all(is_operator_char)
}

fn strip_v(version: &str) -> &str {
    version.strip_prefix('v').unwrap_or(version)
}

/// Characters `encodeURIComponent` leaves untouched, minus the special ones
fn is_url_safe(s: &str) -> bool {
    s.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '.' | '_'))
}

fn is_dist_tag(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_preset_is_not_third_party() {
        assert_eq!(lookup_preset("react-monorepo").unwrap(), PresetRef::BuiltIn(Preset::ReactMonorepo));
    }

    #[test]
    fn test_scoped_package() {
        assert_eq!(
            lookup_preset("@scope/custom-preset").unwrap(),
            PresetRef::ThirdParty("@scope/custom-preset".to_string())
        );
    }

    #[test]
    fn test_package_with_version_and_tag() {
        assert!(lookup_preset("@scope/custom-preset@1.2.3").is_ok());
        assert!(lookup_preset("my-preset@^2.0.0").is_ok());
        assert!(lookup_preset("my-preset@latest").is_ok());
        assert!(lookup_preset("my-preset@next").is_ok());
    }

    #[test]
    fn test_split_specifier() {
        assert_eq!(split_specifier("pkg"), ("pkg", None));
        assert_eq!(split_specifier("pkg@1.0.0"), ("pkg", Some("1.0.0")));
        assert_eq!(split_specifier("@s/pkg"), ("@s/pkg", None));
        assert_eq!(split_specifier("@s/pkg@beta"), ("@s/pkg", Some("beta")));
        assert_eq!(split_specifier(""), ("", None));
    }

    #[test]
    fn test_invalid_package_names() {
        for bad in [
            "",
            ".hidden",
            "_private",
            " padded",
            "Capital",
            "has space",
            "node_modules",
            "http",
            "@scope",
            "@/name",
            "@scope/",
            "crazy!",
            "a/b",
        ] {
            assert!(validate_package_name(bad).is_err(), "{bad:?} should be invalid");
        }
    }

    #[test]
    fn test_too_long_name() {
        let name = "a".repeat(MAX_NAME_LENGTH + 1);
        assert!(validate_package_name(&name).is_err());
        assert!(validate_package_name(&"a".repeat(MAX_NAME_LENGTH)).is_ok());
    }

    #[test]
    fn test_not_found_reports_reason() {
        match lookup_preset("Not A Preset").unwrap_err() {
            ResolveError::PresetNotFound { preset, reason } => {
                assert_eq!(preset, "Not A Preset");
                assert!(!reason.is_empty());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_npm_range_syntax() {
        for spec in [
            "my-preset@>=1.0.0 <2.0.0",
            "my-preset@^1.0.0 || ^2.0.0",
            "my-preset@1.0.0 - 2.0.0",
            "my-preset@>= 1.2.0",
            "my-preset@v1.2.3",
            "my-preset@~1.2",
            "@scope/custom-preset@1.x || >=3.0.0",
        ] {
            assert_eq!(
                lookup_preset(spec).unwrap(),
                PresetRef::ThirdParty(spec.to_string()),
                "{spec:?} should be accepted"
            );
        }
    }

    #[test]
    fn test_core_module_names_rejected() {
        for name in ["worker_threads", "http2", "async_hooks", "fs", "perf_hooks"] {
            assert!(validate_package_name(name).is_err(), "{name:?} should be invalid");
        }
    }

    #[test]
    fn test_invalid_version() {
        assert!(lookup_preset("my-preset@").is_err());
        assert!(lookup_preset("my-preset@!!").is_err());
    }
}
