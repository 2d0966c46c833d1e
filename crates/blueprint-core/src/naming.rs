//! Names derived from the application configuration.

use regex::Regex;
use std::sync::OnceLock;

fn whitespace_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern is valid"))
}

fn reverse_domain() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z][A-Za-z0-9_]*(\.[A-Za-z][A-Za-z0-9_]*)+$")
            .expect("package pattern is valid")
    })
}

/// Make a project name safe for file names and package managers.
///
/// Every run of whitespace collapses into a single `_`. The result is used
/// verbatim wherever a file-system or package-safe token is needed, so all
/// generated artifacts agree on the same spelling.
pub fn sanitize_name(name: &str) -> String {
    whitespace_run().replace_all(name, "_").into_owned()
}

/// Whether `value` looks like a reverse-domain package identifier.
pub fn is_valid_package_name(value: &str) -> bool {
    reverse_domain().is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_sanitize_collapses_runs() {
        assert_eq!(sanitize_name("My App"), "My_App");
        assert_eq!(sanitize_name("My   Cool\tApp"), "My_Cool_App");
        assert_eq!(sanitize_name(" padded "), "_padded_");
    }

    #[test]
    fn test_sanitize_leaves_clean_names() {
        assert_eq!(sanitize_name("TodoApp"), "TodoApp");
        assert_eq!(sanitize_name(""), "");
    }

    #[test]
    fn test_package_names() {
        assert!(is_valid_package_name("com.x.y"));
        assert!(is_valid_package_name("com.mycompany.my_app2"));
        assert!(!is_valid_package_name("myapp"));
        assert!(!is_valid_package_name("com..app"));
        assert!(!is_valid_package_name("1com.app"));
        assert!(!is_valid_package_name("com.my app"));
    }

    proptest! {
        #[test]
        fn sanitize_is_idempotent(name in "\\PC*") {
            let once = sanitize_name(&name);
            prop_assert_eq!(sanitize_name(&once), once.clone());
            prop_assert!(!once.chars().any(char::is_whitespace));
        }
    }
}
