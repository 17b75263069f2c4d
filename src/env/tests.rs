#[cfg(test)]
mod tests {
    use crate::env::EnvSnapshot;
    use crate::errors::ConfigError;
    use std::fs;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("proxy-config-{}-{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_parses_keys_and_ignores_comments() {
        let dir = scratch_dir("parse");
        fs::write(
            dir.join(".env"),
            "# backend the dev server forwards to\nBACKEND_ADDRESS=localhost:8080\n\nEXTRA=1\n",
        )
        .unwrap();

        let snapshot = EnvSnapshot::load(&dir).unwrap();
        assert_eq!(snapshot.get("BACKEND_ADDRESS"), Some("localhost:8080"));
        assert_eq!(snapshot.get("EXTRA"), Some("1"));
        assert_eq!(snapshot.len(), 2);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_finds_nearest_file_upward() {
        let root = scratch_dir("upward");
        let nested = root.join("frontend").join("src");
        fs::create_dir_all(&nested).unwrap();
        fs::write(root.join(".env"), "BACKEND_ADDRESS=outer:1\n").unwrap();

        // Only the root has a .env, so the search walks up to it
        let found = EnvSnapshot::find_file(&nested).unwrap();
        assert_eq!(found, root.join(".env"));
        let snapshot = EnvSnapshot::load(&nested).unwrap();
        assert_eq!(snapshot.get("BACKEND_ADDRESS"), Some("outer:1"));

        // A closer .env shadows the outer one
        fs::write(root.join("frontend").join(".env"), "BACKEND_ADDRESS=inner:2\n").unwrap();
        let snapshot = EnvSnapshot::load(&nested).unwrap();
        assert_eq!(snapshot.get("BACKEND_ADDRESS"), Some("inner:2"));

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_missing_file_yields_empty_snapshot() {
        let dir = scratch_dir("missing");

        let snapshot = EnvSnapshot::load(&dir).unwrap();
        assert!(snapshot.is_empty());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_require_missing_variable() {
        let snapshot = EnvSnapshot::from_pairs([("OTHER", "1")]);
        assert_eq!(snapshot.require("OTHER"), Ok("1"));
        assert_eq!(
            snapshot.require("BACKEND_ADDRESS"),
            Err(ConfigError::MissingVar("BACKEND_ADDRESS".to_string()))
        );
    }

    #[test]
    fn test_process_env_takes_precedence() {
        std::env::set_var("PROXY_CONFIG_TEST_OVERRIDE", "from-process");

        let snapshot =
            EnvSnapshot::from_pairs([("PROXY_CONFIG_TEST_OVERRIDE", "from-file")]).with_process_env();
        assert_eq!(snapshot.get("PROXY_CONFIG_TEST_OVERRIDE"), Some("from-process"));

        std::env::remove_var("PROXY_CONFIG_TEST_OVERRIDE");
    }

    #[test]
    fn test_malformed_line_is_a_parse_error() {
        let dir = scratch_dir("malformed");
        fs::write(dir.join(".env"), "NOT A VALID LINE\n").unwrap();

        let err = EnvSnapshot::load(&dir).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));

        fs::remove_dir_all(&dir).unwrap();
    }
}
