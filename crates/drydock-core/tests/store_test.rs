use drydock_core::{ConfigError, ConfigValue, TierStore};
use tempfile::TempDir;

// ── Loading ──

#[test]
fn load_returns_empty_store_when_no_config_file() {
    let tmp = TempDir::new().unwrap();
    let store = TierStore::load(tmp.path()).unwrap();

    assert!(store.is_empty());
    assert!(store.tier("docker").is_none());
}

#[test]
fn load_parses_tiers_from_top_level_tables() {
    let tmp = TempDir::new().unwrap();
    let toml = r#"
[docker]
registry = "registry.uberspace.is"
namespace = "uberspace/homepage"
name = "cms-engine"
tag = ""

[docker.volumes]
"/input" = "example/input"
"/output" = "example/output"

[preview]
tag = "preview"

[standalone]
no_global_config = true
name = "toolbox"
"#;
    std::fs::write(tmp.path().join("drydock.toml"), toml).unwrap();

    let store = TierStore::load(tmp.path()).unwrap();

    let docker = store.tier("docker").unwrap();
    assert_eq!(
        docker.get("name"),
        Some(&ConfigValue::String("cms-engine".to_owned()))
    );

    let volumes = docker.get("volumes").unwrap().as_map().unwrap();
    let mounts: Vec<_> = volumes.keys().cloned().collect();
    assert_eq!(mounts, vec!["/input", "/output"]);

    assert!(store.contains("preview"));
    let standalone = store.tier("standalone").unwrap();
    assert_eq!(
        standalone.get("no_global_config"),
        Some(&ConfigValue::Bool(true))
    );
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("drydock.toml"), "not valid {{{{ toml").unwrap();

    let result = TierStore::load(tmp.path());
    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[test]
fn load_rejects_top_level_value_that_is_not_a_table() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("drydock.toml"), "docker = \"oops\"\n").unwrap();

    let result = TierStore::load(tmp.path());
    assert!(matches!(
        result,
        Err(ConfigError::TierNotTable { ref name, .. }) if name == "docker"
    ));
}

#[test]
fn load_empty_file_returns_empty_store() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("drydock.toml"), "").unwrap();

    let store = TierStore::load(tmp.path()).unwrap();
    assert!(store.is_empty());
}

// ── Environment overlay ──

#[test]
fn overlay_env_sets_credentials_on_existing_tier() {
    let mut store = TierStore::default().with_tier(
        "docker",
        [("name".to_owned(), ConfigValue::from("cms-engine"))]
            .into_iter()
            .collect(),
    );

    temp_env::with_vars(
        [
            ("DRYDOCK_DOCKER_USER", Some("robot")),
            ("DRYDOCK_DOCKER_TOKEN", Some("s3cret")),
        ],
        || store.overlay_env("DRYDOCK"),
    );

    let docker = store.tier("docker").unwrap();
    assert_eq!(docker.get("user"), Some(&ConfigValue::String("robot".to_owned())));
    assert_eq!(
        docker.get("token"),
        Some(&ConfigValue::String("s3cret".to_owned()))
    );
}

#[test]
fn overlay_env_ignores_unknown_tiers() {
    let mut store = TierStore::default().with_tier(
        "docker",
        [("name".to_owned(), ConfigValue::from("cms-engine"))]
            .into_iter()
            .collect(),
    );

    temp_env::with_vars([("DRYDOCK_OTHER_TOKEN", Some("nope"))], || {
        store.overlay_env("DRYDOCK")
    });

    assert!(!store.contains("other"));
    assert!(store.tier("docker").unwrap().get("token").is_none());
}

#[test]
fn overlay_env_overwrites_file_values() {
    let mut store = TierStore::default().with_tier(
        "docker",
        [("token".to_owned(), ConfigValue::from("from-file"))]
            .into_iter()
            .collect(),
    );

    temp_env::with_vars([("DRYDOCK_DOCKER_TOKEN", Some("from-env"))], || {
        store.overlay_env("DRYDOCK")
    });

    assert_eq!(
        store.tier("docker").unwrap().get("token"),
        Some(&ConfigValue::String("from-env".to_owned()))
    );
}
