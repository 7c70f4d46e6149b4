use std::io::Write;

use chrono::Local;
use proxy_model::settings::{update_settings_from_content, update_settings_from_file};
use proxy_model::{construct, MemoryStore, ProxyInput, ProxyRegistry, Settings};

#[cfg(test)]
mod settings_tests {
    use super::*;

    // Tests here share the global settings instance, so they run as one.
    #[test]
    fn test_global_settings_lifecycle() {
        let yaml_content = r#"
common:
  log_level: "warn"
  rename_timestamp_format: "renamed-%Y"
rule_sets:
  - "Streaming"
proxies:
  - uri: "ss://rc4:pw@1.2.3.4:8388"
    name: "Tokyo"
"#;
        update_settings_from_content(yaml_content).unwrap();
        let settings = Settings::current();
        assert_eq!(settings.log_level, "warn");
        assert_eq!(settings.rule_sets, vec!["Streaming"]);
        assert!(settings.pref_path.is_empty());

        // the configured format drives the collision rename
        let mut store = MemoryStore::new();
        store.add_rule_set("Streaming");
        let record = construct(
            &ProxyInput::uri("ss://rc4:pw@host:443", "Streaming"),
            &store,
        )
        .unwrap();
        assert_eq!(
            record.name,
            format!("renamed-{}", Local::now().format("%Y"))
        );

        // seeded proxies go through the same construction path
        let registry = ProxyRegistry::new(MemoryStore::new());
        for dict in &settings.proxies {
            registry.add(&ProxyInput::from(dict.clone())).unwrap();
        }
        assert_eq!(registry.get("Tokyo").unwrap().port, 8388);

        let toml_content = r#"
[common]
log_level = "debug"

[[proxies]]
name = "Home"
host = "10.0.0.1"
type = "socks5"
port = "1080"
encryption = "none"
password = "pw"
"#;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(toml_content.as_bytes()).unwrap();
        let path = file.path().to_str().unwrap().to_string();
        update_settings_from_file(&path).unwrap();

        let settings = Settings::current();
        assert_eq!(settings.pref_path, path);
        assert_eq!(settings.log_level, "debug");
        assert_eq!(settings.rename_timestamp_format, "%Y-%m-%d %H:%M:%S");
        assert!(settings.rule_sets.is_empty());
        assert_eq!(settings.proxies[0]["type"], "socks5");

        // a failed load leaves the current settings in place
        assert!(update_settings_from_file("/nonexistent/settings.toml").is_err());
        assert_eq!(Settings::current().pref_path, path);
    }
}
