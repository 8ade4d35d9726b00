use super::*;
use figment::Jail;

#[test]
fn defaults() {
    let config = Config::default();
    assert_eq!(config.conan(), "conan");
    assert_eq!(config.update_timeout(), Duration::from_secs(60));
    let names: Vec<&str> = config.remotes().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["engine3d-conan", "libhal-trunk"]);
    assert_eq!(config.platform(), &PlatformOverride::default());
}

#[test]
fn file_replaces_remotes() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "atlas.toml",
            r#"
            config_url = "https://example.com/conan-config.git"

            [[remotes]]
            name = "mirror"
            url = "https://example.com/conan"
            "#,
        )?;

        let config: Config = Config::layered(Some("atlas.toml".into())).extract()?;
        assert_eq!(config.config_url(), "https://example.com/conan-config.git");
        assert_eq!(
            config.remotes(),
            [RemoteEntry {
                name: "mirror".into(),
                url: "https://example.com/conan".into(),
            }]
        );
        assert_eq!(config.conan(), "conan");
        Ok(())
    });
}

#[test]
fn env_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file("atlas.toml", "update_timeout = 30")?;
        jail.set_env("ATLAS_UPDATE_TIMEOUT", 5);
        jail.set_env("ATLAS_PLATFORM__OS", "Linux");

        let config: Config = Config::layered(Some("atlas.toml".into())).extract()?;
        assert_eq!(config.update_timeout(), Duration::from_secs(5));
        assert_eq!(config.platform().os.as_deref(), Some("Linux"));
        assert_eq!(config.platform().arch, None);
        Ok(())
    });
}

#[test]
fn missing_file_is_ignored() {
    Jail::expect_with(|_| {
        let config: Config = Config::layered(Some("nowhere.toml".into())).extract()?;
        assert_eq!(config.remotes().len(), 2);
        Ok(())
    });
}
