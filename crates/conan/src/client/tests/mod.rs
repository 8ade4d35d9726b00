use super::*;
use crate::platform::Platform;
use crate::recipe::{BuildType, Verb};
use crate::testing::FakeHost;

fn remotes() -> [Remote; 2] {
    [
        Remote::new(
            "engine3d-conan",
            "https://libhal.jfrog.io/artifactory/api/conan/engine3d-conan",
        ),
        Remote::new(
            "libhal-trunk",
            "https://libhal.jfrog.io/artifactory/api/conan/trunk-conan",
        ),
    ]
}

fn client(dir: &tempfile::TempDir) -> Conan<FakeHost> {
    Conan::with_executor("conan", FakeHost::new(dir.path()))
}

#[tokio::test]
async fn ensure_remote_is_idempotent() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let conan = client(&dir);

    for remote in &remotes() {
        assert_eq!(conan.ensure_remote(remote).await?, RemoteStatus::Added);
    }
    for remote in &remotes() {
        assert_eq!(conan.ensure_remote(remote).await?, RemoteStatus::Present);
    }

    assert_eq!(conan.executor().remotes().len(), 2);
    assert_eq!(conan.executor().calls_to(&["remote", "add"]).len(), 2);
    Ok(())
}

#[tokio::test]
async fn existing_remote_is_kept_as_is() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let stale = Remote::new("libhal-trunk", "https://old.example.com");
    let conan = Conan::with_executor("conan", FakeHost::new(dir.path()).with_remote(stale.clone()));

    let [_, trunk] = remotes();
    assert_eq!(conan.ensure_remote(&trunk).await?, RemoteStatus::Present);
    assert_eq!(conan.executor().remotes(), [stale]);
    Ok(())
}

#[tokio::test]
async fn failed_listing_is_an_error() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let conan = Conan::with_executor("conan", FakeHost::new(dir.path()).failing("remote", 2));

    let err = conan.ensure_remote(&remotes()[0]).await.unwrap_err();
    assert_eq!(err.exit_code(), Some(2));
    assert!(conan.executor().calls_to(&["remote", "add"]).is_empty());
    Ok(())
}

#[tokio::test]
async fn default_profile_is_detected_once() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let conan = client(&dir);

    assert_eq!(conan.default_profile().await?, None);
    conan.detect_profile().await?;

    let path = conan.default_profile().await?;
    assert_eq!(path, Some(conan.executor().default_profile_path()));
    assert!(std::fs::read_to_string(path.unwrap())?.contains("[settings]"));
    Ok(())
}

#[tokio::test]
async fn config_install_carries_timeout() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let conan = client(&dir);
    let install = ConfigInstall::for_platform(&Platform::new("Linux", "aarch64"), "https://x.test/c.git");

    conan.config_install(&install, Duration::from_secs(60)).await?;

    let calls = conan.executor().calls_to(&["config", "install"]);
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0][3], "profiles/armv8/linux/");
    Ok(())
}

#[tokio::test]
async fn failed_recipe_reports_exit_code() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let conan = Conan::with_executor("conan", FakeHost::new(dir.path()).failing("create", 3));
    let recipe = Recipe {
        verb: Verb::Create,
        path: ".".into(),
        build_type: BuildType::resolve::<&str>(&[], false),
        profile: None,
        confs: vec![],
        forwarded: vec![],
    };

    match conan.recipe(&recipe).await {
        Err(Error::Failed { command, code }) => {
            assert_eq!(code, 3);
            assert!(command.starts_with("conan create ."), "{command}");
        }
        other => panic!("unexpected result: {other:?}"),
    }
    Ok(())
}
