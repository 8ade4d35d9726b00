use super::*;
use rstest::rstest;

#[rstest]
#[case("Windows", "AMD64", Some("windows_x86_64"))]
#[case("windows", "x86_64", Some("windows_x86_64"))]
#[case("Windows", "ARM64", Some("windows_x86_64"))]
#[case("Darwin", "arm64", Some("mac_armv8"))]
#[case("macos", "aarch64", Some("mac_armv8"))]
#[case("Darwin", "x86_64", Some("mac_x86_64"))]
#[case("Linux", "x86_64", Some("linux_x86_64"))]
#[case("linux", "aarch64", Some("linux_x86_64"))]
#[case("FreeBSD", "amd64", None)]
#[case("", "", None)]
fn profile_table(#[case] os: &str, #[case] machine: &str, #[case] expected: Option<&str>) {
    let platform = Platform::new(os, machine);
    assert_eq!(platform.profile().map(|p| p.name()), expected);
}

#[test]
fn only_linux_requests_system_packages() {
    assert_eq!(Platform::new("Linux", "x86_64").confs(), SYSTEM_PACKAGE_CONFS);
    for os in ["Windows", "Darwin", "Plan9"] {
        assert!(Platform::new(os, "x86_64").confs().is_empty(), "{os}");
    }
}

#[test]
fn conf_args() {
    let args: Vec<String> = SYSTEM_PACKAGE_CONFS.iter().flat_map(Conf::args).collect();
    assert_eq!(
        args,
        [
            "-c",
            "tools.system.package_manager:sudo=True",
            "-c",
            "tools.system.package_manager:mode=install",
        ]
    );
}

#[rstest]
#[case("Windows", "AMD64", "profiles/x86_64/Windows/")]
#[case("Linux", "x86_64", "profiles/x86_64/linux/")]
#[case("Linux", "aarch64", "profiles/armv8/linux/")]
#[case("Darwin", "arm64", "profiles/armv8/mac/")]
#[case("Darwin", "x86_64", "profiles/x86_64/mac/")]
#[case("SunOS", "sparc", "profiles/x86_64/mac/")]
fn profile_source(#[case] os: &str, #[case] machine: &str, #[case] expected: &str) {
    assert_eq!(Platform::new(os, machine).profile_source(), expected);
}

#[test]
fn arm_variants_map_to_armv8() {
    for machine in ["arm64", "ARM64", "aarch64", "armv8"] {
        assert_eq!(Arch::from(machine), Arch::Armv8, "{machine}");
    }
    assert_eq!(Arch::from("armv7l"), Arch::X86_64);
}

#[test]
fn detect_matches_build_target() {
    let platform = Platform::detect();
    assert_eq!(platform.machine(), std::env::consts::ARCH);
    if cfg!(target_os = "linux") {
        assert_eq!(platform.os(), &Os::Linux);
    }
}
