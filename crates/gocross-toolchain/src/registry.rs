//! Versioned platform registry.
//!
//! One list per Go minor release, each constructor building on the
//! previous release's list by copy-then-extend, so no two lists ever share
//! backing storage and callers own what they receive.
//!
//! The entries and default flags are hand-maintained release data, not
//! derived. A later list may re-append a pair introduced earlier or revise
//! a default flag; consumers must not assume (os, arch) uniqueness within
//! a list.

use gocross_platform::Platform;

/// Platforms supported by Go 1.0.
pub fn go_1_0() -> Vec<Platform> {
    vec![
        Platform::new("darwin", "386", true),
        Platform::new("darwin", "amd64", true),
        Platform::new("linux", "386", true),
        Platform::new("linux", "amd64", true),
        Platform::new("linux", "arm", true),
        Platform::new("freebsd", "386", true),
        Platform::new("freebsd", "amd64", true),
        Platform::new("openbsd", "386", true),
        Platform::new("openbsd", "amd64", true),
        Platform::new("windows", "386", true),
        Platform::new("windows", "amd64", true),
    ]
}

/// Go 1.1: adds the netbsd ports, freebsd/arm, and plan9/386.
pub fn go_1_1() -> Vec<Platform> {
    let mut platforms = go_1_0();
    platforms.extend([
        Platform::new("freebsd", "arm", true),
        Platform::new("netbsd", "386", true),
        Platform::new("netbsd", "amd64", true),
        Platform::new("netbsd", "arm", true),
        Platform::new("plan9", "386", false),
    ]);
    platforms
}

/// Go 1.3: adds dragonfly, nacl, and solaris.
pub fn go_1_3() -> Vec<Platform> {
    let mut platforms = go_1_1();
    platforms.extend([
        Platform::new("dragonfly", "386", false),
        Platform::new("dragonfly", "amd64", false),
        Platform::new("nacl", "amd64", false),
        Platform::new("nacl", "amd64p32", false),
        Platform::new("nacl", "arm", false),
        Platform::new("solaris", "amd64", false),
    ]);
    platforms
}

/// Go 1.4: adds android/arm and plan9/amd64.
pub fn go_1_4() -> Vec<Platform> {
    let mut platforms = go_1_3();
    platforms.extend([
        Platform::new("android", "arm", false),
        Platform::new("plan9", "amd64", false),
    ]);
    platforms
}

/// Go 1.5: adds the darwin and linux arm64 ports plus linux ppc64.
pub fn go_1_5() -> Vec<Platform> {
    let mut platforms = go_1_4();
    platforms.extend([
        Platform::new("darwin", "arm", false),
        Platform::new("darwin", "arm64", false),
        Platform::new("linux", "arm64", false),
        Platform::new("linux", "ppc64", false),
        Platform::new("linux", "ppc64le", false),
    ]);
    platforms
}

/// Go 1.6: adds android/386 and the linux mips64 pair.
pub fn go_1_6() -> Vec<Platform> {
    let mut platforms = go_1_5();
    platforms.extend([
        Platform::new("android", "386", false),
        Platform::new("linux", "mips64", false),
        Platform::new("linux", "mips64le", false),
    ]);
    platforms
}

/// Go 1.7: builds on the 1.5 list, not 1.6. The 1.6 additions return
/// here with mips64/mips64le promoted to default targets, alongside
/// linux/s390x and plan9/arm.
pub fn go_1_7() -> Vec<Platform> {
    let mut platforms = go_1_5();
    platforms.extend([
        Platform::new("linux", "s390x", true),
        Platform::new("plan9", "arm", false),
        Platform::new("android", "386", false),
        Platform::new("linux", "mips64", true),
        Platform::new("linux", "mips64le", true),
    ]);
    platforms
}

/// Go 1.8: adds the 32-bit mips pair and promotes linux/arm64.
pub fn go_1_8() -> Vec<Platform> {
    let mut platforms = go_1_7();
    platforms.extend([
        Platform::new("linux", "mips", true),
        Platform::new("linux", "mipsle", true),
        Platform::new("linux", "arm64", true),
    ]);
    platforms
}

/// Go 1.9: adds riscv64 across linux/freebsd/openbsd, the remaining BSD
/// arm ports, windows on arm, and js/wasm.
pub fn go_1_9() -> Vec<Platform> {
    let mut platforms = go_1_8();
    platforms.extend([
        Platform::new("linux", "riscv64", true),
        Platform::new("freebsd", "riscv64", true),
        Platform::new("freebsd", "arm64", true),
        Platform::new("freebsd", "arm", true),
        Platform::new("openbsd", "arm64", true),
        Platform::new("openbsd", "arm", true),
        Platform::new("openbsd", "riscv64", true),
        Platform::new("windows", "arm", true),
        Platform::new("windows", "arm64", true),
        Platform::new("js", "wasm", true),
    ]);
    platforms
}

/// Go 1.10: no new platforms.
pub fn go_1_10() -> Vec<Platform> {
    go_1_9()
}

/// Go 1.11: re-appends js/wasm and linux/arm64.
pub fn go_1_11() -> Vec<Platform> {
    let mut platforms = go_1_10();
    platforms.extend([
        Platform::new("js", "wasm", true),
        Platform::new("linux", "arm64", true),
    ]);
    platforms
}

/// Go 1.12: adds aix/ppc64 and re-appends linux/ppc64 and windows/arm as
/// default targets.
pub fn go_1_12() -> Vec<Platform> {
    let mut platforms = go_1_11();
    platforms.extend([
        Platform::new("linux", "ppc64", true),
        Platform::new("windows", "arm", true),
        Platform::new("aix", "ppc64", true),
    ]);
    platforms
}

/// The newest known release list.
pub fn latest() -> Vec<Platform> {
    go_1_12()
}
