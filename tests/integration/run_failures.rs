use super::IntegrationHarness;
use std::fs::{self, OpenOptions};

const PAGE: &str = "# Title\nBody\n";

#[test]
fn abort_keeps_earlier_pages_and_skips_later_ones() {
    let harness = IntegrationHarness::new();
    harness.write_page("kcna/a.md", PAGE);
    let bad = harness.root().join("kcna/b.md");
    fs::write(&bad, [b'#', b' ', 0xff, 0xfe, b'\n']).expect("write bad page");
    harness.write_page("kcna/c.md", PAGE);

    let err = harness.injector(&["kcna"]).run().unwrap_err();

    assert!(err.to_string().contains("Failed to read"));
    assert!(harness
        .read_page("kcna/a.md")
        .contains("<div class=\"pdf-download\">"));
    assert_eq!(harness.read_page("kcna/c.md"), PAGE);
}

#[test]
fn read_only_page_fails_to_write() {
    let harness = IntegrationHarness::new();
    let path = harness.write_page("kcna/locked.md", PAGE);
    let mut perms = fs::metadata(&path).expect("metadata").permissions();
    perms.set_readonly(true);
    fs::set_permissions(&path, perms).expect("set read-only");

    // Privileged users can write through the read-only bit.
    if OpenOptions::new().write(true).open(&path).is_ok() {
        return;
    }

    let err = harness.injector(&["kcna"]).run().unwrap_err();

    assert!(err.to_string().contains("Failed to write"));
    assert_eq!(harness.read_page("kcna/locked.md"), PAGE);
}

#[cfg(unix)]
#[test]
fn symlinked_page_is_updated_through_the_link() {
    use std::os::unix::fs::symlink;

    let harness = IntegrationHarness::new();
    let target = harness.write_page("shared/page.md", "# Shared\n");
    fs::create_dir_all(harness.root().join("kcna")).expect("cert dir");
    symlink(&target, harness.root().join("kcna/page.md")).expect("symlink");

    let summary = harness.injector(&["kcna"]).run().expect("run");

    assert_eq!(summary.updated, 1);
    assert!(harness
        .read_page("shared/page.md")
        .contains("href=\"/pdf/page.pdf\""));
}

#[cfg(target_os = "linux")]
#[test]
fn non_utf8_page_name_aborts() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let harness = IntegrationHarness::new();
    fs::create_dir_all(harness.root().join("kcna")).expect("cert dir");
    let path = harness
        .root()
        .join("kcna")
        .join(OsStr::from_bytes(b"caf\xe9.md"));
    fs::write(&path, PAGE).expect("write page");

    let err = harness.injector(&["kcna"]).run().unwrap_err();

    assert!(err.to_string().contains("Invalid file name"));
    assert_eq!(fs::read_to_string(&path).expect("read page"), PAGE);
}
