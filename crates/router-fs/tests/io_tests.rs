use pretty_assertions::assert_eq;
use rstest::rstest;
use router_fs::{NormalizedPath, io};
use std::fs;
use tempfile::TempDir;

fn leftover_temp_files(dir: &std::path::Path) -> Vec<String> {
    fs::read_dir(dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".tmp"))
        .collect()
}

#[test]
fn test_write_atomic_creates_file() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("package.json"));

    io::write_atomic(&path, b"{}").unwrap();

    let content = fs::read_to_string(path.to_native()).unwrap();
    assert_eq!(content, "{}");
}

#[rstest]
#[case("package.json")]
#[case("package.nls.json")]
#[case("LICENSE")]
fn test_write_atomic_any_file_name(#[case] name: &str) {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path()).join(name);

    io::write_text(&path, "x").unwrap();

    assert_eq!(fs::read_to_string(temp.path().join(name)).unwrap(), "x");
    assert!(leftover_temp_files(temp.path()).is_empty());
}

#[test]
fn test_write_atomic_overwrites_existing() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("package.json");
    fs::write(&file_path, "stale manifest").unwrap();

    let path = NormalizedPath::new(&file_path);
    io::write_text(&path, "fresh manifest").unwrap();

    assert_eq!(fs::read_to_string(&file_path).unwrap(), "fresh manifest");
}

#[test]
fn test_write_atomic_cleans_up_temp_file_on_success() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("package.json"));

    io::write_text(&path, "content").unwrap();

    assert!(leftover_temp_files(temp.path()).is_empty());
}

#[test]
fn test_write_atomic_missing_parent_fails_without_creating_it() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("missing");
    let path = NormalizedPath::new(missing.join("package.json"));

    let result = io::write_text(&path, "content");

    assert!(result.is_err());
    assert!(!missing.exists());
}

#[test]
fn test_read_text_round_trips_written_text() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("package.json"));

    io::write_text(&path, "{\n  \"name\": \"smart-router\"\n}").unwrap();

    assert_eq!(
        io::read_text(&path).unwrap(),
        "{\n  \"name\": \"smart-router\"\n}"
    );
}

#[test]
fn test_read_text_nonexistent_file_reports_path() {
    let temp = TempDir::new().unwrap();
    let native = temp.path().join("nope.json");
    let err = io::read_text(&NormalizedPath::new(&native)).unwrap_err();

    assert_eq!(err.path(), native.as_path());
}

#[test]
fn test_write_under_regular_file_fails_and_leaves_file_untouched() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();

    let result = io::write_text(&NormalizedPath::new(blocker.join("package.json")), "content");

    assert!(result.is_err());
    assert_eq!(fs::read_to_string(&blocker).unwrap(), "not a directory");
    assert!(leftover_temp_files(temp.path()).is_empty());
}

#[cfg(unix)]
mod unix_tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs::Permissions;
    use std::os::unix::fs::PermissionsExt;

    fn is_root() -> bool {
        match std::process::Command::new("id").arg("-u").output() {
            Ok(output) => String::from_utf8_lossy(&output.stdout).trim() == "0",
            Err(_) => false,
        }
    }

    #[test]
    fn test_write_to_readonly_directory_leaves_nothing_behind() {
        if is_root() {
            eprintln!("Skipping test: running as root bypasses permission checks");
            return;
        }
        let temp = TempDir::new().unwrap();
        let readonly_dir = temp.path().join("readonly");
        fs::create_dir(&readonly_dir).unwrap();
        fs::set_permissions(&readonly_dir, Permissions::from_mode(0o555)).unwrap();

        let target = readonly_dir.join("package.json");
        let result = io::write_text(&NormalizedPath::new(&target), "content");

        let _ = fs::set_permissions(&readonly_dir, Permissions::from_mode(0o755));

        assert!(result.is_err());
        assert!(!target.exists(), "no zero-byte target may be left behind");
        assert!(leftover_temp_files(&readonly_dir).is_empty());
    }

    #[test]
    fn test_failed_overwrite_preserves_original() {
        if is_root() {
            eprintln!("Skipping test: running as root bypasses permission checks");
            return;
        }
        let temp = TempDir::new().unwrap();
        let parent = temp.path().join("parent");
        fs::create_dir(&parent).unwrap();
        let file_path = parent.join("package.json");
        fs::write(&file_path, "original").unwrap();
        fs::set_permissions(&parent, Permissions::from_mode(0o555)).unwrap();

        let result = io::write_text(&NormalizedPath::new(&file_path), "new content");

        let _ = fs::set_permissions(&parent, Permissions::from_mode(0o755));

        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&file_path).unwrap(), "original");
    }
}
