//! `.env` loading against the real process environment.
//!
//! Kept in its own test binary with a single test: it changes the working
//! directory and environment variables, which are process-wide.

use std::env;
use std::fs;

use pixela_cli::config::{load_dotenv, resolve_credentials, TOKEN_VAR, USERNAME_VAR};

#[test]
fn test_environment_loading() {
    let original_dir = env::current_dir().unwrap();
    env::remove_var(TOKEN_VAR);
    env::remove_var(USERNAME_VAR);

    // No .env anywhere in the tree: nothing is loaded, nothing panics.
    let bare = tempfile::tempdir().unwrap();
    let bare_child = bare.path().join("nested");
    fs::create_dir(&bare_child).unwrap();
    env::set_current_dir(&bare_child).unwrap();
    load_dotenv();
    let creds = resolve_credentials();
    assert_eq!(creds.username, "");
    assert_eq!(creds.token, "");

    // A .env in a parent directory is found; variables already set win.
    let project = tempfile::tempdir().unwrap();
    fs::write(
        project.path().join(".env"),
        "PIXELA_USERNAME=fromfile\nPIXELA_USER_TOKEN=filetoken\n",
    )
    .unwrap();
    let child = project.path().join("src").join("bin");
    fs::create_dir_all(&child).unwrap();
    env::set_current_dir(&child).unwrap();

    env::set_var(TOKEN_VAR, "fromprocess");
    load_dotenv();
    let creds = resolve_credentials();
    assert_eq!(creds.username, "fromfile");
    assert_eq!(creds.token, "fromprocess");

    // A value that is set but not UTF-8 is read lossily rather than dropped.
    #[cfg(unix)]
    {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        env::set_var(TOKEN_VAR, OsStr::from_bytes(b"tok\xffen"));
        let creds = resolve_credentials();
        assert_eq!(creds.token, "tok\u{FFFD}en");
    }

    env::set_current_dir(original_dir).unwrap();
    env::remove_var(TOKEN_VAR);
    env::remove_var(USERNAME_VAR);
}
