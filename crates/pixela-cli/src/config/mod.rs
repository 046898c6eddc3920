//! Configuration loading and resolution.

use pixela::{Credentials, DEFAULT_ENDPOINT};

pub const TOKEN_VAR: &str = "PIXELA_USER_TOKEN";
pub const USERNAME_VAR: &str = "PIXELA_USERNAME";
pub const ENDPOINT_VAR: &str = "PIXELA_ENDPOINT";

/// Load a `.env` from the working directory or the nearest parent that has one.
///
/// Variables already set in the process win over the file.
pub fn load_dotenv() {
    match dotenv::dotenv() {
        Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => tracing::debug!("No .env file found"),
        Err(e) => tracing::warn!("Ignoring unreadable .env file: {e}"),
    }
}

/// Read the credentials from the process environment.
pub fn resolve_credentials() -> Credentials {
    resolve_credentials_with(env_lossy)
}

/// Read the credentials through `lookup`. Missing values become empty strings.
pub fn resolve_credentials_with<F>(lookup: F) -> Credentials
where
    F: Fn(&str) -> Option<String>,
{
    let credentials = Credentials {
        token: lookup(TOKEN_VAR).unwrap_or_default(),
        username: lookup(USERNAME_VAR).unwrap_or_default(),
    };

    if credentials.is_incomplete() {
        let missing: Vec<&str> = [
            (TOKEN_VAR, &credentials.token),
            (USERNAME_VAR, &credentials.username),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect();
        tracing::warn!("{} unset or empty; sending empty values", missing.join(", "));
    }

    credentials
}

/// Resolve the service endpoint.
pub fn resolve_endpoint(explicit: Option<&str>) -> String {
    resolve_endpoint_with(explicit, env_lossy)
}

pub fn resolve_endpoint_with<F>(explicit: Option<&str>, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(endpoint) = explicit {
        return endpoint.to_string();
    }

    if let Some(env_endpoint) = lookup(ENDPOINT_VAR).filter(|v| !v.is_empty()) {
        return env_endpoint;
    }

    DEFAULT_ENDPOINT.to_string()
}

/// A set variable that is not valid UTF-8 is kept, with bad bytes replaced.
fn env_lossy(key: &str) -> Option<String> {
    std::env::var_os(key).map(|value| value.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_credentials_from_env() {
        let creds = resolve_credentials_with(env(&[
            ("PIXELA_USER_TOKEN", "secret"),
            ("PIXELA_USERNAME", "alice"),
        ]));
        assert_eq!(creds, Credentials::new("secret", "alice"));
    }

    #[test]
    fn test_missing_credentials_become_empty() {
        let creds = resolve_credentials_with(env(&[]));
        assert_eq!(creds.token, "");
        assert_eq!(creds.username, "");

        let creds = resolve_credentials_with(env(&[("PIXELA_USERNAME", "alice")]));
        assert_eq!(creds.token, "");
        assert_eq!(creds.username, "alice");
    }

    #[test]
    fn test_empty_value_counts_as_missing() {
        let creds = resolve_credentials_with(env(&[
            ("PIXELA_USER_TOKEN", ""),
            ("PIXELA_USERNAME", "alice"),
        ]));
        assert!(creds.is_incomplete());
        assert_eq!(creds.username, "alice");
    }

    #[test]
    fn test_endpoint_precedence() {
        let lookup = env(&[("PIXELA_ENDPOINT", "http://env.example/v1")]);
        assert_eq!(
            resolve_endpoint_with(Some("http://flag.example/v1"), &lookup),
            "http://flag.example/v1"
        );
        assert_eq!(resolve_endpoint_with(None, &lookup), "http://env.example/v1");
        assert_eq!(resolve_endpoint_with(None, env(&[])), "https://pixe.la/v1");
        assert_eq!(
            resolve_endpoint_with(None, env(&[("PIXELA_ENDPOINT", "")])),
            "https://pixe.la/v1"
        );
    }
}
