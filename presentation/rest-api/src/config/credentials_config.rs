use std::env;

use business::domain::session::value_objects::Role;
use memory::credentials::DemoCredential;

/// Load the demo login table
///
/// Environment variables:
/// - DEMO_CREDENTIALS: Comma-separated `username:password:role` triples
///   (default: `admin:admin123:admin,customer:customer123:customer`)
///
/// Malformed entries are skipped. If nothing usable remains the defaults apply.
pub fn load_credentials() -> Vec<DemoCredential> {
    match env::var("DEMO_CREDENTIALS") {
        Ok(raw) => {
            let credentials = parse_credentials(&raw);
            if credentials.is_empty() {
                tracing::warn!("DEMO_CREDENTIALS has no usable entry, using defaults");
                DemoCredential::defaults()
            } else {
                credentials
            }
        }
        Err(_) => DemoCredential::defaults(),
    }
}

fn parse_credentials(raw: &str) -> Vec<DemoCredential> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| {
            let parsed = parse_entry(entry);
            if parsed.is_none() {
                tracing::warn!(entry, "skipping malformed demo credential");
            }
            parsed
        })
        .collect()
}

fn parse_entry(entry: &str) -> Option<DemoCredential> {
    let mut parts = entry.splitn(3, ':');
    let username = parts.next()?.trim();
    let password = parts.next()?.trim();
    let role = parts.next()?.trim().parse::<Role>().ok()?;

    if username.is_empty() || password.is_empty() {
        return None;
    }
    Some(DemoCredential::new(username, password, role))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_username_password_role_triples() {
        let credentials = parse_credentials("alice:secret:admin, bob:hunter2:customer");

        assert_eq!(credentials.len(), 2);
        assert_eq!(credentials[0].username, "alice");
        assert_eq!(credentials[0].role, Role::Admin);
        assert_eq!(credentials[1].password, "hunter2");
        assert_eq!(credentials[1].role, Role::Customer);
    }

    #[test]
    fn should_skip_malformed_entries() {
        let credentials = parse_credentials("alice:secret,bob:pw:superuser,:pw:admin,carol:pw:customer");

        assert_eq!(credentials.len(), 1);
        assert_eq!(credentials[0].username, "carol");
    }

    #[test]
    fn should_return_nothing_for_blank_input() {
        assert!(parse_credentials(" , ").is_empty());
    }
}
