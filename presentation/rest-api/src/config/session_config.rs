use std::env;

use chrono::Duration;
use memory::session::repository::DEFAULT_IDLE_TTL_MINUTES;

/// Idle lifetime of a visitor session
///
/// Environment variables:
/// - SESSION_IDLE_TTL_MINUTES: minutes without activity before a session and
///   its cart are dropped (default: 60, also used when not a positive number)
pub fn load_idle_ttl() -> Duration {
    let minutes = env::var("SESSION_IDLE_TTL_MINUTES")
        .ok()
        .and_then(|raw| parse_minutes(&raw))
        .unwrap_or(DEFAULT_IDLE_TTL_MINUTES);
    Duration::minutes(minutes)
}

fn parse_minutes(raw: &str) -> Option<i64> {
    match raw.trim().parse::<i64>() {
        Ok(minutes) if minutes > 0 => Some(minutes),
        _ => {
            tracing::warn!(
                value = raw,
                "invalid SESSION_IDLE_TTL_MINUTES, using {}",
                DEFAULT_IDLE_TTL_MINUTES
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_positive_minutes() {
        assert_eq!(parse_minutes(" 15 "), Some(15));
    }

    #[test]
    fn should_reject_zero_negative_and_garbage() {
        assert_eq!(parse_minutes("0"), None);
        assert_eq!(parse_minutes("-5"), None);
        assert_eq!(parse_minutes("soon"), None);
    }
}
