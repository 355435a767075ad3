use std::env;

use notifier::inbox::DEFAULT_INBOX_CAPACITY;

#[derive(Debug, Clone)]
pub struct NotificationConfig {
    pub inbox_capacity: usize,
}

impl NotificationConfig {
    /// Environment variables:
    /// - NOTIFICATION_INBOX_CAPACITY: pending notifications kept before the
    ///   oldest are dropped (default: 50)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let inbox_capacity = match lookup("NOTIFICATION_INBOX_CAPACITY") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(
                    "Invalid NOTIFICATION_INBOX_CAPACITY {:?}, using {}",
                    raw,
                    DEFAULT_INBOX_CAPACITY
                );
                DEFAULT_INBOX_CAPACITY
            }),
            None => DEFAULT_INBOX_CAPACITY,
        };

        Self { inbox_capacity }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_capacity() {
        let config = NotificationConfig::from_lookup(|_| Some("12".to_string()));
        assert_eq!(config.inbox_capacity, 12);
    }

    #[test]
    fn should_fall_back_to_default_capacity() {
        assert_eq!(
            NotificationConfig::from_lookup(|_| None).inbox_capacity,
            DEFAULT_INBOX_CAPACITY
        );
        assert_eq!(
            NotificationConfig::from_lookup(|_| Some("many".to_string())).inbox_capacity,
            DEFAULT_INBOX_CAPACITY
        );
    }
}
