use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub outbox_topic: String,
    pub seed_demo_users: bool,
    pub enable_graphiql: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            outbox_topic: "timesheets.v1".into(),
            seed_demo_users: false,
            enable_graphiql: true,
        }
    }
}

impl Config {
    /// Reads `.env` if present, then the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::parse(|key| std::env::var(key).ok())
    }

    pub fn parse(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();
        let bind_addr = match lookup("BIND_ADDR") {
            Some(raw) => raw
                .parse()
                .map_err(|e| anyhow::anyhow!("BIND_ADDR '{raw}': {e}"))?,
            None => defaults.bind_addr,
        };
        Ok(Self {
            bind_addr,
            outbox_topic: lookup("OUTBOX_TOPIC")
                .filter(|topic| !topic.trim().is_empty())
                .unwrap_or(defaults.outbox_topic),
            seed_demo_users: flag(&lookup, "SEED_DEMO_USERS", defaults.seed_demo_users)?,
            enable_graphiql: flag(&lookup, "ENABLE_GRAPHIQL", defaults.enable_graphiql)?,
        })
    }
}

fn flag(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: bool) -> anyhow::Result<bool> {
    match lookup(key).as_deref().map(str::trim).map(str::to_ascii_lowercase).as_deref() {
        None | Some("") => Ok(default),
        Some("1" | "true" | "yes" | "on") => Ok(true),
        Some("0" | "false" | "no" | "off") => Ok(false),
        Some(other) => anyhow::bail!("{key} must be a boolean, got '{other}'"),
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[rstest]
    fn it_should_fall_back_to_defaults() {
        assert_eq!(Config::parse(lookup(&[])).unwrap(), Config::default());
    }

    #[rstest]
    fn it_should_read_every_setting() {
        let config = Config::parse(lookup(&[
            ("BIND_ADDR", "127.0.0.1:3000"),
            ("OUTBOX_TOPIC", "hours.v2"),
            ("SEED_DEMO_USERS", "TRUE"),
            ("ENABLE_GRAPHIQL", "off"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.outbox_topic, "hours.v2");
        assert!(config.seed_demo_users);
        assert!(!config.enable_graphiql);
    }

    #[rstest]
    #[case("BIND_ADDR", "localhost")]
    #[case("SEED_DEMO_USERS", "maybe")]
    fn it_should_refuse_malformed_values(#[case] key: &str, #[case] value: &str) {
        assert!(Config::parse(lookup(&[(key, value)])).is_err());
    }
}
