use anyhow::{Context, Result};
use std::path::PathBuf;

/// Where the server listens and what it serves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub addr: String,
    pub port: u16,
    /// Bundle produced by the `ui` crate build (holds `index.html`).
    pub dist_dir: PathBuf,
    pub assets_dir: PathBuf,
}

impl SiteConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")); // = site/

        let port = match lookup("SITE_PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("SITE_PORT is not a port number: {raw:?}"))?,
            None => 3000,
        };

        Ok(Self {
            addr: lookup("SITE_ADDR").unwrap_or_else(|| "127.0.0.1".into()),
            port,
            dist_dir: lookup("SITE_DIST_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| root.join("../dist")),
            assets_dir: lookup("SITE_ASSETS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| root.join("../assets")),
        })
    }

    pub fn index_file(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_listen_on_localhost_3000() {
        let cfg = SiteConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.addr, "127.0.0.1");
        assert_eq!(cfg.port, 3000);
        assert!(cfg.dist_dir.ends_with("dist"));
        assert!(cfg.index_file().ends_with("dist/index.html"));
    }

    #[test]
    fn environment_overrides_every_field() {
        let cfg = SiteConfig::from_lookup(lookup(&[
            ("SITE_ADDR", "0.0.0.0"),
            ("SITE_PORT", "8080"),
            ("SITE_DIST_DIR", "/srv/landing"),
            ("SITE_ASSETS_DIR", "/srv/assets"),
        ]))
        .unwrap();
        assert_eq!(cfg.addr, "0.0.0.0");
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.index_file(), PathBuf::from("/srv/landing/index.html"));
        assert_eq!(cfg.assets_dir, PathBuf::from("/srv/assets"));
    }

    #[test]
    fn bad_port_is_an_error() {
        let err = SiteConfig::from_lookup(lookup(&[("SITE_PORT", "http")])).unwrap_err();
        assert!(err.to_string().contains("SITE_PORT"));
    }
}
