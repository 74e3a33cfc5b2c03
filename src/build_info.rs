//! Package metadata for the status tool and the startup banner

use serde::Serialize;

use crate::measure::{CONTAINERS, INGREDIENTS};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const NAME: &str = env!("CARGO_PKG_NAME");

pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");

/// What this binary was built as, and what it knows about
#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub authors: &'static str,
    pub ingredient_count: usize,
    pub container_count: usize,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            name: NAME,
            version: VERSION,
            description: DESCRIPTION,
            authors: AUTHORS,
            ingredient_count: INGREDIENTS.len(),
            container_count: CONTAINERS.len(),
        }
    }

    /// One-line summary, e.g. "cupcount 1.0.0 (4 ingredients, 3 containers)"
    pub fn summary(&self) -> String {
        format!(
            "{} {} ({} ingredients, {} containers)",
            self.name, self.version, self.ingredient_count, self.container_count
        )
    }
}

/// Print the startup banner to stderr
pub fn print_startup_banner() {
    let info = BuildInfo::current();
    eprintln!("===============================================");
    eprintln!("  {}", info.summary());
    eprintln!("  {}", info.description);
    eprintln!("===============================================");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_info_uses_package_metadata() {
        let info = BuildInfo::current();
        assert_eq!(info.name, "cupcount");
        assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(info.authors, "Dragos Margarit");
    }

    #[test]
    fn test_summary_counts_catalogs() {
        let info = BuildInfo::current();
        assert_eq!(
            info.summary(),
            format!("cupcount {} (4 ingredients, 3 containers)", VERSION)
        );
    }
}
