//! Outbound link tools
//!
//! Fixed profile links from the screen footer. Opening them is left to the
//! client.

use serde::Serialize;

pub const GITHUB_URL: &str = "https://github.com/Shadow9887";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/margarit-dragos-18009226b/";

/// Footer credits shown under the links
pub const ABOUT: &str = "Built with Rust & rmcp\nOpen Source • Freeware\nMade by Dragos Margarit";

#[derive(Debug, Clone, Serialize)]
pub struct Link {
    pub name: &'static str,
    pub label: &'static str,
    pub url: &'static str,
}

pub static LINKS: [Link; 2] = [
    Link { name: "github", label: "GitHub profile", url: GITHUB_URL },
    Link { name: "linkedin", label: "LinkedIn profile", url: LINKEDIN_URL },
];

/// Response for get_links
#[derive(Debug, Serialize)]
pub struct LinksResponse {
    pub links: Vec<Link>,
    pub about: &'static str,
}

pub fn get_links() -> LinksResponse {
    LinksResponse {
        links: LINKS.to_vec(),
        about: ABOUT,
    }
}

/// Look up a link by name
pub fn find_link(name: &str) -> Option<&'static Link> {
    let lower = name.trim().to_lowercase();
    LINKS.iter().find(|l| l.name == lower)
}
