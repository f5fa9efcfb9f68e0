use std::fs;
use std::path::Path;

use pf_navigation::section::SectionId;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Portfolio {
    pub metadata: SiteMetadata,
    pub profile: Profile,
    pub about: About,
    pub skills: Skills,
    pub experience: ExperienceSection,
    pub projects: Projects,
    pub contact: Contact,
}

/// Document metadata, used for the exported page head and the window title.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SiteMetadata {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub url: String,
    pub site_name: String,
    pub locale: String,
    pub author: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Profile {
    /// Short mark shown in the navigation bar
    pub brand: String,
    pub eyebrow: String,
    pub greeting: String,
    pub name: String,
    pub tagline: String,
    pub summary: String,
    pub image: Image,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Image {
    pub path: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct About {
    pub heading: String,
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub journey: Vec<Milestone>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Milestone {
    pub title: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub icon: String,
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default)]
    pub facts: Vec<Fact>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Fact {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub emphasized: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
    pub accent: Accent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Primary,
    Accent,
    Cyan,
    Purple,
    Green,
    Orange,
    Blue,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Skills {
    pub heading: String,
    #[serde(default)]
    pub groups: Vec<SkillGroup>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SkillGroup {
    pub title: String,
    pub icon: String,
    pub accent: Accent,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ExperienceSection {
    pub heading: String,
    #[serde(default)]
    pub entries: Vec<Experience>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Experience {
    pub category: String,
    pub title: String,
    pub subtitle: String,
    pub organization: String,
    pub date: String,
    pub icon: String,
    pub accent: Accent,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Projects {
    pub heading: String,
    #[serde(default)]
    pub entries: Vec<Project>,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub image_query: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Contact {
    pub heading: String,
    pub blurb: String,
    #[serde(default)]
    pub cards: Vec<ContactCard>,
    #[serde(default)]
    pub socials: Vec<Link>,
    pub footer: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Email,
    Phone,
    LinkedIn,
    GitHub,
    Website,
}

impl LinkKind {
    pub fn icon(&self) -> &'static str {
        match self {
            LinkKind::Email => "✉",
            LinkKind::Phone => "☎",
            LinkKind::LinkedIn => "in",
            LinkKind::GitHub => "🐙",
            LinkKind::Website => "🌐",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ContactCard {
    pub kind: LinkKind,
    pub label: String,
    pub value: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Link {
    pub kind: LinkKind,
    pub label: String,
    pub href: String,
}

const ALLOWED_SCHEMES: [&str; 3] = ["mailto:", "tel:", "https://"];

fn check_link(label: &str, href: &str) -> Result<()> {
    if ALLOWED_SCHEMES.iter().any(|scheme| href.starts_with(scheme)) {
        Ok(())
    } else {
        Err(Error::InvalidLink {
            label: label.to_string(),
            href: href.to_string(),
        })
    }
}

impl Portfolio {
    pub fn builtin() -> Self {
        crate::builtin::portfolio()
    }

    pub fn from_json(content: &[u8]) -> Result<Self> {
        let portfolio: Portfolio = serde_json::from_slice(content)?;
        portfolio.validate()?;

        Ok(portfolio)
    }

    pub fn load(path: &Path) -> Result<Self> {
        info!(path = %path.display(), "Load portfolio content");

        let content = fs::read(path)?;
        Self::from_json(&content)
    }

    /// Load content from `path`, falling back to the built-in page when the
    /// file is absent or unusable.
    pub fn load_or_builtin(path: &Path) -> Self {
        if !path.exists() {
            info!("No content file found, using the built-in portfolio");
            return Self::builtin();
        }

        match Self::load(path) {
            Ok(portfolio) => portfolio,
            Err(e) => {
                warn!("Could not load content file, using the built-in portfolio: {}", e);
                Self::builtin()
            }
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.profile.name.trim().is_empty() {
            return Err(Error::MissingField("profile.name"));
        }
        if self.profile.brand.trim().is_empty() {
            return Err(Error::MissingField("profile.brand"));
        }
        if self.metadata.title.trim().is_empty() {
            return Err(Error::MissingField("metadata.title"));
        }

        for card in &self.contact.cards {
            check_link(&card.label, &card.href)?;
        }
        for social in &self.contact.socials {
            check_link(&social.label, &social.href)?;
        }

        Ok(())
    }

    /// Sections this content renders an element for, in page order.
    pub fn anchors(&self) -> Vec<SectionId> {
        SectionId::ALL
            .into_iter()
            .filter(|section| match section {
                SectionId::Experience => !self.experience.entries.is_empty(),
                SectionId::Projects => !self.projects.entries.is_empty(),
                SectionId::Home | SectionId::About | SectionId::Contact => true,
            })
            .collect()
    }
}

impl Default for Portfolio {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use pf_navigation::section::SectionId;

    use crate::error::Error;
    use crate::portfolio::{self as sut, LinkKind};

    #[test]
    fn builtin_content_is_valid() {
        let portfolio = sut::Portfolio::builtin();

        assert!(portfolio.validate().is_ok());
        assert_eq!(portfolio.profile.brand, "AKS");
        assert_eq!(portfolio.skills.groups.len(), 6);
        assert_eq!(portfolio.projects.entries.len(), 2);
    }

    #[test]
    fn builtin_content_has_every_anchor() {
        assert_eq!(sut::Portfolio::builtin().anchors(), SectionId::ALL.to_vec());
    }

    #[test]
    fn empty_projects_drop_the_anchor() {
        let mut portfolio = sut::Portfolio::builtin();
        portfolio.projects.entries.clear();

        assert_eq!(
            portfolio.anchors(),
            vec![
                SectionId::Home,
                SectionId::About,
                SectionId::Experience,
                SectionId::Contact
            ]
        );
    }

    #[test]
    fn json_round_trip_keeps_content() {
        let portfolio = sut::Portfolio::builtin();
        let json = portfolio.to_json().unwrap();

        let loaded = sut::Portfolio::from_json(json.as_bytes()).unwrap();

        assert_eq!(loaded, portfolio);
    }

    #[test]
    fn script_links_are_rejected() {
        let mut portfolio = sut::Portfolio::builtin();
        portfolio.contact.socials.push(sut::Link {
            kind: LinkKind::Website,
            label: "Sneaky".to_string(),
            href: "javascript:alert(1)".to_string(),
        });

        let result = portfolio.validate();

        assert!(matches!(
            result,
            Err(Error::InvalidLink { ref label, .. }) if label == "Sneaky"
        ));
    }

    #[test]
    fn plain_http_links_are_rejected() {
        let mut portfolio = sut::Portfolio::builtin();
        portfolio.contact.socials.push(sut::Link {
            kind: LinkKind::Website,
            label: "Blog".to_string(),
            href: "http://example.com".to_string(),
        });

        assert!(matches!(
            portfolio.validate(),
            Err(Error::InvalidLink { ref href, .. }) if href == "http://example.com"
        ));
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut portfolio = sut::Portfolio::builtin();
        portfolio.profile.name = "  ".to_string();

        assert!(matches!(
            portfolio.validate(),
            Err(Error::MissingField("profile.name"))
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_failure() {
        let result = sut::Portfolio::from_json(b"{\"profile\": 42}");

        assert!(matches!(result, Err(Error::ContentParseFailure(_))));
    }

    #[test]
    fn missing_file_falls_back_to_builtin() {
        let portfolio =
            sut::Portfolio::load_or_builtin(Path::new("./does/not/exist/portfolio.json"));

        assert_eq!(portfolio, sut::Portfolio::builtin());
    }

    #[test]
    fn unusable_file_falls_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();

        let malformed = dir.path().join("malformed.json");
        std::fs::write(&malformed, "{ not json").unwrap();
        assert_eq!(
            sut::Portfolio::load_or_builtin(&malformed),
            sut::Portfolio::builtin()
        );

        let mut portfolio = sut::Portfolio::builtin();
        portfolio.profile.name = "Someone Else".to_string();
        portfolio.contact.cards[0].href = "ftp://example.com".to_string();
        let invalid = dir.path().join("invalid.json");
        std::fs::write(&invalid, portfolio.to_json().unwrap()).unwrap();
        assert_eq!(
            sut::Portfolio::load_or_builtin(&invalid),
            sut::Portfolio::builtin()
        );
    }

    #[test]
    fn missing_file_is_a_read_failure() {
        let result = sut::Portfolio::load(Path::new("./does/not/exist/portfolio.json"));

        assert!(matches!(result, Err(Error::ContentReadFailure(_))));
    }
}
