use serde::{Deserialize, Serialize};

use crate::typewriter::Phrase;

/// Name of the link promoted to its own button in the sidebar.
pub const LAB_LINK_NAME: &str = "Lab Homepage";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub name: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub institution: String,
    pub email: String,
    pub location: String,
    #[serde(default)]
    pub avatar_url: String,
    /// Markdown.
    pub bio: String,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub social_links: Vec<Link>,
}

impl Profile {
    pub fn lab_link(&self) -> Option<&Link> {
        self.social_links.iter().find(|link| link.name == LAB_LINK_NAME)
    }

    /// Social links other than the lab homepage.
    pub fn social_icons(&self) -> impl Iterator<Item = &Link> {
        self.social_links
            .iter()
            .filter(|link| link.name != LAB_LINK_NAME)
    }

    /// Last word of the name, used to spot the researcher in author lists.
    pub fn surname(&self) -> &str {
        self.name.split_whitespace().last().unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct News {
    pub id: String,
    pub date: String,
    /// Markdown.
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    pub id: String,
    pub title: String,
    pub authors: Vec<String>,
    pub venue: String,
    pub year: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default)]
    pub highlight: bool,
    #[serde(default, rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl Publication {
    /// True when `author` should be emphasised for the profile owner.
    ///
    /// Matches on the full name or on the surname alone, so abbreviated
    /// author entries are still caught.
    pub fn is_author_highlighted(author: &str, profile: &Profile) -> bool {
        author.contains(profile.name.as_str()) || author.contains(profile.surname())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub id: String,
    pub role: String,
    pub institution: String,
    pub period: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Everything shown on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    pub profile: Profile,
    /// Phrases cycled by the "I am researching" typewriter.
    #[serde(default = "crate::content::builtin::default_focus")]
    pub focus: Vec<Phrase>,
    #[serde(default)]
    pub news: Vec<News>,
    #[serde(default)]
    pub publications: Vec<Publication>,
    #[serde(default)]
    pub experience: Vec<Experience>,
}
