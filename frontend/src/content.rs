use std::collections::HashSet;

use serde::Deserialize;

use crate::components::stacked_cards::DeckMode;
use crate::config;
use crate::error::ContentError;

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct SiteContent {
    pub owner: Owner,
    pub social: Vec<SocialLink>,
    pub about: About,
    pub cards: Vec<Card>,
    /// How the skills deck picks its active card.
    #[serde(default)]
    pub deck_mode: DeckMode,
    pub projects: Vec<Project>,
    pub experiences: Vec<Experience>,
    pub contact: Contact,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Owner {
    pub initials: String,
    pub first_name: String,
    pub last_name: String,
    pub tagline: String,
    pub welcome: String,
    pub email: String,
    pub phone: String,
    pub phone_display: String,
    pub resume_url: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct About {
    pub paragraphs: Vec<String>,
    pub closing: String,
    pub stats: Vec<Stat>,
    pub philosophy: Vec<String>,
    pub status: Vec<String>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Stat {
    pub value: String,
    pub label: String,
    pub sublabel: String,
}

/// One panel of the stacked skills deck.
#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Card {
    pub id: String,
    pub number: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub gradient: Gradient,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub gradient: Gradient,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub period: String,
    pub description: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Contact {
    pub heading: Vec<String>,
    pub blurb: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Gradient {
    pub from: String,
    pub to: String,
}

impl Gradient {
    pub fn css(&self) -> String {
        format!("linear-gradient(135deg, {}, {})", self.from, self.to)
    }
}

impl SiteContent {
    /// Parses and validates the content document embedded in the binary.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(config::SITE_CONTENT_JSON)
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let content: SiteContent = serde_json::from_str(raw)?;
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.cards.is_empty() {
            return Err(ContentError::NoCards);
        }
        let mut seen = HashSet::new();
        for card in &self.cards {
            if !seen.insert(card.id.as_str()) {
                return Err(ContentError::DuplicateCardId(card.id.clone()));
            }
            if card.title.trim().is_empty() {
                return Err(ContentError::EmptyTitle(card.id.clone()));
            }
        }
        Ok(())
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.owner.email)
    }

    pub fn tel(&self) -> String {
        format!("tel:{}", self.owner.phone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal(cards: &str) -> String {
        format!(
            r#"{{
                "owner": {{"initials": "X", "first_name": "A", "last_name": "B", "tagline": "t",
                           "welcome": "w", "email": "a@b.c", "phone": "+1", "phone_display": "1",
                           "resume_url": "https://example.com/cv.pdf"}},
                "social": [],
                "about": {{"paragraphs": [], "closing": "", "stats": [], "philosophy": [], "status": []}},
                "cards": {cards},
                "projects": [],
                "experiences": [],
                "contact": {{"heading": ["Hi"], "blurb": ""}}
            }}"#
        )
    }

    #[test]
    fn embedded_content_loads() {
        let content = SiteContent::embedded().unwrap();
        assert_eq!(content.cards.len(), 4);
        let numbers: Vec<_> = content.cards.iter().map(|c| c.number.as_str()).collect();
        assert_eq!(numbers, ["01", "02", "03", "04"]);
        assert_eq!(content.projects.len(), 4);
        assert_eq!(content.experiences.len(), 4);
        assert!(content.owner.resume_url.ends_with(".pdf"));
    }

    #[test]
    fn skills_default_to_empty() {
        let raw = minimal(
            r##"[{"id": "1", "number": "01", "title": "T", "description": "d",
                  "gradient": {"from": "#000", "to": "#fff"}}]"##,
        );
        let content = SiteContent::from_json(&raw).unwrap();
        assert!(content.cards[0].skills.is_empty());
    }

    #[test]
    fn deck_mode_defaults_to_continuous_and_accepts_latched() {
        let cards = r##"[{"id": "1", "number": "01", "title": "T", "description": "d",
                          "gradient": {"from": "#000", "to": "#fff"}}]"##;
        let content = SiteContent::from_json(&minimal(cards)).unwrap();
        assert_eq!(content.deck_mode, DeckMode::Continuous);

        let raw = minimal(cards).replacen("\"projects\"", "\"deck_mode\": \"latched\", \"projects\"", 1);
        let content = SiteContent::from_json(&raw).unwrap();
        assert_eq!(content.deck_mode, DeckMode::Latched);
    }

    #[test]
    fn rejects_duplicate_card_ids() {
        let raw = minimal(
            r##"[{"id": "1", "number": "01", "title": "T", "description": "d",
                  "gradient": {"from": "#000", "to": "#fff"}},
                 {"id": "1", "number": "02", "title": "U", "description": "d",
                  "gradient": {"from": "#000", "to": "#fff"}}]"##,
        );
        assert!(matches!(
            SiteContent::from_json(&raw),
            Err(ContentError::DuplicateCardId(id)) if id == "1"
        ));
    }

    #[test]
    fn rejects_empty_deck_and_blank_titles() {
        assert!(matches!(
            SiteContent::from_json(&minimal("[]")),
            Err(ContentError::NoCards)
        ));
        let raw = minimal(
            r##"[{"id": "7", "number": "01", "title": "  ", "description": "d",
                  "gradient": {"from": "#000", "to": "#fff"}}]"##,
        );
        assert!(matches!(
            SiteContent::from_json(&raw),
            Err(ContentError::EmptyTitle(id)) if id == "7"
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            SiteContent::from_json("{ not json"),
            Err(ContentError::Parse(_))
        ));
    }

    #[test]
    fn gradient_renders_as_linear_gradient() {
        let g = Gradient { from: "#111".into(), to: "#222".into() };
        assert_eq!(g.css(), "linear-gradient(135deg, #111, #222)");
    }
}
