//! Common types and data structures

use serde::Serialize;

/// Persona the portfolio is presented as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Theme {
    Coffee,
    Hardware,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Coffee => Theme::Hardware,
            Theme::Hardware => Theme::Coffee,
        }
    }

    pub fn is_coffee(self) -> bool {
        self == Theme::Coffee
    }

    /// Name used inside the assistant prompt
    pub fn tag(self) -> &'static str {
        match self {
            Theme::Coffee => "COFFEE",
            Theme::Hardware => "HARDWARE",
        }
    }
}

/// Display language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Pt,
    En,
}

impl Language {
    pub fn toggled(self) -> Self {
        match self {
            Language::Pt => Language::En,
            Language::En => Language::Pt,
        }
    }

    /// Short code shown on the selection screen pill
    pub fn code(self) -> &'static str {
        match self {
            Language::Pt => "PT",
            Language::En => "EN",
        }
    }
}

/// Top-level screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Selection,
    Portfolio,
}

/// Difficulty badge on a project card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum QuestLevel {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl QuestLevel {
    pub fn label(self) -> &'static str {
        match self {
            QuestLevel::Common => "Common",
            QuestLevel::Rare => "Rare",
            QuestLevel::Epic => "Epic",
            QuestLevel::Legendary => "Legendary",
        }
    }
}

/// Game-like proficiency label on a skill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SkillLevel {
    Basic,
    Intermediate,
    Advanced,
    Master,
}

impl SkillLevel {
    pub fn label(self) -> &'static str {
        match self {
            SkillLevel::Basic => "Basic",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Master => "Master",
        }
    }

    /// Filled pips out of four, for the skill popover meter
    pub fn pips(self) -> usize {
        match self {
            SkillLevel::Basic => 1,
            SkillLevel::Intermediate => 2,
            SkillLevel::Advanced => 3,
            SkillLevel::Master => 4,
        }
    }
}
