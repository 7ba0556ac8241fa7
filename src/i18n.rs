//! Localized values and the UI string table

use crate::types::{Language, Theme};
use serde::Serialize;

/// A value carrying both a Portuguese and an English variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Localized<T> {
    pub pt: T,
    pub en: T,
}

impl<T> Localized<T> {
    pub const fn new(pt: T, en: T) -> Self {
        Self { pt, en }
    }

    pub fn get(&self, lang: Language) -> &T {
        match lang {
            Language::Pt => &self.pt,
            Language::En => &self.en,
        }
    }
}

pub type LocalizedStr = Localized<&'static str>;
pub type LocalizedList = Localized<&'static [&'static str]>;

/// Shorthand for a localized static string
pub const fn l(pt: &'static str, en: &'static str) -> LocalizedStr {
    Localized::new(pt, en)
}

/// Every piece of UI chrome text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Text {
    Barista,
    Architect,
    SelectCharacter,
    Versus,
    Summary,
    Path,
    TechStack,
    QuestLog,
    AssistantLabel,
    AssistantPlaceholder,
    AssistantError,
    AssistantEmpty,
    StatXp,
    StatMana,
    StatDifficulty,
    StatClass,
    StatCompletion,
    StatInspect,
    StatLevel,
    FooterCollab,
    FooterDiscuss,
    FooterNote,
    ModalTechStack,
    ModalGithub,
    ModalLive,
    NoImages,
    Contact,
    LanguageName,
    ThemeMode,
    BackToSelection,
}

/// Resolve a UI string for the active language and theme
pub fn tr(text: Text, lang: Language, theme: Theme) -> &'static str {
    let coffee = theme.is_coffee();
    let value = match text {
        Text::Barista => l("O Barista", "The Barista"),
        Text::Architect => l("O Arquiteto", "The Architect"),
        Text::SelectCharacter => l("SELECIONAR PERSONAGEM", "SELECT CHARACTER"),
        Text::Versus => l("VS", "VS"),
        Text::Summary => l("Resumo", "Summary"),
        Text::Path => l("Trajetória", "Path"),
        Text::TechStack => l("Tech Stack", "Tech Stack"),
        Text::QuestLog => l("Quest Log", "Quest Log"),
        Text::AssistantLabel if coffee => l("Assistente Barista", "Barista Assistant"),
        Text::AssistantLabel => l("Assistente Binário", "Binary Assistant"),
        Text::AssistantPlaceholder if coffee => {
            l("Ex: Como ele usa Kafka?", "Ex: How does he use Kafka?")
        }
        Text::AssistantPlaceholder => l(
            "Ex: Qual sua experiência com FPGAs?",
            "Ex: What's his experience with FPGAs?",
        ),
        Text::AssistantError => l("Erro ao conectar com a IA.", "Error connecting to AI."),
        Text::AssistantEmpty => l(
            "Desculpe, não consegui processar isso.",
            "Sorry, I couldn't process that.",
        ),
        Text::StatXp => l("XP Ganho", "XP Gained"),
        Text::StatMana => l("Mana / Tempo", "Mana / Time"),
        Text::StatDifficulty => l("Dificuldade", "Difficulty"),
        Text::StatClass => l("Classe", "Class"),
        Text::StatCompletion => l("Progresso", "Progress"),
        Text::StatInspect => l("Clique para inspecionar missão", "Click to inspect quest"),
        Text::StatLevel => l("NÍVEL", "LEVEL"),
        Text::FooterCollab => l("Interessado em colaborar?", "Interested in collaborating?"),
        Text::FooterDiscuss if coffee => l(
            "Sinta-se à vontade para entrar em contato para discutir backend distribuído.",
            "Feel free to reach out to discuss distributed backend.",
        ),
        Text::FooterDiscuss => l(
            "Sinta-se à vontade para entrar em contato para discutir sistemas de tempo real.",
            "Feel free to reach out to discuss real-time systems.",
        ),
        Text::FooterNote if coffee => l(
            "Processado com Java & Grãos Selecionados.",
            "Processed with Java & Selected Grains.",
        ),
        Text::FooterNote => l("Compiled for speed.", "Compiled for speed."),
        Text::ModalTechStack => l("Stack Tecnológica", "Technology Stack"),
        Text::ModalGithub => l("Ver no Github", "View on Github"),
        Text::ModalLive => l("Ver online", "View live"),
        Text::NoImages => l("Sem imagens", "No images"),
        Text::Contact => l("Contato", "Contact"),
        Text::LanguageName => l("PORTUGUÊS", "ENGLISH"),
        Text::ThemeMode if coffee => l("Modo Barista", "Barista Mode"),
        Text::ThemeMode => l("Modo Hardware", "Hardware Mode"),
        Text::BackToSelection => l("Trocar personagem", "Change character"),
    };
    *value.get(lang)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_localized_get() {
        let v = l("Olá", "Hello");
        assert_eq!(*v.get(Language::Pt), "Olá");
        assert_eq!(*v.get(Language::En), "Hello");
    }

    #[test]
    fn test_theme_dependent_strings() {
        assert_eq!(
            tr(Text::AssistantLabel, Language::En, Theme::Coffee),
            "Barista Assistant"
        );
        assert_eq!(
            tr(Text::AssistantLabel, Language::En, Theme::Hardware),
            "Binary Assistant"
        );
        assert_eq!(
            tr(Text::AssistantLabel, Language::Pt, Theme::Hardware),
            "Assistente Binário"
        );
    }

    #[test]
    fn test_error_string_per_language() {
        assert_eq!(
            tr(Text::AssistantError, Language::Pt, Theme::Coffee),
            "Erro ao conectar com a IA."
        );
        assert_eq!(
            tr(Text::AssistantError, Language::En, Theme::Hardware),
            "Error connecting to AI."
        );
    }

    #[test]
    fn test_hardware_footer_note_is_untranslated() {
        for lang in [Language::Pt, Language::En] {
            assert_eq!(tr(Text::FooterNote, lang, Theme::Hardware), "Compiled for speed.");
        }
        assert_eq!(
            tr(Text::FooterNote, Language::Pt, Theme::Coffee),
            "Processado com Java & Grãos Selecionados."
        );
    }
}
