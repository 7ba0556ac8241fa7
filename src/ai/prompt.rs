//! Prompt assembly from the static portfolio content

use crate::content;
use crate::state::AiRequest;
use crate::types::{Language, Theme};
use tracing::warn;

fn answer_language(lang: Language) -> &'static str {
    match lang {
        Language::Pt => "Português",
        Language::En => "Inglês",
    }
}

fn theme_description(theme: Theme) -> &'static str {
    match theme {
        Theme::Coffee => "Backend Java/Cafeteria",
        Theme::Hardware => "Sistemas Embarcados/Hardware",
    }
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        warn!(error = %e, "Failed to serialize prompt context");
        String::from("[]")
    })
}

/// Build the full prompt sent to the completion endpoint
pub fn compose(request: &AiRequest) -> String {
    let info = content::personal_info();
    let theme = request.theme;
    let summary = info.summary_for(theme).get(request.lang);
    let projects = content::projects_for(theme);
    let skills = content::skills_for(theme);

    format!(
        "Você é o assistente virtual do {name}.\n\
         Informações contextuais:\n\
         Nome: {name}\n\
         Idioma de resposta: {language}\n\
         Tema atual visualizado pelo usuário: {theme_desc}\n\
         Resumo: {summary}\n\
         Experiência: {experiences}\n\
         Projetos de {tag}: {projects}\n\
         Habilidades de {tag}: {skills}\n\
         \n\
         Responda à seguinte pergunta do usuário sobre o {first_name} de forma curta e profissional: \"{question}\"\n",
        name = info.name,
        first_name = info.name.split_whitespace().next().unwrap_or(info.name),
        language = answer_language(request.lang),
        theme_desc = theme_description(theme),
        summary = summary,
        experiences = to_json(content::experiences()),
        tag = theme.tag(),
        projects = to_json(&projects),
        skills = to_json(skills),
        question = request.question.trim(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(theme: Theme, lang: Language, question: &str) -> AiRequest {
        AiRequest {
            question: question.to_string(),
            theme,
            lang,
        }
    }

    #[test]
    fn test_prompt_carries_question_and_language() {
        let prompt = compose(&request(Theme::Coffee, Language::En, "  How does he use Kafka?  "));
        assert!(prompt.contains("Guilherme Araújo Floriano"));
        assert!(prompt.contains("Idioma de resposta: Inglês"));
        assert!(prompt.contains("\"How does he use Kafka?\""));
        assert!(prompt.contains("Backend Java/Cafeteria"));
    }

    #[test]
    fn test_prompt_only_includes_theme_projects() {
        let prompt = compose(&request(Theme::Hardware, Language::Pt, "FPGA?"));
        assert!(prompt.contains("MIPS 32-bit Processor"));
        assert!(!prompt.contains("Java Crawler Engine"));
        assert!(prompt.contains("Projetos de HARDWARE"));
        assert!(prompt.contains("FreeRTOS"));
        assert!(!prompt.contains("Spring Boot"));
    }

    #[test]
    fn test_prompt_uses_localized_summary() {
        let pt = compose(&request(Theme::Hardware, Language::Pt, "?"));
        let en = compose(&request(Theme::Hardware, Language::En, "?"));
        assert!(pt.contains("Resumo: Engenheiro de Sistemas Embarcados"));
        assert!(en.contains("Resumo: Embedded Systems Engineer"));
    }

    #[test]
    fn test_prompt_includes_experiences_for_both_themes() {
        for theme in [Theme::Coffee, Theme::Hardware] {
            let prompt = compose(&request(theme, Language::Pt, "?"));
            assert!(prompt.contains("ZG Soluções"));
        }
    }
}
