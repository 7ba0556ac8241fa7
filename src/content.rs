//! Static portfolio content: biography, experience, projects and skills

use crate::i18n::{l, Localized, LocalizedList, LocalizedStr};
use crate::types::{QuestLevel, SkillLevel, Theme};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PersonalInfo {
    pub name: &'static str,
    pub email: &'static str,
    pub linkedin: &'static str,
    pub github: &'static str,
    pub phone: &'static str,
    pub summary: Summary,
}

#[derive(Debug, Serialize)]
pub struct Summary {
    pub coffee: LocalizedStr,
    pub hardware: LocalizedStr,
}

impl PersonalInfo {
    pub fn summary_for(&self, theme: Theme) -> &LocalizedStr {
        match theme {
            Theme::Coffee => &self.summary.coffee,
            Theme::Hardware => &self.summary.hardware,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Experience {
    pub company: &'static str,
    pub role: LocalizedStr,
    pub period: LocalizedStr,
    pub location: &'static str,
    pub description: LocalizedList,
}

/// Flavor text shown on the project cards
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RpgStats {
    pub xp_gained: LocalizedStr,
    pub mana_cost: LocalizedStr,
    pub quest_level: QuestLevel,
    pub tech_class: LocalizedStr,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: &'static str,
    pub date: LocalizedStr,
    pub description: LocalizedList,
    pub long_description: Option<LocalizedStr>,
    pub images: &'static [&'static str],
    pub tech: &'static [&'static str],
    pub theme: Theme,
    pub github_url: Option<&'static str>,
    pub live_url: Option<&'static str>,
    pub rpg_stats: RpgStats,
}

#[derive(Debug, Serialize)]
pub struct SkillItem {
    pub name: &'static str,
    pub icon: &'static str,
    pub level: Option<SkillLevel>,
    pub details: Option<LocalizedList>,
}

#[derive(Debug, Serialize)]
pub struct Skill {
    pub category: LocalizedStr,
    pub items: &'static [SkillItem],
}

const fn list(pt: &'static [&'static str], en: &'static [&'static str]) -> LocalizedList {
    Localized::new(pt, en)
}

static PERSONAL_INFO: PersonalInfo = PersonalInfo {
    name: "Guilherme Araújo Floriano",
    email: "guilhermearaujo.floriano@gmail.com",
    linkedin: "https://www.linkedin.com/in/guilhermearaujo-dev/",
    github: "https://github.com/guiaf04",
    phone: "+55 (88) 98124-5517",
    summary: Summary {
        coffee: l(
            "Sou um desenvolvedor Backend Java com mais de dois anos de experiência na ZG Soluções, focado na construção de sistemas robustos, escaláveis e de alto processamento. Especialista em ecossistemas Spring Boot, mensageria com Kafka e processamento assíncrono de grandes volumes de dados. Minha missão é transformar requisitos complexos em soluções eficientes, com o cuidado e a precisão de um barista preparando o café perfeito.",
            "I am a Java Backend developer with more than two years of experience at ZG Soluções, focused on building robust, scalable, high-throughput systems. Specialist in the Spring Boot ecosystem, Kafka messaging and asynchronous processing of large data volumes. My mission is to turn complex requirements into efficient solutions, with the care and precision of a barista brewing the perfect coffee.",
        ),
        hardware: l(
            "Engenheiro de Sistemas Embarcados com profunda expertise em programação de baixo nível e design de hardware. Proficiente no desenvolvimento de microcontroladores (STM32, ESP32, Pi Pico) e SoCs, atuando desde o bare-metal até sistemas operacionais de tempo real (FreeRTOS) e Linux Embarcado. Experiência sólida em design de processadores com VHDL e síntese lógica em FPGAs.",
            "Embedded Systems Engineer with deep expertise in low-level programming and hardware design. Proficient in microcontroller (STM32, ESP32, Pi Pico) and SoC development, working from bare-metal up to real-time operating systems (FreeRTOS) and Embedded Linux. Solid experience in processor design with VHDL and logic synthesis on FPGAs.",
        ),
    },
};

static EXPERIENCES: [Experience; 2] = [
    Experience {
        company: "ZG Soluções",
        role: l("Desenvolvedor Backend Java", "Java Backend Developer"),
        period: l("Março 2023 – Atualmente", "March 2023 – Present"),
        location: "Ceará, Brasil",
        description: list(
            &[
                "Desenvolvimento de soluções robustas para reconciliação de contas médicas, otimizando o ciclo de receita de hospitais.",
                "Engenharia de workflows de processamento de dados de alta performance utilizando Java e Groovy.",
                "Criação de Web Crawlers para leitura e submissão automatizada de centenas de guias médicas em minutos.",
                "Implementação de processamento assíncrono com Kafka para garantir resiliência do sistema.",
                "Manipulação avançada de arquivos PDF, CSV, XML e HTML com foco em performance.",
            ],
            &[
                "Built robust solutions for medical billing reconciliation, optimizing hospital revenue cycles.",
                "Engineered high-performance data processing workflows using Java and Groovy.",
                "Created web crawlers that read and submit hundreds of medical forms in minutes.",
                "Implemented asynchronous processing with Kafka to keep the system resilient.",
                "Advanced handling of PDF, CSV, XML and HTML files with a focus on performance.",
            ],
        ),
    },
    Experience {
        company: "Programa de Iniciação à Docência (UFC)",
        role: l(
            "Monitor de Arquitetura de Computadores",
            "Computer Architecture Teaching Assistant",
        ),
        period: l("Março 2023 – Novembro 2024", "March 2023 – November 2024"),
        location: "Quixadá, CE",
        description: list(
            &[
                "Instrução de alunos em aulas práticas sobre operação de equipamentos eletrônicos e design de circuitos digitais.",
                "Auxílio no desenvolvimento de projetos práticos envolvendo microcontroladores e lógica digital.",
            ],
            &[
                "Taught students in lab sessions on operating electronic equipment and designing digital circuits.",
                "Helped develop hands-on projects involving microcontrollers and digital logic.",
            ],
        ),
    },
];

static PROJECTS: [Project; 4] = [
    Project {
        title: "Medical Billing Processor",
        date: l("Jan 2024", "Jan 2024"),
        description: list(
            &[
                "Sistema de processamento paralelo de faturas médicas em larga escala.",
                "Integração com múltiplos gateways de pagamento e reconciliação automática.",
            ],
            &[
                "Large-scale parallel processing system for medical invoices.",
                "Integration with multiple payment gateways and automatic reconciliation.",
            ],
        ),
        long_description: Some(l(
            "Este projeto foi desenvolvido para resolver o gargalo de processamento em instituições de saúde de grande porte. Utilizando uma arquitetura orientada a eventos com Kafka, conseguimos desacoplar a recepção de arquivos da lógica de negócio pesada.",
            "This project was built to remove the processing bottleneck in large healthcare institutions. Using an event-driven architecture with Kafka, we decoupled file intake from the heavy business logic.",
        )),
        images: &[
            "https://images.unsplash.com/photo-1551288049-bbbda5366391?auto=format&fit=crop&q=80&w=800",
            "https://images.unsplash.com/photo-1460925895917-afdab827c52f?auto=format&fit=crop&q=80&w=800",
        ],
        tech: &["Java", "Spring Boot", "Kafka", "PostgreSQL"],
        theme: Theme::Coffee,
        github_url: Some("https://github.com/guiaf04"),
        live_url: None,
        rpg_stats: RpgStats {
            xp_gained: l("+5000 Maestria em Kafka", "+5000 Kafka Mastery"),
            mana_cost: l("160h / Alta Intensidade", "160h / High Intensity"),
            quest_level: QuestLevel::Legendary,
            tech_class: l("Necromante de Dados", "Data Necromancer"),
        },
    },
    Project {
        title: "Java Crawler Engine",
        date: l("Jul 2023", "Jul 2023"),
        description: list(
            &[
                "Motor de scraping dinâmico para portais médicos com bypass de CAPTCHA.",
                "Arquitetura escalável para rodar instâncias via Kubernetes.",
            ],
            &[
                "Dynamic scraping engine for medical portals with CAPTCHA bypass.",
                "Scalable architecture running instances on Kubernetes.",
            ],
        ),
        long_description: Some(l(
            "Desenvolvi um motor de automação capaz de navegar em sistemas legados governamentais e de operadoras de saúde.",
            "I built an automation engine able to navigate legacy government and health insurer systems.",
        )),
        images: &[
            "https://images.unsplash.com/photo-1558494949-ef010cbdcc48?auto=format&fit=crop&q=80&w=800",
            "https://images.unsplash.com/photo-1518433278988-d1430030096d?auto=format&fit=crop&q=80&w=800",
        ],
        tech: &["Java", "Groovy", "Selenium", "Redis"],
        theme: Theme::Coffee,
        github_url: Some("https://github.com/guiaf04"),
        live_url: None,
        rpg_stats: RpgStats {
            xp_gained: l("+3500 Visão de Automação", "+3500 Automation Insight"),
            mana_cost: l("80h / Foco Médio", "80h / Medium Focus"),
            quest_level: QuestLevel::Epic,
            tech_class: l("Sombra da Web", "Web Shadow"),
        },
    },
    Project {
        title: "Multisensorial Robot (Micro-ROS)",
        date: l("Out 2024", "Oct 2024"),
        description: list(
            &[
                "Robô móvel com Micro-ROS e mapeamento LIDAR.",
                "Premiado com o 2º lugar na competição XV SBESC.",
            ],
            &[
                "Mobile robot with Micro-ROS and LIDAR mapping.",
                "Awarded 2nd place at the XV SBESC competition.",
            ],
        ),
        long_description: Some(l(
            "Projeto de ponta integrando a stack ROS2 em microcontroladores de baixo custo.",
            "Cutting-edge project bringing the ROS2 stack to low-cost microcontrollers.",
        )),
        images: &[
            "https://images.unsplash.com/photo-1535378917042-10a22c95931a?auto=format&fit=crop&q=80&w=800",
            "https://images.unsplash.com/photo-1485827404703-89b55fcc595e?auto=format&fit=crop&q=80&w=800",
        ],
        tech: &["Micro-ROS", "Raspberry Pi Pico W", "C++", "LIDAR"],
        theme: Theme::Hardware,
        github_url: Some("https://github.com/guiaf04"),
        live_url: None,
        rpg_stats: RpgStats {
            xp_gained: l("+8000 Sincronia em Tempo Real", "+8000 Real-Time Sync"),
            mana_cost: l("200h / Precisão Extrema", "200h / Extreme Precision"),
            quest_level: QuestLevel::Legendary,
            tech_class: l("Guardião de Silício", "Silicon Warden"),
        },
    },
    Project {
        title: "MIPS 32-bit Processor",
        date: l("Jun 2024", "Jun 2024"),
        description: list(
            &[
                "Projeto de processador MIPS 32 bits em VHDL.",
                "Pipeline de 5 estágios validado em FPGA.",
            ],
            &[
                "32-bit MIPS processor designed in VHDL.",
                "5-stage pipeline validated on an FPGA.",
            ],
        ),
        long_description: Some(l(
            "Uma imersão profunda em arquitetura de computadores. Desenvolvi toda a lógica de um processador MIPS funcional do zero.",
            "A deep dive into computer architecture. I built all the logic of a working MIPS processor from scratch.",
        )),
        images: &[
            "https://images.unsplash.com/photo-1518770660439-4636190af475?auto=format&fit=crop&q=80&w=800",
            "https://images.unsplash.com/photo-1555664424-778a1e5e1b48?auto=format&fit=crop&q=80&w=800",
        ],
        tech: &["VHDL", "Vivado", "FPGAs"],
        theme: Theme::Hardware,
        github_url: Some("https://github.com/guiaf04"),
        live_url: None,
        rpg_stats: RpgStats {
            xp_gained: l("+4500 Maestria Lógica", "+4500 Logic Mastery"),
            mana_cost: l("120h / Pensamento Profundo", "120h / Deep Thinking"),
            quest_level: QuestLevel::Epic,
            tech_class: l("Tecelão de Portas", "Gate Weaver"),
        },
    },
];

static COFFEE_SKILLS: [Skill; 2] = [
    Skill {
        category: l("Linguagens & Core", "Languages & Core"),
        items: &[
            SkillItem {
                name: "Java 17+",
                icon: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/java/java-original.svg",
                level: Some(SkillLevel::Master),
                details: Some(list(
                    &["Streams API & Lambdas", "Tuning de performance da JVM", "Multithreading & Concorrência"],
                    &["Streams API & Lambdas", "JVM Performance Tuning", "Multithreading & Concurrency"],
                )),
            },
            SkillItem {
                name: "Groovy",
                icon: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/groovy/groovy-original.svg",
                level: Some(SkillLevel::Advanced),
                details: Some(list(
                    &["Scripting dinâmico", "DSLs customizadas", "Integração com Jenkins"],
                    &["Dynamic Scripting", "Custom DSLs", "Integration with Jenkins"],
                )),
            },
            SkillItem {
                name: "SQL",
                icon: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/postgresql/postgresql-original.svg",
                level: Some(SkillLevel::Advanced),
                details: Some(list(
                    &["Consultas complexas", "Otimização de queries", "Mapeamento relacional"],
                    &["Complex Queries", "Query Optimization", "Relational Mapping"],
                )),
            },
        ],
    },
    Skill {
        category: l("Frameworks & Ferramentas", "Frameworks & Tools"),
        items: &[
            SkillItem {
                name: "Spring Boot",
                icon: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/spring/spring-original.svg",
                level: Some(SkillLevel::Master),
                details: Some(list(
                    &["Spring Security & OAuth2", "Microsserviços com Spring Cloud", "Data JPA & Hibernate"],
                    &["Spring Security & OAuth2", "Microservices with Spring Cloud", "Data JPA & Hibernate"],
                )),
            },
            SkillItem {
                name: "Apache Kafka",
                icon: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/apachekafka/apachekafka-original.svg",
                level: Some(SkillLevel::Advanced),
                details: Some(list(
                    &["Arquiteturas orientadas a eventos", "Consumer Groups & Offsets", "Processamento resiliente de mensagens"],
                    &["Event-Driven Architectures", "Consumer Groups & Offsets", "Resilient Message Processing"],
                )),
            },
            SkillItem {
                name: "Docker",
                icon: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/docker/docker-original.svg",
                level: Some(SkillLevel::Intermediate),
                details: Some(list(
                    &["Conteinerização", "Docker Compose", "Otimização de recursos"],
                    &["Containerization", "Docker Compose", "Resource Optimization"],
                )),
            },
        ],
    },
];

static HARDWARE_SKILLS: [Skill; 2] = [
    Skill {
        category: l("Baixo Nível", "Low Level"),
        items: &[
            SkillItem {
                name: "C/C++",
                icon: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/cplusplus/cplusplus-original.svg",
                level: Some(SkillLevel::Master),
                details: Some(list(
                    &["Gerenciamento de ponteiros", "Acesso direto a registradores", "Eficiência algorítmica"],
                    &["Pointer Management", "Direct Register Access", "Algorithm Efficiency"],
                )),
            },
            SkillItem {
                name: "Assembly",
                icon: "https://img.icons8.com/ios-filled/50/processor.png",
                level: Some(SkillLevel::Advanced),
                details: Some(list(
                    &["Entendimento de ISA (MIPS/RISC-V)", "Otimização de seções críticas", "Debugger & Disassembler"],
                    &["ISA Understanding (MIPS/RISC-V)", "Optimization for Critical Sections", "Debugger & Disassembler"],
                )),
            },
            SkillItem {
                name: "VHDL",
                icon: "https://img.icons8.com/ios/50/chip.png",
                level: Some(SkillLevel::Advanced),
                details: Some(list(
                    &["Projeto de FSMs", "Lógica sintetizável", "Fluxos com Vivado & ModelSim"],
                    &["FSM Design", "Synthesizable Logic", "Vivado & ModelSim Workflows"],
                )),
            },
        ],
    },
    Skill {
        category: l("Plataformas & Sistemas", "Platforms & Systems"),
        items: &[
            SkillItem {
                name: "FreeRTOS",
                icon: "https://img.icons8.com/color/48/freertos.png",
                level: Some(SkillLevel::Advanced),
                details: Some(list(
                    &["Escalonamento de tarefas", "Comunicação entre tarefas (Mutex/Filas)", "Restrições de tempo real"],
                    &["Task Scheduling", "Inter-task Comm (Mutex/Queues)", "Real-time Constraints"],
                )),
            },
            SkillItem {
                name: "STM32",
                icon: "https://img.icons8.com/color/48/stm32.png",
                level: Some(SkillLevel::Advanced),
                details: Some(list(
                    &["Bibliotecas HAL & LL", "DMA & Interrupções", "Periféricos (I2C, SPI, UART)"],
                    &["HAL & LL Libraries", "DMA & Interrupts", "Peripherals (I2C, SPI, UART)"],
                )),
            },
            SkillItem {
                name: "Embedded Linux",
                icon: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/linux/linux-original.svg",
                level: Some(SkillLevel::Intermediate),
                details: Some(list(
                    &["Compilação de kernel", "Device Trees", "Noções de Buildroot/Yocto"],
                    &["Kernel Compilation", "Device Trees", "Buildroot/Yocto Basics"],
                )),
            },
        ],
    },
];

pub fn personal_info() -> &'static PersonalInfo {
    &PERSONAL_INFO
}

pub fn experiences() -> &'static [Experience] {
    &EXPERIENCES
}

pub fn projects() -> &'static [Project] {
    &PROJECTS
}

/// Projects tagged with the given theme, in declaration order
pub fn projects_for(theme: Theme) -> Vec<&'static Project> {
    PROJECTS.iter().filter(|p| p.theme == theme).collect()
}

pub fn skills_for(theme: Theme) -> &'static [Skill] {
    match theme {
        Theme::Coffee => &COFFEE_SKILLS,
        Theme::Hardware => &HARDWARE_SKILLS,
    }
}

/// Look up a skill entry by name within a theme's skill tree
pub fn find_skill(theme: Theme, name: &str) -> Option<&'static SkillItem> {
    skills_for(theme)
        .iter()
        .flat_map(|cat| cat.items.iter())
        .find(|item| item.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projects_split_by_theme() {
        let coffee = projects_for(Theme::Coffee);
        let hardware = projects_for(Theme::Hardware);
        assert_eq!(coffee.len() + hardware.len(), projects().len());
        assert!(coffee.iter().all(|p| p.theme == Theme::Coffee));
        assert_eq!(hardware[0].title, "Multisensorial Robot (Micro-ROS)");
    }

    #[test]
    fn test_find_skill_is_scoped_to_theme() {
        assert!(find_skill(Theme::Coffee, "Apache Kafka").is_some());
        assert!(find_skill(Theme::Hardware, "Apache Kafka").is_none());
        assert_eq!(
            find_skill(Theme::Hardware, "STM32").and_then(|s| s.level),
            Some(SkillLevel::Advanced)
        );
    }

    #[test]
    fn test_localized_lists_have_matching_lengths() {
        for exp in experiences() {
            assert_eq!(exp.description.pt.len(), exp.description.en.len());
        }
        for project in projects() {
            assert_eq!(project.description.pt.len(), project.description.en.len());
        }
        for theme in [Theme::Coffee, Theme::Hardware] {
            for item in skills_for(theme).iter().flat_map(|c| c.items.iter()) {
                if let Some(details) = &item.details {
                    assert_eq!(details.pt.len(), details.en.len(), "{}", item.name);
                }
            }
        }
    }

    #[test]
    fn test_project_serializes_camel_case() {
        let json = serde_json::to_value(&projects()[0]).unwrap();
        assert_eq!(json["theme"], "COFFEE");
        assert_eq!(json["rpgStats"]["questLevel"], "Legendary");
        assert_eq!(json["rpgStats"]["xpGained"]["en"], "+5000 Kafka Mastery");
    }
}
