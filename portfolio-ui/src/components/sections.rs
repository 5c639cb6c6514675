use dioxus::prelude::*;
use portfolio_core::{NavItem, ThemeClasses};

use crate::theme::use_theme;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Card {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub details: &'static [&'static str],
}

const ABOUT: &[Card] = &[Card {
    title: "The Journey",
    subtitle: "Software engineer and AI specialist",
    details: &[
        "Builds retrieval-augmented systems, machine learning pipelines and analytics platforms.",
        "Works across the stack, from data modelling to the interfaces people use.",
    ],
}];

const EDUCATION: &[Card] = &[
    Card {
        title: "Oregon State University",
        subtitle: "Master of Science - Computer Science",
        details: &[
            "Deep Learning",
            "Natural Language Processing",
            "System Design",
            "Database Management Systems",
        ],
    },
    Card {
        title: "Fr. Conceicao Rodrigues College of Engineering",
        subtitle: "Bachelor of Engineering - Computer Engineering",
        details: &[
            "Data Structures and Algorithms",
            "Computer Networks",
            "Artificial Intelligence",
        ],
    },
];

const SKILLS: &[Card] = &[
    Card {
        title: "Languages of Power",
        subtitle: "The languages that shape my thoughts",
        details: &["Python", "SQL", "JavaScript", "TypeScript"],
    },
    Card {
        title: "Forged Tools",
        subtitle: "Frameworks and platforms",
        details: &["PyTorch", "scikit-learn", "React", "PostgreSQL"],
    },
];

const PROJECTS: &[Card] = &[
    Card {
        title: "OSU Research Chatbot",
        subtitle: "The All-Seeing Eye of Knowledge",
        details: &["Retrieval-augmented assistant over university research material."],
    },
    Card {
        title: "Adult Income Prediction",
        subtitle: "Predicting the Realm's Prosperity",
        details: &["Classification pipeline with feature engineering and model comparison."],
    },
];

const EXPERIENCE: &[Card] = &[
    Card {
        title: "Graduate Teaching Assistant",
        subtitle: "Oregon State University",
        details: &["Supported graduate coursework, labs and grading."],
    },
    Card {
        title: "Data Analyst",
        subtitle: "Tata Consultancy Services",
        details: &["Built reporting and analytics for enterprise clients."],
    },
];

const CONTACT: &[Card] = &[Card {
    title: "Send a Raven",
    subtitle: "Based in San Francisco, CA",
    details: &["LinkedIn", "GitHub", "Medium"],
}];

/// Static cards rendered under a section anchor.
pub fn section_cards(id: &str) -> &'static [Card] {
    match id {
        "about" => ABOUT,
        "education" => EDUCATION,
        "skills" => SKILLS,
        "projects" => PROJECTS,
        "experience" => EXPERIENCE,
        "contact" => CONTACT,
        _ => &[],
    }
}

#[component]
pub fn ContentSection(item: NavItem, alternate: bool) -> Element {
    let theme = use_theme().state().current;
    let classes = ThemeClasses::for_theme(theme);
    let section_class = if alternate {
        classes.section_alternate.clone()
    } else {
        classes.section_light.clone()
    };
    let mut expanded = use_signal(|| None::<&'static str>);

    rsx! {
        div {
            class: "{section_class}",
            style: "min-height: 100vh; padding: 6rem 1.5rem 4rem;",

            div {
                style: "max-width: 64rem; margin: 0 auto;",

                h2 {
                    style: "font-family: var(--font-medieval); font-size: 2.25rem; margin-bottom: 0.25rem; color: var(--text-primary);",
                    "{item.primary}"
                }
                p {
                    style: "font-style: italic; margin-bottom: 2rem; color: var(--accent-primary);",
                    "{item.secondary}"
                }

                div {
                    style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr)); gap: 1.5rem;",
                    for card in section_cards(&item.id).iter().copied() {
                        div {
                            key: "{card.title}",
                            class: classes.card_background,
                            style: "padding: 1.5rem; border: 1px solid var(--border-color); border-radius: var(--radius-lg); background: var(--bg-secondary); cursor: pointer;",
                            onclick: move |_| {
                                let next = if expanded() == Some(card.title) { None } else { Some(card.title) };
                                expanded.set(next);
                            },
                            h3 { style: "margin: 0 0 0.25rem;", "{card.title}" }
                            p { style: "margin: 0; color: var(--text-secondary);", "{card.subtitle}" }
                            if expanded() == Some(card.title) {
                                ul {
                                    style: "margin-top: 1rem; padding-left: 1.25rem; color: var(--text-secondary);",
                                    for detail in card.details.iter() {
                                        li { key: "{detail}", "{detail}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
