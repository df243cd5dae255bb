use leptos::*;

use crate::components::scroll_effects::Reveal;

pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
    pub category: &'static str,
}

pub static FAQ_ENTRIES: [FaqEntry; 5] = [
    FaqEntry {
        question: "How long does a typical project take?",
        answer: "Most websites are delivered in three to six weeks, depending on scope and feedback rounds.",
        category: "process",
    },
    FaqEntry {
        question: "Do you offer ongoing maintenance?",
        answer: "Yes. Monthly plans cover updates, backups and small content changes.",
        category: "services",
    },
    FaqEntry {
        question: "How is pricing structured?",
        answer: "Projects are quoted at a fixed price after a free discovery call.",
        category: "pricing",
    },
    FaqEntry {
        question: "Can you redesign an existing site?",
        answer: "Absolutely. We audit what you have and keep whatever still works.",
        category: "services",
    },
    FaqEntry {
        question: "What do you need from me to start?",
        answer: "Your goals, any brand assets and a point of contact for feedback.",
        category: "process",
    },
];

/// Accordion state after clicking item `clicked`: at most one item is open.
pub fn toggle_open(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

pub fn category_matches(selected: &str, category: &str) -> bool {
    selected.eq_ignore_ascii_case(ALL_CATEGORIES) || selected.eq_ignore_ascii_case(category)
}

/// Distinct categories in first-seen order, preceded by `all`.
pub fn categories(entries: &[FaqEntry]) -> Vec<&'static str> {
    let mut found = vec![ALL_CATEGORIES];
    for entry in entries {
        if !found.contains(&entry.category) {
            found.push(entry.category);
        }
    }
    found
}

#[component]
pub fn FaqAccordion() -> impl IntoView {
    let (open, set_open) = create_signal(None::<usize>);
    let (selected, set_selected) = create_signal(ALL_CATEGORIES);

    view! {
        <div class="faq-categories">
            {categories(&FAQ_ENTRIES)
                .into_iter()
                .map(|category| {
                    view! {
                        <button
                            class="faq-category"
                            class:active=move || selected.get() == category
                            on:click=move |_| set_selected.set(category)
                        >
                            {category}
                        </button>
                    }
                })
                .collect_view()}
        </div>
        <div class="faq-list">
            {FAQ_ENTRIES
                .iter()
                .enumerate()
                .map(|(index, &entry)| {
                    let visible = move || category_matches(selected.get(), entry.category);
                    view! {
                        <div
                            class="faq-item"
                            class:active=move || open.get() == Some(index)
                            style:display=move || if visible() { "block" } else { "none" }
                            data-category=entry.category
                        >
                            <Reveal>
                                <button
                                    class="faq-question"
                                    on:click=move |_| set_open.update(|o| *o = toggle_open(*o, index))
                                >
                                    {entry.question}
                                </button>
                                <div class="faq-answer">
                                    <p>{entry.answer}</p>
                                </div>
                            </Reveal>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_one_item_open() {
        let open = toggle_open(None, 2);
        assert_eq!(open, Some(2));
        let open = toggle_open(open, 0);
        assert_eq!(open, Some(0));
        assert_eq!(toggle_open(open, 0), None);
    }

    #[test]
    fn test_category_filter() {
        assert!(category_matches("all", "pricing"));
        assert!(category_matches("All", "process"));
        assert!(category_matches("Pricing", "pricing"));
        assert!(!category_matches("services", "pricing"));
    }

    #[test]
    fn test_categories_are_distinct() {
        assert_eq!(
            categories(&FAQ_ENTRIES),
            vec!["all", "process", "services", "pricing"]
        );
    }
}
