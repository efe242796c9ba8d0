//! Built-in Digital Payments Architect question set

use super::{AnswerType, QuestionCatalog, QuestionItem, Section};

pub const CATALOG_TITLE: &str = "Digital Payments Architect Assessment";

/// Build the fixed 12-question catalog (4 per section)
///
/// The items are known-good, so the catalog is assembled directly; the
/// invariants are checked by this module's tests through
/// [`QuestionCatalog::new`].
pub fn payments_architect() -> QuestionCatalog {
    QuestionCatalog {
        title: CATALOG_TITLE.to_string(),
        items: items(),
    }
}

fn items() -> Vec<QuestionItem> {
    use Section::*;

    vec![
        QuestionItem::agreement(
            "psych_1",
            Psychometric,
            "Personality",
            "I prefer working with structured, well-defined systems rather than ambiguous, creative tasks.",
        ),
        QuestionItem::single_choice(
            "psych_2",
            Psychometric,
            "Interest",
            "Which activity would you find most engaging?",
            &[
                "Designing secure financial transaction flows",
                "Creating user interfaces for mobile apps",
                "Writing marketing copy for products",
                "Managing team projects and timelines",
            ],
        ),
        QuestionItem::agreement(
            "psych_3",
            Psychometric,
            "Motivation",
            "I enjoy learning about complex regulatory frameworks and compliance standards.",
        ),
        QuestionItem::single_choice(
            "psych_4",
            Psychometric,
            "Cognitive Style",
            "When solving problems, I prefer to:",
            &[
                "Follow established methodologies and best practices",
                "Experiment with creative, unconventional approaches",
                "Collaborate extensively with others for diverse perspectives",
                "Research thoroughly before taking any action",
            ],
        ),
        QuestionItem::single_choice(
            "tech_1",
            Technical,
            "Programming Knowledge",
            "What does PCI-DSS primarily regulate?",
            &[
                "Credit card data security standards",
                "API rate limiting protocols",
                "Database backup procedures",
                "User authentication methods",
            ],
        ),
        QuestionItem::single_choice(
            "tech_2",
            Technical,
            "Systems Thinking",
            "In a payment system, what is tokenization primarily used for?",
            &[
                "Replacing sensitive card data with secure tokens",
                "Encrypting network communications",
                "Managing user authentication sessions",
                "Optimizing database query performance",
            ],
        ),
        QuestionItem::agreement(
            "tech_3",
            Technical,
            "API Understanding",
            "I am comfortable working with REST APIs and webhook implementations.",
        ),
        QuestionItem::single_choice(
            "tech_4",
            Technical,
            "Financial Systems",
            "Which of these is NOT a common payment gateway?",
            &["Stripe", "PayPal", "MongoDB", "Razorpay"],
        ),
        QuestionItem::agreement(
            "wiscar_1",
            CareerReadiness,
            "Will",
            "I am willing to invest 6-12 months learning payment technologies and regulations.",
        ),
        QuestionItem::new(
            "wiscar_2",
            CareerReadiness,
            "Interest",
            "How interested are you in the financial technology sector?",
            AnswerType::Intensity {
                low_label: "Not interested".to_string(),
                high_label: "Extremely interested".to_string(),
            },
        ),
        QuestionItem::agreement(
            "wiscar_3",
            CareerReadiness,
            "Cognitive",
            "I can easily understand complex system architectures and data flows.",
        ),
        QuestionItem::single_choice(
            "wiscar_4",
            CareerReadiness,
            "Learning Ability",
            "When faced with a new technology, I typically:",
            &[
                "Dive deep into documentation and build test projects",
                "Watch tutorials and follow guided examples",
                "Ask colleagues and learn through collaboration",
                "Wait for formal training opportunities",
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_passes_validation() {
        let catalog = payments_architect();
        let validated = QuestionCatalog::new(CATALOG_TITLE, catalog.items().to_vec());
        assert!(validated.is_ok());
    }

    #[test]
    fn test_builtin_shape() {
        let catalog = payments_architect();
        assert_eq!(catalog.len(), 12);
        for section in Section::ALL {
            assert_eq!(catalog.section_len(section), 4);
        }
    }

    #[test]
    fn test_builtin_order() {
        let catalog = payments_architect();
        let ids: Vec<&str> = catalog.items().iter().map(|q| q.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "psych_1", "psych_2", "psych_3", "psych_4", "tech_1", "tech_2", "tech_3",
                "tech_4", "wiscar_1", "wiscar_2", "wiscar_3", "wiscar_4",
            ]
        );
    }

    #[test]
    fn test_builtin_answer_types() {
        let catalog = payments_architect();
        let wiscar_2 = catalog.find("wiscar_2").unwrap();
        assert_eq!(wiscar_2.max_value(), 10);

        let tech_4 = catalog.find("tech_4").unwrap();
        assert_eq!(tech_4.options()[2], "MongoDB");
        assert_eq!(tech_4.max_value(), 3);
    }
}
