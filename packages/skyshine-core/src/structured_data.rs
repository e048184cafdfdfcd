//! schema.org JSON-LD for the FAQ section

use serde_json::{json, Value};

use crate::catalog::FaqEntry;

pub const JSON_LD_MIME: &str = "application/ld+json";

/// Build an `FAQPage` document from the FAQ entries.
pub fn faq_page(entries: &[FaqEntry]) -> Value {
    let questions: Vec<Value> = entries
        .iter()
        .map(|entry| {
            json!({
                "@type": "Question",
                "name": entry.question,
                "acceptedAnswer": {
                    "@type": "Answer",
                    "text": entry.answer,
                },
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "mainEntity": questions,
    })
}
