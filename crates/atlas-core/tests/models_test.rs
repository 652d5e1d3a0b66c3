use atlas_core::models::{Entry, RetrievalHit};

fn sample_entry() -> Entry {
    Entry::new(
        "llc-texas",
        "Business Setup & Management",
        "How do I properly set up an LLC in Texas?",
        "1. Choose a unique business name.\n2. File Form 205.",
        vec!["https://www.sos.state.tx.us/corp/forms/205_boc.pdf".to_string()],
    )
}

#[test]
fn document_text_joins_question_and_answer_with_space() {
    let entry = sample_entry();
    assert_eq!(
        entry.document_text(),
        "How do I properly set up an LLC in Texas? 1. Choose a unique business name.\n2. File Form 205."
    );
}

#[test]
fn entry_deserializes_without_optional_fields() {
    let json = r#"{"id": "faq-1", "question": "Q?", "answer": "A."}"#;
    let entry: Entry = serde_json::from_str(json).unwrap();
    assert_eq!(entry.category, "");
    assert!(entry.sources.is_empty());
}

#[test]
fn hit_copies_entry_fields_verbatim() {
    let entry = sample_entry();
    let hit = RetrievalHit::from_entry(1, &entry, 0.42);
    assert_eq!(hit.rank, 1);
    assert_eq!(hit.entry_id, entry.id);
    assert_eq!(hit.answer, entry.answer);
    assert_eq!(hit.sources, entry.sources);
    assert_eq!(hit.score, 0.42);
}

#[test]
fn hit_serializes_to_json_with_all_fields() {
    let hit = RetrievalHit::from_entry(2, &sample_entry(), 0.5);
    let value = serde_json::to_value(&hit).unwrap();
    for key in ["rank", "entry_id", "question", "category", "answer", "sources", "score"] {
        assert!(value.get(key).is_some(), "missing {key}");
    }
}
