use idea_core::{
    BasicIdea, Concept, ConceptDraft, ConceptUpdate, Idea, IdeaDraft, IdeaUpdate, ToDoUpdate,
};

#[test]
fn idea_serialization_uses_type_tag() {
    let idea = Idea::from(Concept {
        id: 5,
        title: "Concept".to_string(),
        description: "About things".to_string(),
        done: None,
        references: vec!["http://example.com".to_string()],
    });

    let json = serde_json::to_value(&idea).unwrap();
    assert_eq!(json["type"], "Concept");
    assert_eq!(json["id"], 5);
    assert!(json["done"].is_null());
    assert_eq!(json["references"][0], "http://example.com");

    let decoded: Idea = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, idea);
}

#[test]
fn basic_idea_decodes_from_tagged_object() {
    let value = serde_json::json!({
        "type": "BasicIdea",
        "id": 1,
        "title": "Test title",
        "description": "Test description"
    });

    let idea: Idea = serde_json::from_value(value).unwrap();
    assert_eq!(
        idea,
        Idea::BasicIdea(BasicIdea {
            id: 1,
            title: "Test title".to_string(),
            description: "Test description".to_string(),
        })
    );
}

#[test]
fn concept_update_distinguishes_missing_and_null_done() {
    let missing: IdeaUpdate = serde_json::from_value(serde_json::json!({
        "type": "Concept",
        "id": 2
    }))
    .unwrap();
    let null: IdeaUpdate = serde_json::from_value(serde_json::json!({
        "type": "Concept",
        "id": 2,
        "done": null
    }))
    .unwrap();

    assert_eq!(missing, IdeaUpdate::from(ConceptUpdate::new(2)));
    assert_eq!(null, IdeaUpdate::from(ConceptUpdate::new(2).done(None)));
}

#[test]
fn update_serialization_skips_omitted_fields() {
    let update = IdeaUpdate::from(ToDoUpdate::new(3).done(true));

    let json = serde_json::to_value(&update).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "type": "ToDo", "id": 3, "done": true })
    );
}

#[test]
fn draft_decodes_with_type_tag() {
    let value = serde_json::json!({
        "type": "Concept",
        "title": "t",
        "description": "d",
        "done": null,
        "references": []
    });

    let draft: IdeaDraft = serde_json::from_value(value).unwrap();
    assert_eq!(draft, IdeaDraft::from(ConceptDraft::new("t", "d")));
}
