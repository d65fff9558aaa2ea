mod common;

use common::{
    as_is, given_basic_idea, given_concept, given_there_are_no_ideas_created_yet, given_to_do,
    service_with,
};
use idea_core::{IdeaType, RecordingNotificationService, ToDoUpdate};

#[test]
fn returns_no_ideas_when_none_created_yet() {
    let notifications = RecordingNotificationService::new();
    let mut service = service_with(&notifications);
    given_there_are_no_ideas_created_yet(&mut service);

    for kind in IdeaType::ALL {
        assert!(service.get_all_by_type(kind).is_empty());
    }
}

#[test]
fn returns_no_ideas_when_only_other_kinds_exist() {
    let notifications = RecordingNotificationService::new();
    let mut service = service_with(&notifications);
    given_concept(&mut service, as_is);
    given_concept(&mut service, as_is);

    assert!(service.get_all_by_type(IdeaType::ToDo).is_empty());
}

#[test]
fn returns_one_to_do_when_one_was_created() {
    let notifications = RecordingNotificationService::new();
    let mut service = service_with(&notifications);
    given_to_do(&mut service, as_is);

    let ideas = service.get_all_by_type(IdeaType::ToDo);

    assert_eq!(ideas.len(), 1);
    assert!(ideas[0].as_to_do().is_some());
}

#[test]
fn returns_one_concept_when_one_was_created() {
    let notifications = RecordingNotificationService::new();
    let mut service = service_with(&notifications);
    given_concept(&mut service, as_is);

    let ideas = service.get_all_by_type(IdeaType::Concept);

    assert_eq!(ideas.len(), 1);
    assert_eq!(ideas[0].kind(), IdeaType::Concept);
}

#[test]
fn returns_only_matching_kind_in_insertion_order() {
    let notifications = RecordingNotificationService::new();
    let mut service = service_with(&notifications);
    let first = given_to_do(&mut service, |draft| draft.with_title("first"));
    given_concept(&mut service, as_is);
    given_basic_idea(&mut service, as_is);
    let second = given_to_do(&mut service, |draft| draft.with_title("second"));
    given_concept(&mut service, as_is);

    let ideas = service.get_all_by_type(IdeaType::ToDo);

    let ids: Vec<_> = ideas.iter().map(|idea| idea.id()).collect();
    assert_eq!(ids, vec![first.id, second.id]);
    assert_eq!(service.get_all_by_type(IdeaType::Concept).len(), 2);
    assert_eq!(service.get_all_by_type(IdeaType::BasicIdea).len(), 1);
}

#[test]
fn updates_do_not_reorder_results() {
    let notifications = RecordingNotificationService::new();
    let mut service = service_with(&notifications);
    let first = given_to_do(&mut service, as_is);
    let second = given_to_do(&mut service, as_is);

    service.update(ToDoUpdate::new(first.id).done(true)).unwrap();

    let ids: Vec<_> = service
        .get_all_by_type(IdeaType::ToDo)
        .iter()
        .map(|idea| idea.id())
        .collect();
    assert_eq!(ids, vec![first.id, second.id]);
}

#[test]
fn returns_basic_ideas_narrowed_to_their_record() {
    let notifications = RecordingNotificationService::new();
    let mut service = service_with(&notifications);
    let created = given_basic_idea(&mut service, |draft| {
        draft.with_title("Basic").with_description("Only one")
    });
    given_to_do(&mut service, as_is);

    let ideas = service.get_all_by_type(IdeaType::BasicIdea);

    assert_eq!(ideas.len(), 1);
    assert_eq!(ideas[0].as_basic_idea(), Some(&created));
    assert!(ideas[0].as_concept().is_none());
}
