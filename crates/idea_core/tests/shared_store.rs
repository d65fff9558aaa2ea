use idea_core::{
    IdeaRepository, IdeaService, IdeaType, LogNotificationService, SharedIdeaRepository,
    ToDoDraft, ToDoUpdate,
};
use std::collections::BTreeSet;
use std::thread;

#[test]
fn concurrent_creates_get_unique_sequential_ids() {
    let repo = SharedIdeaRepository::new();

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let mut repo = repo.clone();
            thread::spawn(move || {
                (0..25)
                    .map(|n| repo.store(ToDoDraft::new(format!("w{worker}-{n}"), "")).id)
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let ids: BTreeSet<_> = handles
        .into_iter()
        .flat_map(|handle| handle.join().expect("worker should not panic"))
        .collect();

    assert_eq!(ids.len(), 100);
    assert_eq!(ids.iter().copied().collect::<Vec<_>>(), (1..=100).collect::<Vec<_>>());
    assert_eq!(repo.len(), 100);
}

#[test]
fn services_over_clones_see_the_same_store() {
    let repo = SharedIdeaRepository::new();
    let mut writer = IdeaService::new(LogNotificationService, repo.clone());
    let reader = IdeaService::new(LogNotificationService, repo);

    let to_do = writer.create(ToDoDraft::new("shared", "store"));
    writer.update(ToDoUpdate::new(to_do.id).done(true)).unwrap();

    let listed = reader.get_all_by_type(IdeaType::ToDo);
    assert_eq!(listed.len(), 1);
    assert!(listed[0].as_to_do().unwrap().done);
}

#[test]
fn concurrent_updates_to_one_idea_all_apply() {
    let repo = SharedIdeaRepository::new();
    let to_do = repo.clone().store(ToDoDraft::new("flip", ""));

    let handles: Vec<_> = (0..8)
        .map(|n| {
            let mut repo = repo.clone();
            thread::spawn(move || {
                repo.update(&ToDoUpdate::new(to_do.id).title(format!("title-{n}")).into())
                    .expect("idea exists with matching kind")
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("worker should not panic");
    }

    let stored = repo.get(to_do.id).unwrap();
    assert!(stored.title().starts_with("title-"));
    assert_eq!(repo.len(), 1);
}
