//! Given-style fixtures shared by idea integration tests.
#![allow(dead_code)]

use idea_core::{
    BasicIdea, BasicIdeaDraft, Concept, ConceptDraft, IdeaRepository, IdeaService,
    InMemoryIdeaRepository, NotificationService, RecordingNotificationService, ToDo, ToDoDraft,
};

pub type TestService<'n> = IdeaService<&'n RecordingNotificationService, InMemoryIdeaRepository>;

pub fn service_with(notifications: &RecordingNotificationService) -> TestService<'_> {
    IdeaService::new(notifications, InMemoryIdeaRepository::new())
}

pub fn given_there_are_no_ideas_created_yet<N, R>(service: &mut IdeaService<N, R>)
where
    N: NotificationService,
    R: IdeaRepository,
{
    service.repository_mut().truncate();
}

pub fn given_basic_idea<N, R>(
    service: &mut IdeaService<N, R>,
    given: impl FnOnce(BasicIdeaDraft) -> BasicIdeaDraft,
) -> BasicIdea
where
    N: NotificationService,
    R: IdeaRepository,
{
    service.create(given(BasicIdeaDraft::new(
        "Default title",
        "Default description",
    )))
}

pub fn given_to_do<N, R>(
    service: &mut IdeaService<N, R>,
    given: impl FnOnce(ToDoDraft) -> ToDoDraft,
) -> ToDo
where
    N: NotificationService,
    R: IdeaRepository,
{
    service.create(given(ToDoDraft::new("Default title", "Default description")))
}

pub fn given_concept<N, R>(
    service: &mut IdeaService<N, R>,
    given: impl FnOnce(ConceptDraft) -> ConceptDraft,
) -> Concept
where
    N: NotificationService,
    R: IdeaRepository,
{
    service.create(given(ConceptDraft::new(
        "Default title",
        "Default description",
    )))
}

/// Leaves the default draft untouched.
pub fn as_is<T>(draft: T) -> T {
    draft
}
