//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `idea_core` linkage with a deterministic walk-through.
//! - Optionally start file logging from `IDEAS_LOG_DIR` / `IDEAS_LOG_LEVEL`.

use idea_core::{
    BasicIdeaDraft, BasicIdeaUpdate, IdeaService, IdeaType, InMemoryIdeaRepository,
    RecordingNotificationService,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Ok(log_dir) = std::env::var("IDEAS_LOG_DIR") {
        let level = std::env::var("IDEAS_LOG_LEVEL")
            .unwrap_or_else(|_| idea_core::default_log_level().to_string());
        if let Err(err) = idea_core::init_logging(&level, &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    println!("idea_core ping={}", idea_core::ping());
    println!("idea_core version={}", idea_core::core_version());

    let notifications = RecordingNotificationService::new();
    let mut service = IdeaService::new(&notifications, InMemoryIdeaRepository::new());

    let idea = service.create(BasicIdeaDraft::new("Test title", "Test description"));
    let steps = [
        BasicIdeaUpdate::new(idea.id).title("Changed title"),
        BasicIdeaUpdate::new(idea.id).description("Changed description"),
    ];
    for step in steps {
        if let Err(err) = service.update(step) {
            eprintln!("update failed: {err}");
            return ExitCode::FAILURE;
        }
    }

    println!(
        "idea_core basic_ideas={} notifications={}",
        service.get_all_by_type(IdeaType::BasicIdea).len(),
        notifications.count()
    );
    ExitCode::SUCCESS
}
