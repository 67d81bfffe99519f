//! Events flowing from the backend worker to the UI thread.

use shared::protocol::{Experience, Project};

#[derive(Debug)]
pub enum UiEvent {
    /// Complete replacement snapshot for the project gallery.
    ProjectsLoaded(Vec<Project>),
    /// Complete replacement snapshot for the experience timeline.
    ExperiencesLoaded(Vec<Experience>),
    /// A reach-out attempt settled; `notice` is either the server's message
    /// or the fixed fallback text.
    ReachOutSettled { notice: String },
    /// The worker could not start at all; surfaced once in the status line.
    WorkerFailed(String),
}
