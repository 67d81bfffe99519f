//! Backend commands queued from UI to backend worker.

use shared::protocol::ReachOutRequest;

pub enum BackendCommand {
    LoadProjects,
    LoadExperiences,
    SubmitReachOut { request: ReachOutRequest },
}
