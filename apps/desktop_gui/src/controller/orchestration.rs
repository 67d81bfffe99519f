//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) {
    let cmd_name = match &cmd {
        BackendCommand::LoadProjects => "load_projects",
        BackendCommand::LoadExperiences => "load_experiences",
        BackendCommand::SubmitReachOut { .. } => "submit_reach_out",
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => tracing::debug!(command = cmd_name, "queued ui->backend command"),
        Err(TrySendError::Full(_)) => {
            *status = "UI command queue is full; please retry".to_string();
        }
        Err(TrySendError::Disconnected(_)) => {
            *status =
                "Backend command processor disconnected (possible startup/runtime failure)"
                    .to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;

    #[test]
    fn disconnected_queue_surfaces_status_message() {
        let (cmd_tx, cmd_rx) = bounded(1);
        drop(cmd_rx);

        let mut status = String::new();
        dispatch_backend_command(&cmd_tx, BackendCommand::LoadProjects, &mut status);

        assert!(status.contains("disconnected"));
    }

    #[test]
    fn full_queue_surfaces_retry_message() {
        let (cmd_tx, _cmd_rx) = bounded(1);
        cmd_tx.try_send(BackendCommand::LoadProjects).expect("fill");

        let mut status = String::new();
        dispatch_backend_command(&cmd_tx, BackendCommand::LoadExperiences, &mut status);

        assert!(status.contains("full"));
    }
}
