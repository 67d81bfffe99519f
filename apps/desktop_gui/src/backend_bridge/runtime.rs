//! Worker thread that owns the tokio runtime and the portfolio API client.

use std::{sync::Arc, thread};

use client_core::{PortfolioApi, PortfolioClient};
use crossbeam_channel::{Receiver, Sender};
use tracing::{error, warn};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

/// Shown verbatim when a reach-out attempt fails for any reason.
pub const FALLBACK_REACH_OUT_NOTICE: &str = "Something went wrong. Please try again.";

pub fn launch(api_base_url: String, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::WorkerFailed(format!(
                    "backend worker startup failure: failed to build runtime: {err}"
                )));
                error!("failed to build backend runtime: {err}");
                return;
            }
        };

        let api: Arc<dyn PortfolioApi> = Arc::new(PortfolioClient::new(api_base_url));
        runtime.block_on(drive(api, cmd_rx, ui_tx));
    });
}

/// Drains the command queue until the UI side disconnects. Each command is
/// spawned as its own task so the two startup loads and a submit can all be
/// in flight at once; completion order is unconstrained.
async fn drive(api: Arc<dyn PortfolioApi>, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            BackendCommand::LoadProjects => {
                let api = api.clone();
                let ui_tx = ui_tx.clone();
                tokio::spawn(async move {
                    match api.fetch_projects().await {
                        // A completion landing after window teardown only hits
                        // the try_send error path and is dropped.
                        Ok(projects) => {
                            let _ = ui_tx.try_send(UiEvent::ProjectsLoaded(projects));
                        }
                        Err(err) => {
                            warn!("projects load failed, keeping previous snapshot: {err:#}");
                        }
                    }
                });
            }
            BackendCommand::LoadExperiences => {
                let api = api.clone();
                let ui_tx = ui_tx.clone();
                tokio::spawn(async move {
                    match api.fetch_experiences().await {
                        Ok(experiences) => {
                            let _ = ui_tx.try_send(UiEvent::ExperiencesLoaded(experiences));
                        }
                        Err(err) => {
                            warn!("experiences load failed, keeping previous snapshot: {err:#}");
                        }
                    }
                });
            }
            BackendCommand::SubmitReachOut { request } => {
                let api = api.clone();
                let ui_tx = ui_tx.clone();
                tokio::spawn(async move {
                    let notice = match api.send_reach_out(&request).await {
                        Ok(response) => response.message,
                        Err(err) => {
                            warn!("reach-out submit failed: {err:#}");
                            FALLBACK_REACH_OUT_NOTICE.to_string()
                        }
                    };
                    // Settlement is unconditional so the UI can always clear
                    // the in-flight flag and reset the form.
                    let _ = ui_tx.try_send(UiEvent::ReachOutSettled { notice });
                });
            }
        }
    }
}
