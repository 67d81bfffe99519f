use crossbeam_channel::{Receiver, Sender};
use shared::protocol::{Experience, Project, ReachOutRequest};

use crate::backend_bridge::commands::BackendCommand;
use crate::config::Settings;
use crate::content;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;
use crate::ui::{theme, widgets::Typewriter};

/// How long a settled-submit notice stays on screen, in UI ticks.
const NOTICE_TICKS: u64 = 120;

#[derive(Debug, Clone)]
pub(crate) struct Notice {
    pub(crate) text: String,
    pub(crate) expires_at_tick: u64,
}

pub struct PortfolioApp {
    pub(crate) cmd_tx: Sender<BackendCommand>,
    pub(crate) ui_rx: Receiver<UiEvent>,
    pub(crate) settings: Settings,

    pub(crate) projects: Vec<Project>,
    pub(crate) experiences: Vec<Experience>,

    pub(crate) form: ReachOutRequest,
    pub(crate) submitting: bool,

    pub(crate) notice: Option<Notice>,
    pub(crate) status: String,

    pub(crate) typewriter: Typewriter,
    pub(crate) scroll_to_contact: bool,
    theme_applied: bool,
    pub(crate) tick: u64,
}

impl PortfolioApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        settings: Settings,
    ) -> Self {
        let mut app = Self {
            cmd_tx,
            ui_rx,
            settings,
            projects: Vec::new(),
            experiences: Vec::new(),
            form: empty_form(),
            submitting: false,
            notice: None,
            status: String::new(),
            typewriter: Typewriter::new(content::TYPED_TITLES),
            scroll_to_contact: false,
            theme_applied: false,
            tick: 0,
        };

        // The two startup loads are independent; completion order does not
        // matter because they write disjoint state slots.
        dispatch_backend_command(&app.cmd_tx, BackendCommand::LoadProjects, &mut app.status);
        dispatch_backend_command(
            &app.cmd_tx,
            BackendCommand::LoadExperiences,
            &mut app.status,
        );
        app
    }

    pub(crate) fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::ProjectsLoaded(projects) => {
                    self.projects = projects;
                }
                UiEvent::ExperiencesLoaded(experiences) => {
                    self.experiences = experiences;
                }
                UiEvent::ReachOutSettled { notice } => {
                    // Settlement always clears the form, success or failure.
                    self.submitting = false;
                    self.form = empty_form();
                    self.notice = Some(Notice {
                        text: notice,
                        expires_at_tick: self.tick + NOTICE_TICKS,
                    });
                }
                UiEvent::WorkerFailed(message) => {
                    self.status = message;
                }
            }
        }
    }

    pub(crate) fn submit_contact_form(&mut self) {
        if self.submitting {
            return;
        }
        self.submitting = true;
        dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::SubmitReachOut {
                request: self.form.clone(),
            },
            &mut self.status,
        );
    }

    pub(crate) fn expire_notice(&mut self) {
        if let Some(notice) = &self.notice {
            if self.tick >= notice.expires_at_tick {
                self.notice = None;
            }
        }
    }
}

fn empty_form() -> ReachOutRequest {
    ReachOutRequest {
        name: String::new(),
        email: String::new(),
        text: String::new(),
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.tick = self.tick.wrapping_add(1);
        if !self.theme_applied {
            theme::apply(ctx);
            self.theme_applied = true;
        }

        self.process_ui_events();
        self.expire_notice();
        self.typewriter.advance();

        self.show_bottom_bar(ctx);
        self.show_page(ctx);

        // Steady cadence keeps the typewriter moving.
        ctx.request_repaint_after(std::time::Duration::from_millis(50));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;

    fn test_app() -> (
        PortfolioApp,
        Receiver<BackendCommand>,
        Sender<UiEvent>,
    ) {
        let (cmd_tx, cmd_rx) = bounded(16);
        let (ui_tx, ui_rx) = bounded(16);
        let app = PortfolioApp::new(cmd_tx, ui_rx, Settings::default());
        (app, cmd_rx, ui_tx)
    }

    fn sample_project(name: &str) -> Project {
        Project {
            name: name.to_string(),
            description: "desc".to_string(),
            skills: vec!["Rust".to_string()],
            link: None,
            repository: None,
        }
    }

    #[test]
    fn startup_dispatches_both_load_commands() {
        let (_app, cmd_rx, _ui_tx) = test_app();

        assert!(matches!(
            cmd_rx.try_recv().expect("first command"),
            BackendCommand::LoadProjects
        ));
        assert!(matches!(
            cmd_rx.try_recv().expect("second command"),
            BackendCommand::LoadExperiences
        ));
        assert!(cmd_rx.try_recv().is_err());
    }

    #[test]
    fn projects_snapshot_replaces_collection_wholesale() {
        let (mut app, _cmd_rx, ui_tx) = test_app();
        ui_tx
            .send(UiEvent::ProjectsLoaded(vec![
                sample_project("one"),
                sample_project("two"),
            ]))
            .expect("send");

        app.process_ui_events();
        assert_eq!(app.projects.len(), 2);
        assert_eq!(app.projects[0].name, "one");

        ui_tx
            .send(UiEvent::ProjectsLoaded(vec![sample_project("three")]))
            .expect("send");
        app.process_ui_events();
        assert_eq!(app.projects.len(), 1);
        assert_eq!(app.projects[0].name, "three");
    }

    #[test]
    fn submit_sets_flag_and_dispatches_form_snapshot() {
        let (mut app, cmd_rx, _ui_tx) = test_app();
        // Drain the two startup loads.
        cmd_rx.try_recv().expect("load projects");
        cmd_rx.try_recv().expect("load experiences");

        app.form.name = "Ann".to_string();
        app.form.email = "a@x.com".to_string();
        app.form.text = "Hi".to_string();
        app.submit_contact_form();

        assert!(app.submitting);
        match cmd_rx.try_recv().expect("submit command") {
            BackendCommand::SubmitReachOut { request } => {
                assert_eq!(request.name, "Ann");
                assert_eq!(request.email, "a@x.com");
                assert_eq!(request.text, "Hi");
            }
            _ => panic!("expected submit command"),
        }
    }

    #[test]
    fn duplicate_submit_while_in_flight_is_ignored() {
        let (mut app, cmd_rx, _ui_tx) = test_app();
        cmd_rx.try_recv().expect("load projects");
        cmd_rx.try_recv().expect("load experiences");

        app.submit_contact_form();
        app.submit_contact_form();

        assert!(cmd_rx.try_recv().is_ok());
        assert!(cmd_rx.try_recv().is_err());
    }

    #[test]
    fn settlement_resets_form_clears_flag_and_shows_notice() {
        let (mut app, _cmd_rx, ui_tx) = test_app();
        app.form.name = "Ann".to_string();
        app.form.email = "a@x.com".to_string();
        app.form.text = "Hi".to_string();
        app.submit_contact_form();
        assert!(app.submitting);

        ui_tx
            .send(UiEvent::ReachOutSettled {
                notice: "Thanks Ann".to_string(),
            })
            .expect("send");
        app.process_ui_events();

        assert!(!app.submitting);
        assert_eq!(app.form.name, "");
        assert_eq!(app.form.email, "");
        assert_eq!(app.form.text, "");
        assert_eq!(app.notice.as_ref().expect("notice").text, "Thanks Ann");
    }

    #[test]
    fn submitting_is_true_strictly_between_dispatch_and_settlement() {
        let (mut app, _cmd_rx, ui_tx) = test_app();
        assert!(!app.submitting);

        app.submit_contact_form();
        assert!(app.submitting);

        ui_tx
            .send(UiEvent::ReachOutSettled {
                notice: "ok".to_string(),
            })
            .expect("send");
        app.process_ui_events();
        assert!(!app.submitting);
    }

    #[test]
    fn notice_expires_after_its_tick_window() {
        let (mut app, _cmd_rx, ui_tx) = test_app();
        ui_tx
            .send(UiEvent::ReachOutSettled {
                notice: "ok".to_string(),
            })
            .expect("send");
        app.process_ui_events();
        assert!(app.notice.is_some());

        app.tick += NOTICE_TICKS;
        app.expire_notice();
        assert!(app.notice.is_none());
    }

    #[test]
    fn worker_failure_lands_in_status_line() {
        let (mut app, _cmd_rx, ui_tx) = test_app();
        ui_tx
            .send(UiEvent::WorkerFailed("backend worker startup failure".to_string()))
            .expect("send");
        app.process_ui_events();
        assert!(app.status.contains("startup failure"));
    }
}
