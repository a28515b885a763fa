//! # Hub Application Controller
//!
//! Owns the view model, the renderer and the input stream, and runs the
//! event loop. Each pass polls for one input line, applies whatever API
//! results have arrived, expires transient messages and redraws if anything
//! changed. API calls never block the loop; they are dispatched and their
//! results are picked up on a later pass.

use crate::hub::commands::HubCommand;
use crate::hub::io::{EventStream, InputEvent, RenderStream};
use crate::hub::services::UsersApi;
use crate::hub::view_models::HubViewModel;
use crate::hub::views::TerminalRenderer;
use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// How long one pass waits for input before servicing other work
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct AppController<ES: EventStream, RS: RenderStream> {
    view_model: HubViewModel,
    view_renderer: TerminalRenderer<RS>,
    event_stream: ES,
    should_quit: bool,
}

impl<ES: EventStream, RS: RenderStream> AppController<ES, RS> {
    /// Create a controller with injected API client and I/O streams
    pub fn with_io_streams(api: Arc<dyn UsersApi>, event_stream: ES, render_stream: RS) -> Self {
        Self {
            view_model: HubViewModel::new(api),
            view_renderer: TerminalRenderer::with_render_stream(render_stream),
            event_stream,
            should_quit: false,
        }
    }

    pub fn view_model(&self) -> &HubViewModel {
        &self.view_model
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Run the main application loop until quit or end of input
    pub async fn run(&mut self) -> Result<()> {
        self.view_model.mount();
        self.view_renderer.render_full(&self.view_model)?;

        while !self.should_quit {
            if let Some(event) = self.event_stream.next_event(POLL_INTERVAL).await? {
                self.handle_input(event);
            }
            self.tick()?;
        }

        tracing::debug!("Waiting for in-flight requests before exit");
        self.view_model.settle().await;
        self.tick()?;
        self.view_renderer.cleanup()
    }

    /// Apply arrived results, expire messages and redraw when needed
    fn tick(&mut self) -> Result<()> {
        self.view_model.process_pending_events();
        self.view_model.expire_transients(Instant::now());
        let view_events = self.view_model.collect_pending_view_events();
        self.view_renderer
            .handle_view_events(&view_events, &self.view_model)
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::Line(line) => match HubCommand::parse(&line) {
                Ok(Some(command)) => self.apply_command(command),
                Ok(None) => {}
                Err(e) => {
                    tracing::debug!("Rejected input '{line}': {e}");
                    self.view_model.show_error(e.to_string());
                }
            },
            InputEvent::EndOfInput => {
                tracing::debug!("End of input");
                self.should_quit = true;
            }
        }
    }

    pub fn apply_command(&mut self, command: HubCommand) {
        tracing::debug!("Applying command: {command:?}");
        match command {
            HubCommand::SetField { field, value } => self.view_model.set_form_field(field, value),
            HubCommand::Add { fields } => {
                for (field, value) in fields {
                    self.view_model.set_form_field(field, value);
                }
                self.view_model.submit_new_user();
            }
            HubCommand::Delete { user_id } => self.view_model.delete_user(user_id),
            HubCommand::RefreshLogs => self.view_model.refresh_logs(),
            HubCommand::ClearForm => self.view_model.clear_form(),
            HubCommand::Help => self.view_model.toggle_help(),
            HubCommand::Quit => self.should_quit = true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hub::io::{MockEventStream, MockRenderStream};
    use crate::hub::models::FormField;
    use crate::hub::services::RequestError;
    use crate::hub::testing::FakeUsersApi;
    use crate::hub::view_models::ERROR_BANNER_DURATION;
    use async_trait::async_trait;
    use std::collections::VecDeque;

    /// Replays lines, then waits out a number of idle polls before ending
    struct IdleEventStream {
        lines: VecDeque<String>,
        idle_polls: usize,
    }

    #[async_trait]
    impl EventStream for IdleEventStream {
        async fn next_event(&mut self, timeout: Duration) -> Result<Option<InputEvent>> {
            if let Some(line) = self.lines.pop_front() {
                return Ok(Some(InputEvent::Line(line)));
            }
            if self.idle_polls == 0 {
                return Ok(Some(InputEvent::EndOfInput));
            }
            self.idle_polls -= 1;
            tokio::time::sleep(timeout).await;
            Ok(None)
        }
    }

    fn controller(
        api: Arc<FakeUsersApi>,
        lines: &[&str],
    ) -> AppController<MockEventStream, MockRenderStream> {
        AppController::with_io_streams(
            api,
            MockEventStream::new(lines.iter().copied()),
            MockRenderStream::new(),
        )
    }

    #[tokio::test]
    async fn apply_command_should_fill_draft_before_submitting() {
        let api = Arc::new(FakeUsersApi::default());
        let mut app = controller(api.clone(), &[]);

        app.apply_command(HubCommand::Add {
            fields: vec![(FormField::UserId, "u1".to_string())],
        });
        assert_eq!(app.view_model().form().user_id, "u1");
        assert!(app.view_model().is_busy());
    }

    #[tokio::test]
    async fn invalid_input_should_show_error_banner() {
        let mut app = controller(Arc::new(FakeUsersApi::default()), &[]);
        app.handle_input(InputEvent::Line("bogus".to_string()));
        assert!(app
            .view_model()
            .error_message()
            .is_some_and(|m| m.contains("Unknown command 'bogus'")));
        assert!(!app.should_quit());
    }

    #[tokio::test]
    async fn quit_and_end_of_input_should_stop_the_loop() {
        let mut app = controller(Arc::new(FakeUsersApi::default()), &[]);
        app.apply_command(HubCommand::Quit);
        assert!(app.should_quit());

        let mut app = controller(Arc::new(FakeUsersApi::default()), &[]);
        app.handle_input(InputEvent::EndOfInput);
        assert!(app.should_quit());
    }

    #[tokio::test(start_paused = true)]
    async fn error_banner_should_clear_itself_while_idle() {
        let api = Arc::new(FakeUsersApi::default());
        api.fail_delete(RequestError::from_response(500, None));
        let render_stream = MockRenderStream::new();
        let output = render_stream.output_handle();

        // Idle for a little longer than the banner window
        let idle_polls =
            (ERROR_BANNER_DURATION.as_millis() / POLL_INTERVAL.as_millis()) as usize + 5;
        let mut app = AppController::with_io_streams(
            api,
            IdleEventStream {
                lines: VecDeque::from(["rm u1".to_string()]),
                idle_polls,
            },
            render_stream,
        );
        app.run().await.unwrap();

        assert_eq!(app.view_model().error_message(), None);
        assert!(!output.current_frame().contains("Request failed with status 500"));
    }

    #[tokio::test(start_paused = true)]
    async fn error_banner_should_survive_shorter_idle_periods() {
        let api = Arc::new(FakeUsersApi::default());
        api.fail_delete(RequestError::from_response(500, None));
        let mut app = AppController::with_io_streams(
            api,
            IdleEventStream {
                lines: VecDeque::from(["rm u1".to_string()]),
                idle_polls: 10,
            },
            MockRenderStream::new(),
        );
        app.run().await.unwrap();

        assert_eq!(
            app.view_model().error_message(),
            Some("Request failed with status 500")
        );
    }

    #[tokio::test]
    async fn run_should_mount_and_exit_at_end_of_input() {
        let api = Arc::new(FakeUsersApi::default());
        let mut app = AppController::with_io_streams(
            api.clone(),
            MockEventStream::empty(),
            MockRenderStream::new(),
        );
        app.run().await.unwrap();

        assert!(app.view_model().is_mounted());
        assert!(!app.view_model().is_busy());
        assert_eq!(api.list_users_calls(), 1);
        assert_eq!(api.list_logs_calls(), 1);
    }
}
