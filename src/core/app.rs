//! Event loop driving the main screen
//!
//! Everything runs on one thread: control commands and the outputs of
//! pending tasks are interleaved with `tokio::select!`, and each message is
//! applied to the controller before the next one is looked at.

use anyhow::Context;
use futures::StreamExt;
use futures::future::LocalBoxFuture;
use futures::stream::FuturesUnordered;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use super::collaborators::LogCrossPoster;
use super::control::{ControlCommand, parse_command};
use super::save::SaveFolderUploader;
use super::screen::MainScreenController;
use super::task::Task;
use crate::capture::picker::{FolderPicker, ShutterRemote};
use crate::config::{JsonSettingsStore, TottepostConfig};
use crate::session::messages::Msg;
use crate::session::state::ScreenEvent;

pub struct App {
    pub screen: MainScreenController,
    /// Shutter of the folder picker, when that is the capture device
    pub remote: Option<ShutterRemote>,
    pending: FuturesUnordered<LocalBoxFuture<'static, Msg>>,
    events: Vec<ScreenEvent>,
}

impl App {
    pub fn new(screen: MainScreenController, remote: Option<ShutterRemote>) -> Self {
        Self {
            screen,
            remote,
            pending: FuturesUnordered::new(),
            events: Vec::new(),
        }
    }

    /// Apply a message and queue the work it returns
    pub fn dispatch(&mut self, msg: Msg) {
        log::debug!("Dispatching {:?}", msg);
        let task = self.screen.update(msg);
        self.spawn(task);
        self.collect_events();
    }

    fn spawn(&mut self, task: Task<Msg>) {
        for future in task.into_futures() {
            self.pending.push(future);
        }
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Events produced so far, oldest first
    pub fn take_events(&mut self) -> Vec<ScreenEvent> {
        std::mem::take(&mut self.events)
    }

    fn collect_events(&mut self) {
        for event in self.screen.drain_events() {
            match &event {
                ScreenEvent::Notice(notice) => log::warn!("Notice: {}", notice),
                ScreenEvent::Submitted(receipt) => {
                    log::info!("Posted {} -> {}", receipt.name, receipt.location)
                }
                other => log::info!("{:?}", other),
            }
            self.events.push(event);
        }
    }

    /// Handle one control command. Returns `false` on quit.
    pub fn handle_command(&mut self, command: ControlCommand) -> bool {
        match command {
            ControlCommand::Screen(msg) => self.dispatch(msg),
            ControlCommand::Shoot => match &self.remote {
                Some(remote) if remote.press() => log::debug!("Shutter pressed"),
                _ => log::warn!("No picker on screen"),
            },
            ControlCommand::Dismiss => match &self.remote {
                Some(remote) if remote.dismiss() => log::debug!("Picker dismissed"),
                _ => log::warn!("No picker on screen"),
            },
            ControlCommand::Status => println!("{}", self.screen.snapshot()),
            ControlCommand::Quit => return false,
        }
        true
    }

    /// Run until quit, or until input ends and all pending work is done
    pub async fn run(mut self, mut commands: mpsc::Receiver<ControlCommand>) -> anyhow::Result<()> {
        let mut input_open = true;
        loop {
            tokio::select! {
                Some(msg) = self.pending.next(), if !self.pending.is_empty() => {
                    self.dispatch(msg);
                }
                command = commands.recv(), if input_open => match command {
                    Some(command) => {
                        if !self.handle_command(command) {
                            break;
                        }
                    }
                    None => {
                        log::debug!("Input closed, finishing pending work");
                        input_open = false;
                        // Nobody is left to press the shutter. Backing out of
                        // the picker lets an already pressed shot finish.
                        match &self.remote {
                            Some(remote) => {
                                remote.dismiss();
                            }
                            None => self.dispatch(Msg::cancel_capture()),
                        }
                    }
                },
                else => break,
            }
        }
        log::info!("Main screen closed");
        Ok(())
    }
}

/// Build the screen from the user config and run it against stdin
pub async fn run() -> anyhow::Result<()> {
    let config = TottepostConfig::load();
    let config_path = TottepostConfig::path()?;
    log::info!(
        "Picking photos from {}, saving to {}",
        config.picker_dir.display(),
        config.save_dir.display()
    );

    let (picker, remote) = FolderPicker::new(config.picker_dir.clone());
    let uploader = SaveFolderUploader::new(config.save_dir.clone());
    let settings = JsonSettingsStore::new(config, config_path);

    let screen = MainScreenController::new(Box::new(picker), Box::new(uploader), Box::new(settings))
        .with_cross_poster(Box::new(LogCrossPoster));
    let mut app = App::new(screen, Some(remote));
    app.dispatch(Msg::screen_shown());

    let (tx, rx) = mpsc::channel(32);
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            let line = match lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(err) => {
                    log::error!("Failed to read input: {}", err);
                    break;
                }
            };
            match parse_command(&line) {
                Ok(Some(command)) => {
                    if tx.send(command).await.is_err() {
                        break;
                    }
                }
                Ok(None) => {}
                Err(err) => eprintln!("{}", err),
            }
        }
    });

    app.run(rx).await.context("Main screen loop failed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CaptureSessionState, PanelVisibility};

    fn folder_app(dir: &std::path::Path) -> App {
        let inbox = dir.join("inbox");
        std::fs::create_dir_all(&inbox).unwrap();
        std::fs::write(inbox.join("IMG_0001.jpg"), b"jpeg bytes").unwrap();

        let config = TottepostConfig {
            picker_dir: inbox.clone(),
            save_dir: dir.join("posted"),
            ..TottepostConfig::default()
        };
        let (picker, remote) = FolderPicker::new(inbox);
        let uploader = SaveFolderUploader::new(config.save_dir.clone());
        let settings = JsonSettingsStore::new(config, dir.join("config.json"));
        let screen =
            MainScreenController::new(Box::new(picker), Box::new(uploader), Box::new(settings));
        App::new(screen, Some(remote))
    }

    #[tokio::test]
    async fn test_capture_and_post_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let app = folder_app(dir.path());

        let (tx, rx) = mpsc::channel(8);
        for command in [
            ControlCommand::Screen(Msg::toggle_settings_panel()),
            ControlCommand::Screen(Msg::select_row(1)),
            ControlCommand::Screen(Msg::start_capture()),
            ControlCommand::Shoot,
        ] {
            tx.send(command).await.unwrap();
        }
        drop(tx);

        app.run(rx).await.unwrap();

        let posted = dir.path().join("posted").join("IMG_0001.jpg");
        assert_eq!(std::fs::read(posted).unwrap(), b"jpeg bytes");
        let saved = TottepostConfig::load_from(&dir.path().join("config.json"));
        assert_eq!(saved.selected_option.as_deref(), Some("facebook"));
    }

    #[tokio::test]
    async fn test_input_closed_dismisses_picker() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = folder_app(dir.path());
        app.handle_command(ControlCommand::Screen(Msg::start_capture()));
        assert_eq!(app.screen.snapshot().capture, CaptureSessionState::Active);
        assert!(app.has_pending());

        let (tx, rx) = mpsc::channel(1);
        drop(tx);
        app.run(rx).await.unwrap();
        assert!(!dir.path().join("posted").exists());
    }

    #[tokio::test]
    async fn test_dispatch_collects_events() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = folder_app(dir.path());
        app.dispatch(Msg::toggle_settings_panel());
        app.dispatch(Msg::start_capture());

        assert_eq!(app.screen.snapshot().panel, PanelVisibility::Closed);
        assert_eq!(
            app.take_events(),
            vec![
                ScreenEvent::PanelOpened,
                ScreenEvent::PanelClosed,
                ScreenEvent::OverlayShown,
            ]
        );
        assert!(app.take_events().is_empty());
    }

    #[test]
    fn test_quit_stops() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = folder_app(dir.path());
        assert!(!app.handle_command(ControlCommand::Quit));
        assert!(app.handle_command(ControlCommand::Shoot));
    }
}
