//! Interactive terminal front end. This is the presentation layer the core
//! treats as an external collaborator: it renders state, collects input, and
//! routes every mutation through [`crate::app::AppState`].

pub mod render;
pub mod shell;

use std::io;

use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Input};
use thiserror::Error;

use crate::app::{ImagePicker, Notification, NotificationKind, NotificationSink};
use crate::driver::ImageRef;
use crate::errors::DiaryError;

pub use shell::Shell;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("prompt error: {0}")]
    Dialoguer(#[from] dialoguer::Error),
    #[error(transparent)]
    Diary(#[from] DiaryError),
}

/// Prints notifications as colored status lines.
#[derive(Debug, Default)]
pub struct TerminalNotifier;

impl NotificationSink for TerminalNotifier {
    fn notify(&mut self, notification: Notification) {
        match notification.kind {
            NotificationKind::Success => {
                println!(
                    "{} {}: {}",
                    "✔".green(),
                    notification.title.green().bold(),
                    notification.message
                );
            }
            NotificationKind::Error => {
                println!(
                    "{} {}: {}",
                    "✖".red(),
                    notification.title.red().bold(),
                    notification.message
                );
            }
        }
    }
}

/// Image "picker" for the terminal: asks for a path or URI. An empty answer
/// cancels the pick.
#[derive(Debug, Default)]
pub struct PathImagePicker;

impl ImagePicker for PathImagePicker {
    fn pick_image(&mut self) -> Option<ImageRef> {
        let answer: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("QR code image path (empty to cancel)")
            .allow_empty(true)
            .interact_text()
            .unwrap_or_default();
        let trimmed = answer.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(ImageRef::new(trimmed))
        }
    }
}
