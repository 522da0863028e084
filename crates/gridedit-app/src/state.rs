// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::{AppMode, RecordKey};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub mode: AppMode,
    pub status_line: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            mode: AppMode::Nav,
            status_line: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    EnterEditMode,
    ExitToNav,
    RequestDelete(RecordKey),
    CancelDelete,
    SetStatus(String),
    ClearStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    ModeChanged(AppMode),
    DeletePrompted(RecordKey),
    StatusUpdated(String),
    StatusCleared,
}

impl AppState {
    pub fn dispatch(&mut self, command: AppCommand) -> Vec<AppEvent> {
        match command {
            AppCommand::EnterEditMode => {
                self.mode = AppMode::Edit;
                vec![AppEvent::ModeChanged(self.mode.clone())]
            }
            AppCommand::ExitToNav => {
                self.mode = AppMode::Nav;
                vec![AppEvent::ModeChanged(self.mode.clone())]
            }
            AppCommand::RequestDelete(key) => {
                self.mode = AppMode::ConfirmDelete(key.clone());
                vec![
                    AppEvent::ModeChanged(self.mode.clone()),
                    AppEvent::DeletePrompted(key),
                ]
            }
            AppCommand::CancelDelete => {
                if !matches!(self.mode, AppMode::ConfirmDelete(_)) {
                    return Vec::new();
                }
                self.mode = AppMode::Nav;
                vec![
                    AppEvent::ModeChanged(self.mode.clone()),
                    self.set_status("delete canceled"),
                ]
            }
            AppCommand::SetStatus(message) => vec![self.set_status(&message)],
            AppCommand::ClearStatus => {
                self.status_line = None;
                vec![AppEvent::StatusCleared]
            }
        }
    }

    pub fn pending_delete(&self) -> Option<&RecordKey> {
        match &self.mode {
            AppMode::ConfirmDelete(key) => Some(key),
            AppMode::Nav | AppMode::Edit => None,
        }
    }

    fn set_status(&mut self, message: &str) -> AppEvent {
        self.status_line = Some(message.to_owned());
        AppEvent::StatusUpdated(message.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::{AppCommand, AppEvent, AppState};
    use crate::{AppMode, RecordKey};

    #[test]
    fn mode_transitions() {
        let mut state = AppState::default();

        state.dispatch(AppCommand::EnterEditMode);
        assert_eq!(state.mode, AppMode::Edit);

        state.dispatch(AppCommand::ExitToNav);
        assert_eq!(state.mode, AppMode::Nav);
    }

    #[test]
    fn request_delete_prompts_for_key() {
        let mut state = AppState::default();

        let events = state.dispatch(AppCommand::RequestDelete(RecordKey::text("1")));
        assert_eq!(state.pending_delete(), Some(&RecordKey::text("1")));
        assert_eq!(
            events,
            vec![
                AppEvent::ModeChanged(AppMode::ConfirmDelete(RecordKey::text("1"))),
                AppEvent::DeletePrompted(RecordKey::text("1")),
            ],
        );
    }

    #[test]
    fn cancel_delete_returns_to_nav_with_status() {
        let mut state = AppState::default();
        state.dispatch(AppCommand::RequestDelete(RecordKey::serial(4)));

        let events = state.dispatch(AppCommand::CancelDelete);
        assert_eq!(state.mode, AppMode::Nav);
        assert_eq!(state.pending_delete(), None);
        assert_eq!(
            events,
            vec![
                AppEvent::ModeChanged(AppMode::Nav),
                AppEvent::StatusUpdated("delete canceled".to_owned()),
            ],
        );
    }

    #[test]
    fn cancel_delete_outside_prompt_is_ignored() {
        let mut state = AppState::default();
        assert!(state.dispatch(AppCommand::CancelDelete).is_empty());
        assert_eq!(state.status_line, None);
    }

    #[test]
    fn status_set_and_clear() {
        let mut state = AppState::default();
        state.dispatch(AppCommand::SetStatus("added Quốc 3".to_owned()));
        assert_eq!(state.status_line.as_deref(), Some("added Quốc 3"));

        let events = state.dispatch(AppCommand::ClearStatus);
        assert_eq!(state.status_line, None);
        assert_eq!(events, vec![AppEvent::StatusCleared]);
    }
}
