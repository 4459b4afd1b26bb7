//! In-memory backend for tests.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::PathBuf;

use super::errors::BackendError;
use super::traits::SessionBackend;
use super::types::{CreateSessionRequest, LiveSession};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedSession {
    pub name: String,
    pub dir: PathBuf,
    pub cmd: Option<String>,
    pub env: BTreeMap<String, String>,
}

#[derive(Debug, Default)]
pub struct MockBackend {
    pub sessions: RefCell<Vec<LiveSession>>,
    pub created: RefCell<Vec<CreatedSession>>,
    pub switched: RefCell<Vec<String>>,
    pub current_path: Option<PathBuf>,
    pub fail_create: bool,
    pub fail_switch: bool,
    /// Pretend switching hands the terminal over, like attaching from outside tmux
    pub replaces_process: bool,
}

impl MockBackend {
    pub fn with_sessions(sessions: Vec<LiveSession>) -> Self {
        Self {
            sessions: RefCell::new(sessions),
            ..Default::default()
        }
    }
}

impl SessionBackend for MockBackend {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn list_sessions(&self) -> Result<Vec<LiveSession>, BackendError> {
        Ok(self.sessions.borrow().clone())
    }

    fn create_session(&self, request: &CreateSessionRequest<'_>) -> Result<(), BackendError> {
        if self.fail_create {
            return Err(BackendError::CommandFailed {
                command: format!("mock new -s {}", request.name),
                output: "duplicate session".to_string(),
            });
        }
        self.created.borrow_mut().push(CreatedSession {
            name: request.name.to_string(),
            dir: request.dir.to_path_buf(),
            cmd: request.cmd.map(str::to_string),
            env: request.env.clone(),
        });
        self.sessions
            .borrow_mut()
            .push(LiveSession::new(request.name, request.dir));
        Ok(())
    }

    fn switch_to(&self, name: &str) -> Result<(), BackendError> {
        if self.fail_switch {
            return Err(BackendError::CommandFailed {
                command: format!("mock switch-client -t {}", name),
                output: "no current client".to_string(),
            });
        }
        self.switched.borrow_mut().push(name.to_string());
        Ok(())
    }

    fn current_session_path(&self) -> Result<PathBuf, BackendError> {
        self.current_path
            .clone()
            .ok_or_else(|| BackendError::CommandFailed {
                command: "mock display-message".to_string(),
                output: "no current client".to_string(),
            })
    }

    fn replaces_process(&self) -> bool {
        self.replaces_process
    }

    fn normalize_name(&self, name: &str) -> String {
        name.replace(['.', ':'], "_")
    }
}
