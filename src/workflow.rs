//! Commit Workflow
//!
//! The sequential state machine that collects a [`CommitDraft`] through
//! four prompts (action, module, short description, long description), and
//! the single-flight [`Session`] guard that keeps at most one workflow in
//! progress at a time.
//!
//! Prompting is abstracted behind the [`Prompter`] trait so the machine can
//! be driven without a terminal in tests.

use std::cell::Cell;

use crate::{
    actions::Action,
    errors::{OcommitError, Result},
    git::locator::RepositoryEntry,
    message::CommitDraft,
};

/// Source of user input for the workflow.
///
/// Each method blocks until the user answers or cancels; cancellation is
/// reported as `OcommitError::UserCancelled`.
#[cfg_attr(test, mockall::automock)]
pub trait Prompter {
    fn select_action(&self) -> Result<Action>;

    fn select_repository(&self, repositories: &[RepositoryEntry]) -> Result<RepositoryEntry>;

    /// Picks a module from `modules`, or asks for a free-text module name
    /// when the repository has no subdirectories to offer.
    fn select_module(&self, modules: &[String]) -> Result<String>;

    fn short_description(&self) -> Result<String>;

    fn long_description(&self) -> Result<String>;
}

/// Progress of one workflow through its prompts.
///
/// Cancellation or failure at any point returns the machine to `Idle`;
/// there is no resume capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowState {
    Idle,
    ActionSelected,
    ModuleSelected,
    ShortDescriptionEntered,
    LongDescriptionEntered,
    Composed,
}

/// Drives the four prompts in order and produces a validated draft.
pub struct Workflow<'a, P: Prompter> {
    prompter: &'a P,
    modules: Vec<String>,
    state: Cell<WorkflowState>,
}

impl<'a, P: Prompter> Workflow<'a, P> {
    pub fn new(prompter: &'a P, modules: Vec<String>) -> Self {
        Workflow {
            prompter,
            modules,
            state: Cell::new(WorkflowState::Idle),
        }
    }

    #[must_use]
    pub fn state(&self) -> WorkflowState {
        self.state.get()
    }

    /// Runs the prompts in sequence. On any error, including user
    /// cancellation, the machine drops all partial state and returns to
    /// `Idle`.
    ///
    /// # Errors
    /// * `OcommitError::UserCancelled` when the user cancels at any prompt
    /// * `OcommitError::InvalidInput` when the collected fields fail
    ///   validation at composition time
    pub fn run(&self) -> Result<CommitDraft> {
        let result = self.advance();

        if result.is_err() {
            self.state.set(WorkflowState::Idle);
        }

        result
    }

    fn advance(&self) -> Result<CommitDraft> {
        let action = self.prompter.select_action()?;
        self.state.set(WorkflowState::ActionSelected);

        let module = self.prompter.select_module(&self.modules)?;
        self.state.set(WorkflowState::ModuleSelected);

        let short_description = self.prompter.short_description()?;
        self.state.set(WorkflowState::ShortDescriptionEntered);

        let long_description = self.prompter.long_description()?;
        self.state.set(WorkflowState::LongDescriptionEntered);

        let draft = CommitDraft::new(action, module, short_description, long_description)?;
        self.state.set(WorkflowState::Composed);

        Ok(draft)
    }
}

/// Whether a commit workflow is currently running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Idle,
    InProgress,
}

/// Single-flight guard around the commit workflow.
///
/// The status is set to `InProgress` for the duration of [`Session::run`]
/// and reset on every exit path, including panics, so a failed workflow can
/// never leave the session permanently blocked.
pub struct Session {
    status: Cell<SessionStatus>,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Session {
            status: Cell::new(SessionStatus::Idle),
        }
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status.get()
    }

    /// Runs `workflow` under the guard.
    ///
    /// # Errors
    /// * `OcommitError::WorkflowBusy` immediately, without invoking
    ///   `workflow`, when another workflow is already in progress
    /// * Whatever `workflow` itself returns
    pub fn run<T>(&self, workflow: impl FnOnce() -> Result<T>) -> Result<T> {
        if self.status.get() == SessionStatus::InProgress {
            return Err(OcommitError::WorkflowBusy);
        }

        self.status.set(SessionStatus::InProgress);
        let _reset = ResetOnDrop(&self.status);

        workflow()
    }

    /// Cancels an in-progress workflow by resetting the status. Returns
    /// `false` (and changes nothing) when no workflow is active.
    pub fn cancel(&self) -> bool {
        if self.status.get() == SessionStatus::Idle {
            return false;
        }

        self.status.set(SessionStatus::Idle);
        true
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}

struct ResetOnDrop<'a>(&'a Cell<SessionStatus>);

impl Drop for ResetOnDrop<'_> {
    fn drop(&mut self) {
        self.0.set(SessionStatus::Idle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn happy_prompter() -> MockPrompter {
        let mut prompter = MockPrompter::new();
        prompter
            .expect_select_action()
            .returning(|| Ok(Action::Fix));
        prompter
            .expect_select_module()
            .returning(|modules| Ok(modules[0].clone()));
        prompter
            .expect_short_description()
            .returning(|| Ok("fix rounding in tax computation".to_string()));
        prompter
            .expect_long_description()
            .returning(|| Ok(String::new()));
        prompter
    }

    #[test]
    fn test_workflow_produces_a_validated_draft() {
        let prompter = happy_prompter();
        let workflow = Workflow::new(&prompter, vec!["sale".to_string()]);

        let draft = workflow.run().unwrap();

        assert_eq!(workflow.state(), WorkflowState::Composed);
        assert_eq!(draft.action, Action::Fix);
        assert_eq!(draft.module, "sale");
        assert_eq!(
            draft.compose(),
            "\n[FIX] sale: fix rounding in tax computation\n\n"
        );
    }

    #[test]
    fn test_cancellation_at_first_prompt_returns_to_idle() {
        let mut prompter = MockPrompter::new();
        prompter
            .expect_select_action()
            .returning(|| Err(OcommitError::UserCancelled));

        let workflow = Workflow::new(&prompter, vec![]);

        assert!(matches!(workflow.run(), Err(OcommitError::UserCancelled)));
        assert_eq!(workflow.state(), WorkflowState::Idle);
    }

    #[test]
    fn test_cancellation_mid_workflow_discards_partial_state() {
        let mut prompter = MockPrompter::new();
        prompter
            .expect_select_action()
            .returning(|| Ok(Action::Add));
        prompter
            .expect_select_module()
            .returning(|_| Ok("purchase".to_string()));
        prompter
            .expect_short_description()
            .returning(|| Err(OcommitError::UserCancelled));

        let workflow = Workflow::new(&prompter, vec!["purchase".to_string()]);

        assert!(matches!(workflow.run(), Err(OcommitError::UserCancelled)));
        assert_eq!(workflow.state(), WorkflowState::Idle);
    }

    #[test]
    fn test_invalid_draft_is_rejected_at_composition() {
        let mut prompter = MockPrompter::new();
        prompter
            .expect_select_action()
            .returning(|| Ok(Action::Imp));
        prompter
            .expect_select_module()
            .returning(|_| Ok("stock".to_string()));
        prompter
            .expect_short_description()
            .returning(|| Ok("contains a ` backtick".to_string()));
        prompter
            .expect_long_description()
            .returning(|| Ok(String::new()));

        let workflow = Workflow::new(&prompter, vec!["stock".to_string()]);

        assert!(matches!(
            workflow.run(),
            Err(OcommitError::InvalidInput(_))
        ));
        assert_eq!(workflow.state(), WorkflowState::Idle);
    }

    #[test]
    fn test_session_rejects_second_workflow_while_busy() {
        let session = Session::new();

        let result = session.run(|| {
            assert_eq!(session.status(), SessionStatus::InProgress);
            assert!(matches!(
                session.run(|| Ok(())),
                Err(OcommitError::WorkflowBusy)
            ));
            Ok(42)
        });

        assert_eq!(result.unwrap(), 42);
        assert_eq!(session.status(), SessionStatus::Idle);
    }

    #[test]
    fn test_session_resets_on_failure() {
        let session = Session::new();

        let result: Result<()> = session.run(|| Err(OcommitError::UserCancelled));

        assert!(result.is_err());
        assert_eq!(session.status(), SessionStatus::Idle);
    }

    #[test]
    fn test_cancel_on_idle_session_is_a_no_op() {
        let session = Session::new();

        assert!(!session.cancel());
        assert_eq!(session.status(), SessionStatus::Idle);
    }

    #[test]
    fn test_cancel_resets_an_active_session() {
        let session = Session::new();

        session
            .run(|| {
                assert!(session.cancel());
                assert_eq!(session.status(), SessionStatus::Idle);
                Ok(())
            })
            .unwrap();
    }
}
