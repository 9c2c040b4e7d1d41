use tracing::{debug, warn};

use retrace_api::{Cmd, CmdFlags, CmdId, GlobalState, MutateError, ReplaySink};

/// Lifecycle of one command instance within a pass.
///
/// `Executed` and `Failed` are terminal; a command never mutates twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmdState {
    Unexecuted,
    /// Transient phase spanning the `mutate` call. A single-threaded pass
    /// never reports it; it exists for drivers that surface progress.
    Executing,
    Executed,
    Failed,
}

/// What the driver does after a command's `mutate` fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Stop the pass; later commands stay `Unexecuted`.
    #[default]
    Abort,
    /// Mark the command `Failed` and keep going.
    ContinueMarkFailed,
}

/// Per-command result of a pass.
#[derive(Debug, Clone, PartialEq)]
pub struct CmdOutcome {
    pub id: CmdId,
    pub name: &'static str,
    pub state: CmdState,
    /// Flags queried just before `mutate`; reflects every earlier command's
    /// effect.
    pub flags_before: CmdFlags,
    /// Flags queried just after `mutate` completed (equal to `flags_before`
    /// when the command did not reach `mutate`).
    pub flags_after: CmdFlags,
    pub error: Option<MutateError>,
}

/// Result of a whole pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplayReport {
    pub outcomes: Vec<CmdOutcome>,
    /// True if the pass stopped early under [`ErrorPolicy::Abort`].
    pub aborted: bool,
}

impl ReplayReport {
    pub fn executed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.state == CmdState::Executed)
            .count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.state == CmdState::Failed)
            .count()
    }

    pub fn first_error(&self) -> Option<&MutateError> {
        self.outcomes.iter().find_map(|o| o.error.as_ref())
    }
}

/// Drives one replay pass over one isolated [`GlobalState`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Replayer {
    policy: ErrorPolicy,
}

impl Replayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: ErrorPolicy) -> Self {
        Self { policy }
    }

    /// Applies `cmds` to `state` in program order.
    ///
    /// Commands are consumed: a pass takes ownership of its instances, so
    /// mutating the same instance twice is unrepresentable through this API.
    /// Identity is positional: command N gets `CmdId(N)`.
    ///
    /// On a `mutate` error the state keeps the committed-so-far condition;
    /// nothing is rolled back.
    pub fn run(
        &self,
        cmds: Vec<Box<dyn Cmd>>,
        state: &mut GlobalState,
        sink: &mut dyn ReplaySink,
    ) -> ReplayReport {
        let mut report = ReplayReport::default();
        let mut cmds = cmds.into_iter();

        for (index, mut cmd) in cmds.by_ref().enumerate() {
            let id = CmdId(index as u64);
            let outcome = self.execute_one(&mut *cmd, id, state, sink);
            let failed = outcome.state == CmdState::Failed;
            report.outcomes.push(outcome);

            if failed && self.policy == ErrorPolicy::Abort {
                report.aborted = true;
                break;
            }
        }

        // Under Abort, record the commands the pass never reached.
        for (offset, cmd) in cmds.enumerate() {
            let id = CmdId((report.outcomes.len() + offset) as u64);
            let flags = cmd.flags(id, state);
            report.outcomes.push(CmdOutcome {
                id,
                name: cmd.name(),
                state: CmdState::Unexecuted,
                flags_before: flags,
                flags_after: flags,
                error: None,
            });
        }

        report
    }

    fn execute_one(
        &self,
        cmd: &mut dyn Cmd,
        id: CmdId,
        state: &mut GlobalState,
        sink: &mut dyn ReplaySink,
    ) -> CmdOutcome {
        let flags_before = cmd.flags(id, state);
        debug!(cmd = cmd.name(), %id, ?flags_before, "mutate");

        // The command is Executing for the duration of this call; the phase
        // is not externally observable in a single-threaded pass.
        let (cmd_state, error) = match cmd.mutate(id, state, sink) {
            Ok(()) => (CmdState::Executed, None),
            Err(err) => {
                warn!(cmd = cmd.name(), %id, %err, "mutate failed");
                (CmdState::Failed, Some(err))
            }
        };

        let flags_after = cmd.flags(id, state);
        CmdOutcome {
            id,
            name: cmd.name(),
            state: cmd_state,
            flags_before,
            flags_after,
            error,
        }
    }
}
