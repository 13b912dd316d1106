/// Run state of the frame loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    /// No work happens; ticks are no-ops
    Idle,
    /// Every host frame callback advances the simulation
    Running,
}

/// Gate between the host's display-refresh callback and the simulation.
///
/// The host owns the actual requestAnimationFrame loop and calls `tick`
/// every frame regardless; this gate decides whether that tick does any
/// work. `stop` is the explicit teardown handle, so an embedder can wind
/// the scene down deterministically instead of leaning on page unload.
pub(super) struct Scheduler {
    state: RunState,
}

impl Scheduler {
    pub(super) fn new() -> Self {
        Self { state: RunState::Idle }
    }

    pub(super) fn start(&mut self) {
        self.state = RunState::Running;
    }

    pub(super) fn stop(&mut self) {
        self.state = RunState::Idle;
    }

    pub(super) fn state(&self) -> RunState {
        self.state
    }

    pub(super) fn is_running(&self) -> bool {
        self.state == RunState::Running
    }
}
