//! Startup pool state machine

use crate::config::PoolInitMode;

/// Progress of startup pool creation
///
/// Moves forward only: `Uninitialized -> Initializing -> Initialized`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StartupState {
    /// Startup pools have not been built
    #[default]
    Uninitialized,
    /// Startup pools are being built
    Initializing,
    /// Startup pools were built; further triggers are ignored
    Initialized,
}

impl StartupState {
    /// Whether a host init signal in `signal` mode should build startup pools
    /// for a registry configured with `configured`
    pub fn should_run(self, configured: PoolInitMode, signal: PoolInitMode) -> bool {
        self == Self::Uninitialized && configured != PoolInitMode::Manual && configured == signal
    }

    /// Enter `Initializing`; returns `false` if startup already began
    pub fn begin(&mut self) -> bool {
        if *self != Self::Uninitialized {
            return false;
        }
        *self = Self::Initializing;
        true
    }

    /// Enter the terminal state
    pub fn finish(&mut self) {
        *self = Self::Initialized;
    }
}
