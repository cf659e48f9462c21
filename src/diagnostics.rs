use crate::error::RulesError;

/// Receives search failures the move selector recovers from.
pub trait Diagnostics: Send {
    fn report(&mut self, error: &RulesError);
}

/// Default sink: forwards to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn report(&mut self, error: &RulesError) {
        log::error!("search failed, falling back to a random move: {error}");
    }
}
