/// Driver states, strictly linear
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    Scanning,
    /// Attempting the adapter with this id
    Exporting(&'static str),
    Done,
}

impl std::fmt::Display for PipelineState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PipelineState::Idle => write!(f, "idle"),
            PipelineState::Scanning => write!(f, "scanning"),
            PipelineState::Exporting(adapter) => write!(f, "exporting({})", adapter),
            PipelineState::Done => write!(f, "done"),
        }
    }
}
