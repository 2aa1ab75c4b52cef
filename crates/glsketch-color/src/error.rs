#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("a step sequence needs at least 2 steps, got {steps}")]
    TooFewSteps { steps: usize },
    #[error("step {index} is outside a sequence of {steps} steps")]
    StepOutOfRange { index: usize, steps: usize },
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),
}
