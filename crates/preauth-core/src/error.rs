use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown {kind} label: {label}")]
    UnknownLabel { kind: &'static str, label: String },
}
