use compflow_thermo::FlowError;
use thiserror::Error;

/// Errors that may occur when solving a panel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PanelError {
    /// The panel geometry is outside the range the theories cover.
    ///
    /// For example, an angle of attack at or beyond ±90°.
    #[error("invalid panel: {0}")]
    Domain(String),

    /// Building a surface state failed.
    #[error(transparent)]
    Flow(#[from] FlowError),
}
