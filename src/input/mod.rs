//! Input handling: click targets, the command vocabulary, and the
//! dispatch table that turns one into the other.

/// Dispatch table mapping class names to commands.
pub mod dispatch;
/// Platform-agnostic click and command types.
pub mod event;

pub use dispatch::{TriggerKind, TriggerTable};
pub use event::{ClickTarget, SliderCommand};
