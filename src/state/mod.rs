//! Plain state machines behind the interactive parts of the page.
//!
//! Nothing here touches the DOM or timers; components own the timers and feed
//! events in.

pub mod carousel;
pub mod modal;
pub mod preload;
pub mod shell;

pub use carousel::CarouselState;
pub use modal::{ActiveMedia, ClickTarget};
pub use preload::{AssetOutcome, LoadProgress, PreloadGate, ReadyReason};
pub use shell::{MenuState, ScrollFlag};
