pub mod expansion;
pub mod session;

pub use expansion::ExpansionState;
pub use session::{persist_scroll, take_scroll, MemoryStore, SessionStore, SCROLL_KEY};
