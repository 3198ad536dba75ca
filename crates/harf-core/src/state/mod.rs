// Harf State
// Mutable session state: the output buffer and the session that owns it

pub mod buffer;
pub mod session;

pub use buffer::{OutputBuffer, WORD_SEPARATOR};
pub use session::Session;
