// Harf Input Layer
// Events crossing from the host UI into a session

mod event;

pub use event::InputEvent;
