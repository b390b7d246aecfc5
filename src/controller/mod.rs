//! Interaction controller: gestures, navigation state, and the store calls they trigger.

pub mod gesture;
pub mod interaction;
pub mod navigation;

pub use gesture::*;
pub use interaction::*;
pub use navigation::*;
