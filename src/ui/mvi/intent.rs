/// Marker trait for intent objects.
///
/// Intents are user actions (key presses) or system events (service
/// replies). Reducers turn them into new states.
pub trait Intent: Send + 'static {}
