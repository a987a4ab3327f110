/// Marker trait for UI state objects.
///
/// `Default` is the placeholder left behind while a reducer owns the state.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
