/// Marker trait for reducer-owned state.
///
/// `Default` is the state at mount; `PartialEq` lets callers skip redraws.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
