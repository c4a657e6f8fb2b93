/// Marker trait for intents: user input or system events fed to a reducer.
pub trait Intent: Send + 'static {}
