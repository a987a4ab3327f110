mod intent;
mod reducer;
mod state;

pub use intent::AppearanceIntent;
pub use reducer::AppearanceReducer;
pub use state::AppearanceState;
