mod clock;
mod theme_state;

pub use clock::{ Clock, SystemClock };
pub use theme_state::ThemeState;
