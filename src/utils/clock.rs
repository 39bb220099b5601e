use chrono::{ Datelike, Local };

pub trait Clock {
    fn current_year(&self) -> i32;
}

/// Host clock in the local time zone. On wasm32 this reads the JS `Date`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        Local::now().year()
    }
}
