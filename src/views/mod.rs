mod footer;
mod home;
mod navbar;

pub use footer::Footer;
pub use home::Home;
pub use navbar::Navbar;
