mod gateway;
mod browser;

pub use gateway::DomGateway;
pub use browser::{ BrowserGateway, with_browser };
