mod page;

pub use page::PageError;
