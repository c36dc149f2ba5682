pub mod chromium_page;
pub mod page_driver;
pub mod wait;

pub use chromium_page::ChromiumPage;
pub use page_driver::PageDriver;
pub use wait::wait_until;
