mod fetcher_hasdata;
mod notifier_smtp;
mod scanner_sequential;
mod store_memory;
mod store_postgresql;

pub use fetcher_hasdata::*;
pub use notifier_smtp::*;
pub use scanner_sequential::*;
pub use store_memory::*;
pub use store_postgresql::*;
