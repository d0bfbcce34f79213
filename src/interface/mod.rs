mod fetcher;
mod notifier;
mod scanner;
mod store;

pub use fetcher::*;
pub use notifier::*;
pub use scanner::*;
pub use store::*;
