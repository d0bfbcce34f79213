mod digest;
mod entities;
mod error;
mod report;
mod request;
mod response;

pub use digest::*;
pub use entities::*;
pub use error::*;
pub use report::*;
pub use request::*;
pub use response::*;
