mod completion;
mod message;
mod request;
mod result;

pub use completion::*;
pub use message::*;
pub use request::*;
pub use result::*;
