mod assemble_prompt;
mod generate_response;

pub use assemble_prompt::*;
pub use generate_response::*;
