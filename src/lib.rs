pub mod code_block;
pub mod readme;

pub use code_block::{DEFAULT_LANGUAGE, format_code_block, format_shell_block};
pub use readme::render;
