pub mod display;

pub use display::{print_banner, print_error, print_prompt, Paint, Style, Theme};
