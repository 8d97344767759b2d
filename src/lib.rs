// htmlpress: HTML whitespace and comment compressor

pub mod compressor;
pub mod config;
pub mod constants;
pub mod error;
pub mod filter;
pub mod logging;

pub use compressor::{compress_html, compress_html_opt, Compressor, CompressorConfig};
pub use error::{PressError, Result};
