pub mod palette_file;
pub mod png_file;
