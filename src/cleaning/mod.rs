pub mod checksum;
pub mod normalize;
pub mod report;

pub use checksum::{check_cnpj, is_valid_cnpj, Verdict, CNPJ_LENGTH};
pub use normalize::{normalize_line, split_lines, strip_formatting, STRIPPED_CHARS, TAG};
pub use report::{
    clean_text, clean_text_with, invalid_warning, CleanOptions, CleanReport, InvalidLine,
    LineResult,
};
