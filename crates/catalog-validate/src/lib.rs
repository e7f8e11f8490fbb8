//! Pre-import checks for catalog spreadsheet exports.
//!
//! - Normalization ([`normalize`]) decides when two cell values are equal.
//! - Signatures ([`signature`]) summarize a row for duplicate detection.
//! - Duplicates ([`duplicates`]) are found within one file or against a
//!   library file.
//! - Column rules and encoding checks ([`checks`]) produce row-level errors
//!   and warnings.
//! - [`messages`] merges findings by text and [`range`] renders row numbers.
//!
//! The four operations in [`workflow`] tie these together.

pub mod checks;
pub mod duplicates;
pub mod messages;
pub mod normalize;
pub mod range;
pub mod signature;
pub mod workflow;

pub use checks::{HEADER_MISMATCH_MESSAGE, Violation, validate_row};
pub use duplicates::{LibraryIndex, duplicate_groups, group_rows};
pub use messages::MessageBook;
pub use normalize::{is_decimal, normalize, normalize_value, parse_decimal};
pub use range::{format_ranges, format_row_list};
pub use signature::{ColumnFilter, SIGNATURE_DELIMITER, SignatureStyle, build_signature};
pub use workflow::{
    Validator, ValidatorConfig, compare_against_library, compare_revised_file, validate_file,
    validate_revised_file,
};
