//! Well-known column names.

/// Onboarded corpus: base name of the source text file.
pub const FILE_NAME: &str = "file_name";
/// Onboarded corpus: text content of the source file.
pub const CONTENT: &str = "content";

/// Derived: ISO `YYYY-MM-DD` date parsed from the file name.
pub const DATE: &str = "date";
/// Derived: publication reference code parsed from the file name.
pub const PUBLICATION_REF: &str = "publication_ref";
/// Derived: display name looked up from the reference map.
pub const PUBLICATION_NAME: &str = "publication_name";

/// Derived columns in the order they are appended.
pub const DERIVED_COLUMNS: [&str; 3] = [DATE, PUBLICATION_REF, PUBLICATION_NAME];

/// Distribution output keys.
pub const YEAR: &str = "year";
pub const MONTH: &str = "month";
pub const COUNT: &str = "count";

/// Dictionary table columns.
pub const KEY: &str = "key";
pub const WORD: &str = "word";
pub const CF: &str = "cf";
pub const DF: &str = "df";
