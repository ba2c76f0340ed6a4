/// Vocabulary that marks a line of a functional specification as technical content.
///
/// Matching lowercases both sides, so the upper-case acronyms match in any casing.
pub const TECHNICAL_KEYWORDS: &[&str] = &[
    "interface",
    "field",
    "logic",
    "table",
    "mapping",
    "structure",
    "function",
    "module",
    "data",
    "report",
    "transaction",
    "RFC",
    "BAPI",
];
