//! # Tokens used in model files

/// Indicates the start of a comment, which lasts until the end of the line.
pub const COMMENT_INDICATOR: char = '#';

/// Separates a label from the rest of the line.
pub const LABEL_SEPARATOR: char = ':';

/// Words that start the objective line of a maximization problem.
pub const MAXIMIZE: [&str; 2] = ["maximize", "max"];

/// Words that start the objective line of a minimization problem.
pub const MINIMIZE: [&str; 2] = ["minimize", "min"];

/// Operators of `<=` constraints.
pub const LESS: [&str; 2] = ["<=", "≤"];

/// Operators of `>=` constraints.
pub const GREATER: [&str; 2] = [">=", "≥"];

/// Operators of `=` constraints.
pub const EQUAL: [&str; 2] = ["=", "=="];
