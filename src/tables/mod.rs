//! Static keyword and pattern tables
//!
//! Hard-coded data, never mutated at runtime. The engine compiles these once.

pub mod keywords;
pub mod patterns;

pub use keywords::PromptKeywords;
pub use patterns::PromptPatterns;
