//! TF-IDF keyword search: tokenizer, stop-words, query parser, inverted
//! index, and sequential/parallel rankers.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dedup;
pub mod index;
pub mod parallel_rank;
pub mod query;
pub mod rank;
pub mod stopwords;
pub mod tokenizer;

pub use dedup::{remove_duplicates, remove_duplicates_to_stdout};
pub use index::{DocumentMeta, SearchIndex, Term};
pub use parallel_rank::find_top_documents_parallel;
pub use query::{parse_query, Query};
pub use rank::find_top_documents;
pub use stopwords::StopWords;
