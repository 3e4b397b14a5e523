//! Natural Language Processing components
//!
//! Default implementations of the linguistic collaborators: segmentation,
//! word tokenization, stopword filtering, stemming and proper-noun detection.

pub mod proper_nouns;
pub mod stemmer;
pub mod stopwords;
pub mod tokenizer;
