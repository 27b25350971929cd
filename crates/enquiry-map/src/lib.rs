//! Query interpretation for the directory enquiry engine.
//!
//! Raw text flows through [`normalize`], is scored against every directory
//! entry by [`Matcher`], and the winner is turned into a sentence by
//! [`Responder`].

#![deny(unsafe_code)]

mod engine;
mod normalize;
mod patterns;
mod respond;
mod score;

pub use engine::{
    DEFAULT_SUGGESTION_LIMIT, MatchConfig, Matcher, find_best, process_query, suggest,
};
pub use normalize::{is_filler_word, normalize};
pub use patterns::{FILLER_WORDS, ROLE_KEYWORDS, RoleKeyword};
pub use respond::{NOT_FOUND_MESSAGE, NOT_FOUND_SPOKEN, Responder, spoken, variants};
pub use score::similarity;
