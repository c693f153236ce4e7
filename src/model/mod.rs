// Statistical half of the classifier.
//
// Three pieces trained offline and exported as JSON: a character n-gram
// TF-IDF vectorizer, a feature standardizer, and a calibrated linear
// model over the concatenation of both blocks. `artifact` loads and
// cross-validates them; `traits` defines the scorer interface the rest
// of the crate programs against.

pub mod artifact;
pub mod linear;
pub mod traits;
pub mod vectorizer;
