use std::fmt::Debug;
use std::hash::Hash;

/// An atomic unit of input.
///
/// `Ord` fixes the tie-break order during tree construction, `Hash` backs
/// constant-time code lookup in the encoder.
pub trait Symbol: Ord + Hash + Clone + Debug {}

impl<T: Ord + Hash + Clone + Debug> Symbol for T {}
