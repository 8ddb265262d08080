/// A single bit of a candidate, always `0` or `1`
pub type Bit = u8;

/// Candidate solution for the OneMax problem
///
/// A candidate is a fixed-length bit string sampled from the solver's
/// probability vector. Bit `i` was drawn as a Bernoulli trial with
/// `P(1) = probabilities[i]`.
///
/// The solver never keeps a population of candidates. It holds exactly one,
/// the winner of the latest decided tournament (or the random initial string
/// before any tournament has been decided).
///
/// # Example
///
/// ```
/// use onemax_cga::engines::compact::{fitness, Candidate};
///
/// let candidate: Candidate = vec![1, 0, 1, 1];
/// assert_eq!(fitness(&candidate), 3);
/// ```
pub type Candidate = Vec<Bit>;

/// Renders a candidate as a compact `0`/`1` string for log output
pub fn format_bits(bits: &[Bit]) -> String {
    bits.iter().map(|&bit| if bit == 1 { '1' } else { '0' }).collect()
}
