use super::candidate::Bit;

/// OneMax fitness: number of bits set to 1
pub fn fitness(candidate: &[Bit]) -> usize {
    candidate.iter().filter(|&&bit| bit == 1).count()
}

/// True when every bit of a `num_bits` long candidate is 1
pub fn is_optimal(candidate: &[Bit], num_bits: usize) -> bool {
    fitness(candidate) == num_bits
}
