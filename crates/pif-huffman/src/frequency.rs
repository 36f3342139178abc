//! Symbol frequency model

use pif_core::consts::SYMBOL_COUNT;

/// Occurrence count for every byte value
pub type Frequencies = [u64; SYMBOL_COUNT];

/// Count the occurrences of each value in `samples`
pub fn count_frequencies<I>(samples: I) -> Frequencies
where
    I: IntoIterator<Item = u8>,
{
    let mut frequencies = [0u64; SYMBOL_COUNT];
    for sample in samples {
        frequencies[sample as usize] += 1;
    }
    frequencies
}
