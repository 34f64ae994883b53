use bio::alphabets::dna;

// A candidate stem is scored only if at least 3 of the last 6 bases pair
// with the upstream arm; G/C pairs contribute 3 hydrogen bonds, A/T 2.
const STEM_WINDOW: usize = 6;
const MIN_STEM: usize = 2;

fn stem_hbonds(seq: &[u8], revcomp: &[u8], start: usize, end: usize) -> u32 {
    let len = seq.len();
    let suffix_start = end - STEM_WINDOW;
    let arm_start = len - STEM_WINDOW - start;

    let mut stem_len = 0;
    for offset in 0..STEM_WINDOW {
        if revcomp[arm_start + offset] == seq[suffix_start + offset] {
            stem_len = offset;
        } else {
            break;
        }
    }

    if stem_len < MIN_STEM {
        return 0;
    }

    let mut hbonds = 0;
    for &base in &revcomp[arm_start..arm_start + stem_len] {
        hbonds += match base {
            b'C' | b'G' => 3,
            b'A' | b'T' => 2,
            _ => 0,
        };
    }

    hbonds
}

/// Aggregate hairpin-folding propensity of a sequence: for every loop size
/// between 4 and 9, every position is tested for a self-complementary stem
/// and contributes `2^hbonds - 1`. Higher scores mean more predicted
/// secondary structure; used to rank spacers for the RNA-targeting systems,
/// which prefer structure-free target windows.
pub fn hairpin_score(seq: &[u8]) -> f64 {
    let revcomp = dna::revcomp(seq);
    let len = seq.len();
    let mut total = 0.0;

    for loop_size in 4..10 {
        let positions = match len.checked_sub(loop_size + 2 * STEM_WINDOW) {
            Some(n) => n,
            None => break,
        };

        for start in 0..positions {
            let hbonds = stem_hbonds(seq, &revcomp, start, start + loop_size + 2 * STEM_WINDOW);
            total += (2f64).powi(hbonds as i32) - 1.0;
        }
    }

    total
}
