//! IUPAC ambiguity codes as 4-bit base sets; a code matches a candidate if
//! the candidate's set is contained in the code's set.

const A: u8 = 0b0001;
const C: u8 = 0b0010;
const G: u8 = 0b0100;
const T: u8 = 0b1000;

const CODES: [(u8, u8); 15] = [
    (b'A', A),
    (b'C', C),
    (b'G', G),
    (b'T', T),
    (b'R', A | G),
    (b'Y', C | T),
    (b'S', G | C),
    (b'W', A | T),
    (b'K', G | T),
    (b'M', A | C),
    (b'B', C | G | T),
    (b'D', A | G | T),
    (b'H', A | C | T),
    (b'V', A | C | G),
    (b'N', A | C | G | T),
];

lazy_static! {
    static ref BASE_SETS: [u8; 26] = {
        let mut table = [0; 26];

        for &(symbol, mask) in CODES.iter() {
            table[(symbol - b'A') as usize] = mask;
        }

        table
    };
}

fn base_set(symbol: u8) -> u8 {
    if b'A' <= symbol && symbol <= b'Z' {
        BASE_SETS[(symbol - b'A') as usize]
    } else {
        0
    }
}

pub fn matches(query: u8, candidate: u8) -> bool {
    if query == candidate {
        true
    } else {
        let candidate_set = base_set(candidate);

        candidate_set != 0 && base_set(query) & candidate_set == candidate_set
    }
}

/// Complement of an IUPAC symbol (e.g. V -> B); concrete bases behave as
/// usual (A -> T). Non-IUPAC bytes are returned unchanged.
pub fn complement(symbol: u8) -> u8 {
    let set = base_set(symbol);
    if set == 0 {
        return symbol;
    }

    let mut complemented = 0;
    if set & A != 0 {
        complemented |= T;
    }
    if set & C != 0 {
        complemented |= G;
    }
    if set & G != 0 {
        complemented |= C;
    }
    if set & T != 0 {
        complemented |= A;
    }

    for &(other, mask) in CODES.iter() {
        if mask == complemented {
            return other;
        }
    }

    symbol
}
