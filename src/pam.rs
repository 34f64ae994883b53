use std::borrow::Cow;

use crate::iupac;

/// Position of the PAM relative to the protospacer: Head means the motif
/// precedes the spacer (Cas12a style), Tail means it follows it (Cas9 style).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Position {
    Head,
    Tail,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Pam {
    motif: Vec<u8>,
    position: Position,
}

impl Pam {
    pub fn head(motif: &[u8]) -> Pam {
        Pam {
            motif: motif.to_owned(),
            position: Position::Head,
        }
    }

    pub fn tail(motif: &[u8]) -> Pam {
        Pam {
            motif: motif.to_owned(),
            position: Position::Tail,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn matches(&self, window: &[u8]) -> bool {
        if self.len() <= window.len() {
            let iupac_wrapper = |(&query, &candidate)| iupac::matches(query, candidate);

            match self.position {
                Position::Head => self.motif.iter().zip(window.iter()).all(iupac_wrapper),
                Position::Tail => self
                    .motif
                    .iter()
                    .rev()
                    .zip(window.iter().rev())
                    .all(iupac_wrapper),
            }
        } else {
            false
        }
    }

    /// Splits a `spacer + PAM` window into its (spacer, PAM) slices if the
    /// motif matches at its expected end of the window.
    pub fn split<'a>(&self, window: &'a [u8]) -> Option<(&'a [u8], &'a [u8])> {
        if self.len() < window.len() && self.matches(window) {
            match self.position {
                Position::Head => Some((&window[self.len()..], &window[..self.len()])),
                Position::Tail => {
                    let pam_start = window.len() - self.len();

                    Some((&window[..pam_start], &window[pam_start..]))
                }
            }
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.motif.len()
    }

    pub fn to_string(&self) -> Cow<str> {
        String::from_utf8_lossy(&self.motif)
    }
}
