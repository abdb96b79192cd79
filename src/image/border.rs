use serde::{Deserialize, Serialize};

/// How samples outside the image are synthesised.
#[derive(Debug,Copy,Clone,PartialEq,Eq,Serialize,Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderMode {
    /// Clamp to the nearest edge pixel: `a a a | a b c d | d d d`
    Replicate,
    /// Mirror without repeating the edge pixel: `d c b | a b c d | c b a`
    Reflect
}

impl BorderMode {
    /// Maps a possibly out of range index onto `0..len`. Any offset is valid,
    /// reflections are folded as often as needed.
    pub fn extend_index(&self, idx: isize, len: usize) -> usize {
        assert!(len > 0, "cannot extend an index into an empty axis");
        let last = len as isize - 1;
        match self {
            BorderMode::Replicate => idx.clamp(0, last) as usize,
            BorderMode::Reflect => {
                if last == 0 {
                    return 0;
                }
                let period = 2*last;
                let folded = idx.rem_euclid(period);
                match folded {
                    f if f > last => (period - f) as usize,
                    f => f as usize
                }
            }
        }
    }
}
