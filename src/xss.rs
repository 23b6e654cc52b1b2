// shared pieces of the NSS/PSS constructions
// at all times, by design of the sweep, it holds i < j

/// NSS and PSS pointer of one text position, each annotated with the LCE
/// of the compared suffix pair. A pointer value of n (the text length)
/// means that no smaller suffix exists on that side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct XssEntry {
    pub nss: u32,
    pub pss: u32,
    pub nss_lce: u32,
    pub pss_lce: u32,
}

/// result store with both pointers initialized to the sentinel value n
pub(crate) fn xss_init(n: usize) -> Vec<XssEntry> {
    let entry = XssEntry {
        nss: n as u32,
        pss: n as u32,
        nss_lce: 0,
        pss_lce: 0,
    };
    vec![entry; n]
}

/// the u32 index type has to be wide enough to hold n itself
pub(crate) fn check_index_width(n: usize) {
    assert!(
        n <= u32::MAX as usize,
        "text length {} does not fit the u32 index type",
        n
    );
}

/// read access to the text with a virtual sentinel at every index >= n,
/// strictly smaller than any real symbol
#[derive(Clone, Copy)]
pub(crate) struct Text<'a> {
    text: &'a [u8],
}

impl<'a> Text<'a> {
    pub fn new(text: &'a [u8]) -> Self {
        Text { text }
    }

    pub fn sym(&self, idx: u32) -> i64 {
        match self.text.get(idx as usize) {
            Some(&c) => c as i64,
            None => i64::MIN,
        }
    }

    /// longest common extension of the suffixes at i and j by plain symbol
    /// comparison, continuing from an already verified prefix length
    pub fn scan_lce(&self, i: u32, j: u32, known: u32) -> u32 {
        let mut lce = known;
        while self.sym(i + lce) == self.sym(j + lce) {
            lce += 1;
        }
        lce
    }
}

/// deterministic text of the given length over {a, ..., a + sigma - 1}
#[cfg(test)]
pub(crate) fn lcg_text(len: usize, sigma: u8, seed: u32) -> Vec<u8> {
    let mut x = seed.wrapping_mul(1_234_567);
    let mut v = Vec::with_capacity(len);
    for _ in 0..len {
        x = x.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        v.push(b'a' + ((x >> 16) % sigma as u32) as u8);
    }
    v
}

#[test]
fn test_sentinel_is_smallest() {
    let t = Text::new(b"ba");
    assert_eq!(t.sym(0), b'b' as i64);
    assert_eq!(t.sym(1), b'a' as i64);
    assert_eq!(t.sym(2), i64::MIN);
    assert_eq!(t.sym(1000), i64::MIN);
    assert!(t.sym(2) < t.sym(1));
}

#[test]
fn test_scan_lce() {
    let t = Text::new(b"abaaba");
    // suffixes "abaaba" and "aba": match ends at the sentinel
    assert_eq!(t.scan_lce(0, 3, 0), 3);
    assert_eq!(t.scan_lce(0, 3, 2), 3);
    assert_eq!(t.scan_lce(0, 1, 0), 0);
    // equal suffixes never happen for distinct indices: the sentinel
    // terminates the shorter one first
    assert_eq!(t.scan_lce(2, 5, 0), 1);
}
