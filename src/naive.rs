// brute-force construction of the NSS/PSS arrays, the correctness oracle

use crate::xss::{check_index_width, xss_init, Text, XssEntry};

/// One right-to-left sweep; every LCE is recomputed by a full symbol scan,
/// so the worst case is quadratic, but the result is correct by
/// construction.
pub fn right_lyndon_naive(text: &[u8]) -> Vec<XssEntry> {
    let n = text.len();
    check_index_width(n);
    let t = Text::new(text);
    let mut res = xss_init(n);

    for i in (0..n as u32).rev() {
        let mut j = i + 1;
        let mut lce = t.scan_lce(i, j, 0);

        // while suffix j is still greater than suffix i, i is its PSS;
        // hop to the next smaller suffix of j, which is already final
        while t.sym(j + lce) > t.sym(i + lce) {
            res[j as usize].pss = i;
            res[j as usize].pss_lce = lce;
            j = res[j as usize].nss;
            lce = t.scan_lce(i, j, 0);
        }

        res[i as usize].nss = j;
        res[i as usize].nss_lce = lce;
    }

    res
}

#[cfg(test)]
fn suffix_less(s: &[u8], i: usize, j: usize) -> bool {
    // slice order coincides with the sentinel order: a proper prefix is
    // smaller than the longer suffix
    s[i..] < s[j..]
}

#[cfg(test)]
fn brute_lce(s: &[u8], i: usize, j: usize) -> u32 {
    let mut lce = 0;
    while i + lce < s.len() && j + lce < s.len() && s[i + lce] == s[j + lce] {
        lce += 1;
    }
    lce as u32
}

#[cfg(test)]
fn assert_matches_brute_force(s: &[u8]) {
    let n = s.len();
    let res = right_lyndon_naive(s);
    assert_eq!(res.len(), n);
    for i in 0..n {
        let nss = (i + 1..n).find(|&j| suffix_less(s, j, i)).unwrap_or(n);
        let pss = (0..i).rev().find(|&k| suffix_less(s, k, i)).unwrap_or(n);
        assert_eq!(res[i].nss as usize, nss, "nss at {}", i);
        assert_eq!(res[i].pss as usize, pss, "pss at {}", i);
        let nss_lce = if nss < n { brute_lce(s, i, nss) } else { 0 };
        let pss_lce = if pss < n { brute_lce(s, pss, i) } else { 0 };
        assert_eq!(res[i].nss_lce, nss_lce, "nss lce at {}", i);
        assert_eq!(res[i].pss_lce, pss_lce, "pss lce at {}", i);
    }
}

#[test]
fn test_banana() {
    let res = right_lyndon_naive(b"banana");
    let expected = [
        // (nss, pss, nss_lce, pss_lce)
        (1, 6, 0, 0),
        (3, 6, 3, 0),
        (3, 1, 0, 0),
        (5, 6, 1, 0),
        (5, 3, 0, 0),
        (6, 6, 0, 0),
    ];
    for (i, &(nss, pss, nss_lce, pss_lce)) in expected.iter().enumerate() {
        assert_eq!(res[i].nss, nss, "nss at {}", i);
        assert_eq!(res[i].pss, pss, "pss at {}", i);
        assert_eq!(res[i].nss_lce, nss_lce, "nss lce at {}", i);
        assert_eq!(res[i].pss_lce, pss_lce, "pss lce at {}", i);
    }
}

#[test]
fn test_strictly_decreasing_text() {
    // every suffix is immediately smaller than its predecessor's
    let s = b"fedcba";
    let res = right_lyndon_naive(s);
    for i in 0..s.len() {
        assert_eq!(res[i].nss as usize, i + 1);
        assert_eq!(res[i].nss_lce, 0);
        assert_eq!(res[i].pss as usize, s.len());
    }
}

#[test]
fn test_unary_run() {
    // maximal LCE chains: each nss points one step right, the LCE grows
    // by one per step leftward
    let s = vec![b'a'; 8];
    let res = right_lyndon_naive(&s);
    for i in 0..s.len() {
        assert_eq!(res[i].nss as usize, i + 1);
        assert_eq!(res[i].nss_lce as usize, s.len() - 1 - i);
        assert_eq!(res[i].pss as usize, s.len());
    }
}

#[test]
fn test_smallest_suffix_chain_ends_at_sentinel() {
    let s = b"banana";
    let res = right_lyndon_naive(s);
    let mut i = 0u32;
    while res[i as usize].nss < s.len() as u32 {
        assert!(res[i as usize].nss > i);
        i = res[i as usize].nss;
    }
    // the chain terminal is the lexicographically smallest suffix
    assert_eq!(i, 5);
    assert_eq!(res[i as usize].nss, s.len() as u32);
}

#[test]
fn test_empty_input() {
    assert!(right_lyndon_naive(b"").is_empty());
}

#[test]
fn test_matches_brute_force() {
    assert_matches_brute_force(b"banana");
    assert_matches_brute_force(b"abracadabra");
    assert_matches_brute_force(b"aaaa");
    assert_matches_brute_force(&crate::words::fibonacci(10));
    assert_matches_brute_force(&crate::words::thue_morse(6));
    assert_matches_brute_force(&crate::words::period_doubling(6));
    for seed in 1..8 {
        for sigma in [1, 2, 3, 26] {
            assert_matches_brute_force(&crate::xss::lcg_text(100, sigma, seed));
        }
    }
}

#[test]
fn test_nss_matches_suffix_array_order() {
    // nss(i) is the first position to the right whose suffix ranks lower
    // in the suffix array
    for s in [
        b"banana".to_vec(),
        b"mississippi".to_vec(),
        crate::words::fibonacci(12),
        crate::xss::lcg_text(200, 4, 42),
    ] {
        let n = s.len();
        let sa = {
            let mut sa = vec![0; n];
            cdivsufsort::sort_in_place(&s, &mut sa);
            sa
        };
        let mut rank = vec![0; n];
        for (r, &p) in sa.iter().enumerate() {
            rank[p as usize] = r;
        }
        let res = right_lyndon_naive(&s);
        for i in 0..n {
            let expected = (i + 1..n).find(|&j| rank[j] < rank[i]).unwrap_or(n);
            assert_eq!(res[i].nss as usize, expected, "nss at {}", i);
        }
    }
}
