// extension technique with jump-and-verify over recorded maximum LCEs
// at all times, by design of the sweep, it holds i < j

use crate::xss::{check_index_width, xss_init, Text, XssEntry};
use std::cmp;

// per-position bookkeeping: the largest LCE recorded with this position as
// right-hand side, and the left endpoint that achieved it
#[derive(Clone, Copy, Default)]
struct Aux {
    max_lce: u32,
    left: u32,
}

// remember (i, j, lce) if it is a new maximum for j, or the first record
fn update_max_lce(aux: &mut [Aux], i: u32, j: u32, lce: u32) {
    let a = &mut aux[j as usize];
    if lce > a.max_lce || a.left == 0 {
        a.max_lce = lce;
        a.left = i;
    }
}

fn assign_pss(res: &mut [XssEntry], aux: &mut [Aux], i: u32, j: u32, lce: u32) {
    res[j as usize].pss = i;
    res[j as usize].pss_lce = lce;
    update_max_lce(aux, i, j, lce);
}

fn assign_nss(res: &mut [XssEntry], aux: &mut [Aux], i: u32, j: u32, lce: u32) {
    res[i as usize].nss = j;
    res[i as usize].nss_lce = lce;
    update_max_lce(aux, i, j, lce);
}

// Extend the match of suffixes i and j past already verified prefixes.
// Every candidate right endpoint rr (left endpoint lr = rr - d) is
// explained by exactly one of three cases relating the best known match
// ending at rr to an already recorded NSS/PSS edge; the walk stops as
// soon as the combined bound falls short of max_lce(rr), which proves the
// mismatch lies within the unverified span.
fn extend(t: &Text, res: &[XssEntry], aux: &[Aux], i: u32, j: u32) -> u32 {
    if t.sym(i) != t.sym(j) {
        return 0;
    }

    let d = j - i;
    let mut rr = j + cmp::max(1, aux[j as usize].max_lce);
    let mut lr = rr - d;
    let mut ext = 0;

    while t.sym(lr) == t.sym(rr) {
        let rl = aux[rr as usize].left;
        let mut rlce = aux[rr as usize].max_lce;

        let ll = rl as i64 - d as i64;
        let llce;

        if ll == i as i64 && lr == j {
            // case 1: the record at rr is the pair (i, j) shifted by d
            llce = rlce + d;
        } else if ll >= 0 && res[ll as usize].nss == lr {
            // case 2: an nss edge connects the shifted pair directly
            llce = res[ll as usize].nss_lce;
        } else if ll >= 0 && res[lr as usize].pss == ll as u32 {
            // case 2: symmetric, via the pss edge of lr
            llce = res[lr as usize].pss_lce;
        } else {
            // case 3: combine the pss edge of lr with the nss edge of its
            // shifted counterpart; the true length exceeds neither bound
            llce = res[lr as usize].pss_lce;
            rlce = res[(res[lr as usize].pss + d) as usize].nss_lce;
        }

        ext = cmp::min(llce, rlce);
        if ext < aux[rr as usize].max_lce {
            break;
        }

        ext = 0;
        rr += cmp::max(1, aux[rr as usize].max_lce);
        lr = rr - d;
    }

    rr - j + ext
}

/// Same sweep as the naive extension variant, but the extend step jumps
/// over already verified matches using the max-LCE records instead of
/// rescanning symbols. Individual extensions may still revisit the same
/// record chain across calls, so linearity is not guaranteed.
pub fn right_lyndon_extension_improved(text: &[u8]) -> Vec<XssEntry> {
    let n = text.len();
    check_index_width(n);
    let t = Text::new(text);
    let mut res = xss_init(n);
    let mut aux = vec![Aux::default(); n + 1];

    for i in (0..n as u32).rev() {
        let mut j = i + 1;
        let mut lce = if t.sym(i) == t.sym(j) {
            aux[j as usize + 1].max_lce + 1
        } else {
            0
        };

        while t.sym(j + lce) > t.sym(i + lce) {
            assign_pss(&mut res, &mut aux, i, j, lce);

            let nss = res[j as usize].nss;
            let nss_lce = res[j as usize].nss_lce;
            if lce > nss_lce {
                lce = nss_lce;
                j = nss;
            } else if lce < nss_lce {
                j = nss;
            } else {
                j = nss;
                lce = extend(&t, &res, &aux, i, j);
            }
        }

        assign_nss(&mut res, &mut aux, i, j, lce);
    }

    res
}

#[test]
fn test_agrees_with_oracle() {
    for s in [
        b"".to_vec(),
        b"banana".to_vec(),
        b"abracadabra".to_vec(),
        b"fedcba".to_vec(),
        vec![b'a'; 100],
        crate::words::fibonacci(13),
        crate::words::fibonacci_plus(13),
        crate::words::thue_morse(8),
        crate::words::period_doubling(8),
    ] {
        assert_eq!(
            right_lyndon_extension_improved(&s),
            crate::naive::right_lyndon_naive(&s)
        );
    }
}

#[test]
fn test_exhaustive_binary_strings() {
    for len in 0..=10u32 {
        for mask in 0u32..1 << len {
            let s: Vec<u8> = (0..len)
                .map(|b| if mask >> b & 1 == 0 { b'a' } else { b'b' })
                .collect();
            assert_eq!(
                right_lyndon_extension_improved(&s),
                crate::naive::right_lyndon_naive(&s),
                "mismatch on {:?}",
                std::str::from_utf8(&s)
            );
        }
    }
}

#[test]
fn test_exhaustive_ternary_strings() {
    // three symbols exercise case 3, where neither edge connects directly
    for len in 0..=7u32 {
        for mut code in 0u32..3u32.pow(len) {
            let s: Vec<u8> = (0..len)
                .map(|_| {
                    let c = b'a' + (code % 3) as u8;
                    code /= 3;
                    c
                })
                .collect();
            assert_eq!(
                right_lyndon_extension_improved(&s),
                crate::naive::right_lyndon_naive(&s),
                "mismatch on {:?}",
                std::str::from_utf8(&s)
            );
        }
    }
}
