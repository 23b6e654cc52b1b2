// extension technique with precomputed skip pointers, amortized linear
// at all times, by design of the sweep, it holds i < j

use crate::xss::{check_index_width, xss_init, Text, XssEntry};
use std::cmp;

// per-position bookkeeping: the largest LCE recorded with this position as
// right-hand side, the left endpoint that achieved it, and the next
// position known to be safe to jump to when extending past this one
#[derive(Clone, Copy, Default)]
struct Aux {
    max_lce: u32,
    left: u32,
    skip: u32,
}

// Remember (i, j, lce) if it is a new maximum for j, or the first record.
// j might become the new skip position of some other positions k < j.
// These positions lie on the chain of left pointers originating at j and
// ending at position i. After tightening the skip values we assign
// left(j) = i; since left pointers are non-intersecting (they are NSS or
// PSS edges), no index in the range (i, j) is ever updated again, so the
// total number of skip tightenings over the whole sweep is at most n.
fn update_max_lce(aux: &mut [Aux], i: u32, j: u32, lce: u32, skip_len: u32) {
    if lce > aux[j as usize].max_lce || aux[j as usize].left == 0 {
        let mut k = aux[j as usize].left;
        while k > i {
            // min: a skip value only ever decreases here
            aux[k as usize].skip = cmp::min(j, aux[k as usize].skip);
            k = aux[k as usize].left;
        }
        aux[j as usize].max_lce = lce;
        aux[j as usize].left = i;
        aux[j as usize].skip = cmp::max(j + 1, j + skip_len);
    }
}

fn assign_pss(res: &mut [XssEntry], aux: &mut [Aux], i: u32, j: u32, lce: u32, skip_len: u32) {
    res[j as usize].pss = i;
    res[j as usize].pss_lce = lce;
    update_max_lce(aux, i, j, lce, skip_len);
}

fn assign_nss(res: &mut [XssEntry], aux: &mut [Aux], i: u32, j: u32, lce: u32, skip_len: u32) {
    res[i as usize].nss = j;
    res[i as usize].nss_lce = lce;
    update_max_lce(aux, i, j, lce, skip_len);
}

// Same three-case analysis as the improved variant, but candidate right
// endpoints advance along the precomputed skip pointers. The second
// result is the freshly discovered skip length: the distance from j to
// the right-hand side of the first record that could not be used.
fn extend(t: &Text, res: &[XssEntry], aux: &[Aux], i: u32, j: u32) -> (u32, u32) {
    if t.sym(i) != t.sym(j) {
        return (0, 0);
    }

    let d = j - i;
    let mut rr = aux[j as usize].skip;
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
        rr = aux[rr as usize].skip;
        lr = rr - d;
    }

    let skip_len = rr - j;
    (skip_len + ext, skip_len)
}

/// The linear-time construction. The sweep is identical to the improved
/// variant, but extensions jump via skip pointers whose total number of
/// tightenings is bounded by n, which makes the whole sweep amortized
/// linear.
pub fn right_lyndon_extension_linear(text: &[u8]) -> Vec<XssEntry> {
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
        let mut skip_len = lce;

        while t.sym(j + lce) > t.sym(i + lce) {
            assign_pss(&mut res, &mut aux, i, j, lce, skip_len);

            let nss = res[j as usize].nss;
            let nss_lce = res[j as usize].nss_lce;
            if lce > nss_lce {
                lce = nss_lce;
                j = nss;
            } else if lce < nss_lce {
                j = nss;
            } else {
                j = nss;
                let (new_lce, new_skip) = extend(&t, &res, &aux, i, j);
                lce = new_lce;
                skip_len = new_skip;
            }
        }

        assign_nss(&mut res, &mut aux, i, j, lce, skip_len);
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
        crate::words::fibonacci(14),
        crate::words::fibonacci_plus(14),
        crate::words::thue_morse(9),
        crate::words::period_doubling(9),
    ] {
        assert_eq!(
            right_lyndon_extension_linear(&s),
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
                right_lyndon_extension_linear(&s),
                crate::naive::right_lyndon_naive(&s),
                "mismatch on {:?}",
                std::str::from_utf8(&s)
            );
        }
    }
}

#[test]
fn test_exhaustive_ternary_strings() {
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
                right_lyndon_extension_linear(&s),
                crate::naive::right_lyndon_naive(&s),
                "mismatch on {:?}",
                std::str::from_utf8(&s)
            );
        }
    }
}

#[test]
fn test_lcg_texts() {
    for seed in 1..10u32 {
        for sigma in [1, 2, 4, 26] {
            let s = crate::xss::lcg_text(500, sigma, seed);
            assert_eq!(
                right_lyndon_extension_linear(&s),
                crate::naive::right_lyndon_naive(&s),
                "mismatch on sigma {} seed {}",
                sigma,
                seed
            );
        }
    }
}
