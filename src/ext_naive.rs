// extension technique, naive rescans
// at all times, by design of the sweep, it holds i < j

use crate::xss::{check_index_width, xss_init, Text, XssEntry};

/// Like the brute-force sweep, but the first LCE of each iteration is
/// seeded from an LCE recorded earlier (the match of i+1 and j+1 extends
/// to i and j if the leading symbols agree), and rescans continue from the
/// already verified length instead of restarting at zero. Single
/// extensions still scan symbol by symbol, so pathological inputs remain
/// superlinear.
pub fn right_lyndon_extension_naive(text: &[u8]) -> Vec<XssEntry> {
    let n = text.len();
    check_index_width(n);
    let t = Text::new(text);
    let mut res = xss_init(n);

    for i in (0..n as u32).rev() {
        let mut j = i + 1;
        // seed from the recorded LCE of the pair (i+1, j+1), which is
        // either the nss edge of j or the pss edge of j+1
        let mut lce = if t.sym(i) == t.sym(j) {
            1 + if res[j as usize].nss == j + 1 {
                res[j as usize].nss_lce
            } else {
                res[j as usize + 1].pss_lce
            }
        } else {
            0
        };

        while t.sym(j + lce) > t.sym(i + lce) {
            res[j as usize].pss = i;
            res[j as usize].pss_lce = lce;

            let nss = res[j as usize].nss;
            let nss_lce = res[j as usize].nss_lce;
            if lce > nss_lce {
                // the mismatch of (i, nss) is inherited from the nss edge
                lce = nss_lce;
                j = nss;
            } else if lce < nss_lce {
                // the matched prefix carries over unchanged
                j = nss;
            } else {
                j = nss;
                lce = t.scan_lce(i, j, lce);
            }
        }

        res[i as usize].nss = j;
        res[i as usize].nss_lce = lce;
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
        crate::words::thue_morse(8),
    ] {
        assert_eq!(right_lyndon_extension_naive(&s), crate::naive::right_lyndon_naive(&s));
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
                right_lyndon_extension_naive(&s),
                crate::naive::right_lyndon_naive(&s),
                "mismatch on {:?}",
                std::str::from_utf8(&s)
            );
        }
    }
}
