//! NSS/PSS arrays with LCE annotations, the building block of the right
//! Lyndon tree and of suffix-array-free Lyndon array construction.
//!
//! Four interchangeable constructions are provided, from the quadratic
//! brute-force baseline up to the amortized linear sweep. All of them
//! produce, for every text position, the next and previous smaller suffix
//! together with the longest common extension of the compared suffixes.

pub mod ext_improved;
pub mod ext_linear;
pub mod ext_naive;
pub mod naive;
pub mod words;
pub mod xss;

pub use ext_improved::right_lyndon_extension_improved;
pub use ext_linear::right_lyndon_extension_linear;
pub use ext_naive::right_lyndon_extension_naive;
pub use naive::right_lyndon_naive;
pub use xss::XssEntry;

/// Default construction: the linear-time extension variant.
pub fn right_lyndon(text: &[u8]) -> Vec<XssEntry> {
    ext_linear::right_lyndon_extension_linear(text)
}

#[test]
fn test_all_variants_agree() {
    // differential check of every engine against the brute-force oracle
    let kinds: [fn(&[u8]) -> Vec<XssEntry>; 3] = [
        right_lyndon_extension_naive,
        right_lyndon_extension_improved,
        right_lyndon_extension_linear,
    ];
    let mut inputs: Vec<Vec<u8>> = vec![
        Vec::new(),
        b"a".to_vec(),
        b"banana".to_vec(),
        b"fedcba".to_vec(),
        vec![b'a'; 257],
        words::fibonacci(15),
        words::fibonacci_plus(12),
        words::thue_morse(9),
        words::period_doubling(9),
    ];
    for seed in 1..6u32 {
        inputs.push(crate::xss::lcg_text(300, 2, seed));
        inputs.push(crate::xss::lcg_text(300, 4, seed));
        inputs.push(crate::xss::lcg_text(300, 26, seed));
    }
    for s in inputs.iter() {
        let oracle = right_lyndon_naive(s);
        for f in kinds.iter() {
            let res = f(s);
            assert_eq!(res.len(), oracle.len());
            for i in 0..res.len() {
                assert_eq!(res[i].nss, oracle[i].nss, "nss mismatch at {}", i);
                assert_eq!(res[i].nss_lce, oracle[i].nss_lce, "nss lce mismatch at {}", i);
            }
        }
    }
}

#[test]
fn test_full_record_equality_probe() {
    // only nss/nss_lce equivalence is guaranteed by construction; this
    // probes whether the pss side agrees as well (it does on all inputs
    // tried so far, since every variant assigns the same (i, j) pairs)
    let inputs: Vec<Vec<u8>> = vec![
        b"banana".to_vec(),
        b"abracadabra".to_vec(),
        words::fibonacci(12),
        words::thue_morse(7),
        words::period_doubling(7),
        vec![b'a'; 64],
    ];
    for s in inputs.iter() {
        let oracle = right_lyndon_naive(s);
        assert_eq!(right_lyndon_extension_naive(s), oracle);
        assert_eq!(right_lyndon_extension_improved(s), oracle);
        assert_eq!(right_lyndon_extension_linear(s), oracle);
    }
}

#[test]
fn test_recomputation_is_idempotent() {
    let s = words::fibonacci(13);
    assert_eq!(right_lyndon(&s), right_lyndon(&s));
    assert_eq!(right_lyndon_naive(&s), right_lyndon_naive(&s));
}
