// generators for structured words with long repetitions, the adversarial
// inputs for LCE chain behavior

/// k-th Fibonacci word over {a, b}: f(0) = "b", f(1) = "a",
/// f(k) = f(k-1) f(k-2)
pub fn fibonacci(k: usize) -> Vec<u8> {
    if k == 0 {
        return vec![b'b'];
    }
    let mut prev = vec![b'b'];
    let mut cur = vec![b'a'];
    for _ in 2..=k {
        let next = [cur.as_slice(), prev.as_slice()].concat();
        prev = cur;
        cur = next;
    }
    cur
}

/// Fibonacci word followed by one extra symbol breaking the period
pub fn fibonacci_plus(k: usize) -> Vec<u8> {
    let mut res = fibonacci(k);
    res.push(if k % 2 == 0 { b'b' } else { b'a' });
    res
}

/// k-th Thue-Morse word: start from "a", append the flipped word k times
pub fn thue_morse(k: usize) -> Vec<u8> {
    let mut res = vec![b'a'];
    for _ in 0..k {
        let flipped: Vec<u8> = res
            .iter()
            .map(|&c| if c == b'a' { b'b' } else { b'a' })
            .collect();
        res.extend(flipped);
    }
    res
}

/// k-th period-doubling word: start from "a" and apply a -> ab, b -> aa
pub fn period_doubling(k: usize) -> Vec<u8> {
    let mut res = vec![b'a'];
    for _ in 0..k {
        let mut next = Vec::with_capacity(res.len() * 2);
        for &c in res.iter() {
            next.push(b'a');
            next.push(if c == b'a' { b'b' } else { b'a' });
        }
        res = next;
    }
    res
}

#[test]
fn test_fibonacci() {
    assert_eq!(fibonacci(0), b"b".to_vec());
    assert_eq!(fibonacci(1), b"a".to_vec());
    assert_eq!(fibonacci(2), b"ab".to_vec());
    assert_eq!(fibonacci(3), b"aba".to_vec());
    assert_eq!(fibonacci(4), b"abaab".to_vec());
    assert_eq!(
        fibonacci(10),
        "abaababaabaababaababaabaababaabaababaababaabaababaababaabaababaabaababaababaabaababaabaab"
            .as_bytes()
            .to_vec()
    );
    assert_eq!(fibonacci_plus(8), b"abaababaabaababaababaabaababaabaabb".to_vec());
}

#[test]
fn test_thue_morse() {
    assert_eq!(thue_morse(0), b"a".to_vec());
    assert_eq!(thue_morse(2), b"abba".to_vec());
    assert_eq!(thue_morse(5), b"abbabaabbaababbabaababbaabbabaab".to_vec());
}

#[test]
fn test_period_doubling() {
    assert_eq!(period_doubling(0), b"a".to_vec());
    assert_eq!(period_doubling(3), b"abaaabab".to_vec());
    assert_eq!(period_doubling(4), b"abaaabababaaabaa".to_vec());
}
