//! Fuzz smoke tests for the block-comment scanner.
//!
//! Random and adversarial inputs check that scanning never panics and that
//! the structural properties of the output hold. Well-formed C-like inputs
//! are generated from pieces so the expected output is known exactly.
//!
//! No external crate dependencies are used — a simple deterministic PRNG
//! provides reproducible randomness.

use cstrip_core::{SegmentKind, segments, strip_block_comments};

// ─── Simple deterministic PRNG (LCG) ────────────────────────────────────────

struct SimpleRng(u64);

impl SimpleRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range(&mut self, max: usize) -> usize {
        ((self.next() >> 33) as usize) % max
    }

    fn gen_bytes(&mut self, len: usize) -> Vec<u8> {
        (0..len).map(|_| (self.next() >> 33) as u8).collect()
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.gen_range(items.len())]
    }
}

// ─── Invariant checking ─────────────────────────────────────────────────────

/// Properties that hold for any input, well-formed or not.
fn assert_invariants(input: &str) {
    let mut pos = 0;
    let mut kept = String::new();
    for seg in segments(input) {
        assert_eq!(
            seg.range.start,
            pos,
            "gap or overlap before {:?} in {:?}",
            seg,
            truncate(input, 120)
        );
        assert!(seg.range.end > seg.range.start, "empty segment {:?}", seg);
        if seg.kind.is_kept() {
            kept.push_str(seg.text(input));
        }
        pos = seg.range.end;
    }
    assert_eq!(
        pos,
        input.len(),
        "segments stop short in {:?}",
        truncate(input, 120)
    );

    let out = strip_block_comments(input);
    assert_eq!(out, kept);
    assert!(out.len() <= input.len());
    if !input.contains("/*") {
        assert_eq!(out, input, "input without \"/*\" must pass through");
    }
}

/// Truncate a string for error messages (safe for multi-byte UTF-8).
fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        let safe_end = (0..=max)
            .rev()
            .find(|&i| s.is_char_boundary(i))
            .unwrap_or(0);
        format!("{}…({} bytes total)", &s[..safe_end], s.len())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Category A: Random input
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn no_panic_random_bytes() {
    let mut rng = SimpleRng::new(0xDEAD_BEEF);
    for len in [0, 1, 2, 5, 10, 50, 100, 500, 1000, 5000] {
        for _ in 0..20 {
            let bytes = rng.gen_bytes(len);
            let input = String::from_utf8_lossy(&bytes);
            assert_invariants(&input);
        }
    }
}

#[test]
fn no_panic_random_delimiter_soup() {
    let mut rng = SimpleRng::new(0xBAAD_F00D);
    let alphabet: Vec<char> = "/*\"'\\ab \n\ré".chars().collect();
    for len in [1, 2, 3, 5, 20, 100, 500] {
        for _ in 0..50 {
            let s: String = (0..len)
                .map(|_| alphabet[rng.gen_range(alphabet.len())])
                .collect();
            assert_invariants(&s);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Category B: Adversarial delimiter sequences
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn no_panic_adversarial_delimiters() {
    let cases = [
        "/", "*", "/*", "*/", "/*/", "/**/", "/***/", "/*/*/", "//*", "**/", "\"", "'", "\\",
        "\"\\", "'\\", "\"\\\"", "''", "\"\"", "\\\"", "/*\"*/\"", "\"/*\"*/", "'/*'",
        "/*'*/'", "\\/*x*/",
    ];
    for case in cases {
        assert_invariants(case);
        for other in cases {
            assert_invariants(&format!("{case}{other}"));
        }
    }
}

#[test]
fn long_unterminated_comment() {
    let input = format!("/*{}", "*".repeat(200_000));
    assert_eq!(strip_block_comments(&input), "");
    assert_eq!(
        segments(&input).map(|s| s.kind).collect::<Vec<_>>(),
        vec![SegmentKind::BlockComment { terminated: false }]
    );
}

#[test]
fn long_unterminated_literal_of_escapes() {
    let input = format!("\"{}", "\\\"".repeat(100_000));
    assert_eq!(strip_block_comments(&input), input);
}

// ═══════════════════════════════════════════════════════════════════════════════
// Category C: Well-formed C-like input
// ═══════════════════════════════════════════════════════════════════════════════

/// Code pieces never start with `*` or end with `/`, so removing a comment
/// between two pieces cannot create a new delimiter.
const CODE: &[&str] = &[
    "int x = 1;",
    " ",
    "\n",
    "\r\n",
    "\t",
    "return y;",
    "a + b",
    "(c - d)",
    "{ }",
    "é",
    "\\",
    "x / 2",
];

const LITERALS: &[&str] = &[
    "\"plain\"",
    "\"/* not a comment */\"",
    "\"*/\"",
    "\"a\\\"b\"",
    "\"\\\\\"",
    "\"it's\"",
    "'a'",
    "'\\''",
    "'\\\\'",
    "'\"'",
    "'/'",
    "\"line\\\ncont\"",
    "\"\"",
];

const COMMENTS: &[&str] = &[
    "/**/",
    "/* c */",
    "/* \"quoted\" */",
    "/* it's */",
    "/***/",
    "/* * */",
    "/*\n * multi\n */",
    "/* \\ */",
    "/* /* */",
];

/// Build a well-formed input and the output stripping it must produce.
fn well_formed(rng: &mut SimpleRng, pieces: usize) -> (String, String) {
    let mut input = String::new();
    let mut expected = String::new();
    for _ in 0..pieces {
        match rng.gen_range(3) {
            0 => {
                let p = rng.pick(CODE);
                input.push_str(p);
                expected.push_str(p);
            }
            1 => {
                let p = rng.pick(LITERALS);
                input.push_str(p);
                expected.push_str(p);
            }
            _ => input.push_str(rng.pick(COMMENTS)),
        }
    }
    (input, expected)
}

#[test]
fn well_formed_inputs_strip_exactly() {
    let mut rng = SimpleRng::new(0x1234_5678);
    for pieces in [0, 1, 2, 5, 20, 100] {
        for _ in 0..50 {
            let (input, expected) = well_formed(&mut rng, pieces);
            assert_invariants(&input);

            let out = strip_block_comments(&input);
            assert_eq!(out, expected, "input: {:?}", truncate(&input, 200));
            assert_eq!(strip_block_comments(&out), out, "not idempotent");

            let outside_literals: String = segments(&out)
                .filter(|s| s.kind == SegmentKind::Code)
                .map(|s| s.text(&out))
                .collect();
            assert!(
                !outside_literals.contains("/*"),
                "comment opener left in {:?}",
                truncate(&out, 200)
            );
        }
    }
}
