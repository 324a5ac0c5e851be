use serde::Serialize;
use std::collections::HashMap;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    Equal,
    Replace,
    Insert,
    Delete,
}

/// One unit of the character alignment between original and corrected text.
///
/// The full opcode sequence partitions both strings exactly: spans are
/// contiguous, in order, and cover every character on each side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOp {
    pub kind: OpKind,
    pub original: Range<usize>,
    pub corrected: Range<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorCategory {
    Spelling,
    Grammar,
    Punctuation,
}

impl ErrorCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ErrorCategory::Spelling => "Spelling",
            ErrorCategory::Grammar => "Grammar",
            ErrorCategory::Punctuation => "Punctuation",
        }
    }
}

/// One classified edit, derived 1:1 from a non-equal opcode. Order follows
/// the opcode sequence (document order), not category grouping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedError {
    pub category: ErrorCategory,
    pub original_text: String,
    pub corrected_text: String,
}

/// Per-category tallies over a classified error list.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ErrorCounts {
    pub spelling: usize,
    pub grammar: usize,
    pub punctuation: usize,
}

impl ErrorCounts {
    pub fn tally(errors: &[ClassifiedError]) -> Self {
        let mut counts = ErrorCounts::default();
        for error in errors {
            match error.category {
                ErrorCategory::Spelling => counts.spelling += 1,
                ErrorCategory::Grammar => counts.grammar += 1,
                ErrorCategory::Punctuation => counts.punctuation += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.spelling + self.grammar + self.punctuation
    }
}

/// Align the two texts (lower-cased, as character sequences) and classify
/// every non-equal edit.
pub fn classify(original: &str, corrected: &str) -> Vec<ClassifiedError> {
    let a: Vec<char> = original.to_lowercase().chars().collect();
    let b: Vec<char> = corrected.to_lowercase().chars().collect();

    diff_opcodes(&a, &b)
        .iter()
        .filter(|op| op.kind != OpKind::Equal)
        .map(|op| ClassifiedError {
            category: categorize(op, &a, &b),
            original_text: a[op.original.clone()].iter().collect(),
            corrected_text: b[op.corrected.clone()].iter().collect(),
        })
        .collect()
}

/// Classification rules, first match wins:
///   1. Spelling: 1-char-for-1-char replacement
///   2. Grammar: any edit where either span runs past one character
///   3. Punctuation: insert/delete whose span text starts with a
///      non-word, non-space character
///   4. Grammar again: the remaining case, a single word character
///      inserted or deleted (a dropped plural `s`, a missing letter)
fn categorize(op: &EditOp, a: &[char], b: &[char]) -> ErrorCategory {
    let original_len = op.original.len();
    let corrected_len = op.corrected.len();

    if op.kind == OpKind::Replace && original_len == 1 && corrected_len == 1 {
        return ErrorCategory::Spelling;
    }
    if original_len > 1 || corrected_len > 1 {
        return ErrorCategory::Grammar;
    }

    // Only 1-char inserts/deletes remain
    let first_char = a[op.original.clone()]
        .iter()
        .chain(b[op.corrected.clone()].iter())
        .next();
    match first_char {
        Some(&c) if !is_word_char(c) && !c.is_whitespace() => ErrorCategory::Punctuation,
        _ => ErrorCategory::Grammar,
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Compute LCS-based alignment opcodes over two character sequences.
///
/// Port of the classic recursive longest-matching-block algorithm: index the
/// second sequence by character, find the longest match in the window
/// (favoring the earliest position on ties), recurse on both sides, then
/// walk the matching blocks emitting replace/insert/delete for the gaps.
pub fn diff_opcodes(a: &[char], b: &[char]) -> Vec<EditOp> {
    let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, &c) in b.iter().enumerate() {
        b2j.entry(c).or_default().push(j);
    }

    // Collect matching blocks with an explicit work queue
    let mut queue = vec![(0usize, a.len(), 0usize, b.len())];
    let mut matches: Vec<(usize, usize, usize)> = Vec::new();
    while let Some((alo, ahi, blo, bhi)) = queue.pop() {
        let (i, j, size) = find_longest_match(a, &b2j, alo, ahi, blo, bhi);
        if size > 0 {
            matches.push((i, j, size));
            if alo < i && blo < j {
                queue.push((alo, i, blo, j));
            }
            if i + size < ahi && j + size < bhi {
                queue.push((i + size, ahi, j + size, bhi));
            }
        }
    }
    matches.sort_unstable();

    // Merge adjacent blocks, then append a zero-length sentinel
    let mut blocks: Vec<(usize, usize, usize)> = Vec::new();
    for (i, j, size) in matches {
        if let Some(last) = blocks.last_mut() {
            if last.0 + last.2 == i && last.1 + last.2 == j {
                last.2 += size;
                continue;
            }
        }
        blocks.push((i, j, size));
    }
    blocks.push((a.len(), b.len(), 0));

    let mut ops = Vec::new();
    let (mut i, mut j) = (0usize, 0usize);
    for (ai, bj, size) in blocks {
        let kind = if i < ai && j < bj {
            Some(OpKind::Replace)
        } else if i < ai {
            Some(OpKind::Delete)
        } else if j < bj {
            Some(OpKind::Insert)
        } else {
            None
        };
        if let Some(kind) = kind {
            ops.push(EditOp {
                kind,
                original: i..ai,
                corrected: j..bj,
            });
        }
        i = ai + size;
        j = bj + size;
        if size > 0 {
            ops.push(EditOp {
                kind: OpKind::Equal,
                original: ai..i,
                corrected: bj..j,
            });
        }
    }

    ops
}

/// Longest block of matching characters within `a[alo..ahi]` / `b[blo..bhi]`.
///
/// Returns (start in a, start in b, length); length 0 when nothing matches.
/// Ties resolve to the earliest block in `a`, then earliest in `b`.
fn find_longest_match(
    a: &[char],
    b2j: &HashMap<char, Vec<usize>>,
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let (mut besti, mut bestj, mut bestsize) = (alo, blo, 0usize);
    // j2len[j] = length of the match ending at a[i], b[j]
    let mut j2len: HashMap<usize, usize> = HashMap::new();

    for (i, &c) in a.iter().enumerate().take(ahi).skip(alo) {
        let mut new_j2len: HashMap<usize, usize> = HashMap::new();
        if let Some(indices) = b2j.get(&c) {
            for &j in indices {
                if j < blo {
                    continue;
                }
                if j >= bhi {
                    break;
                }
                let k = if j > 0 {
                    j2len.get(&(j - 1)).copied().unwrap_or(0) + 1
                } else {
                    1
                };
                new_j2len.insert(j, k);
                if k > bestsize {
                    besti = i + 1 - k;
                    bestj = j + 1 - k;
                    bestsize = k;
                }
            }
        }
        j2len = new_j2len;
    }

    (besti, bestj, bestsize)
}
