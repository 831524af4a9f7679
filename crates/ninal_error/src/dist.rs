// optimal string alignment distance (Damerau-Levenshtein without substring edits)
// inputs longer than 32 bytes are cut: it's only used for "Do you mean ...?" messages
pub fn edit_distance(a: &[u8], b: &[u8]) -> usize {
    let a = &a[..a.len().min(32)];
    let b = &b[..b.len().min(32)];

    if a.is_empty() || b.is_empty() {
        return a.len().max(b.len());
    }

    // table[i][j]: distance between a[..i] and b[..j]
    let mut table = vec![vec![0; b.len() + 1]; a.len() + 1];

    for i in 0..=a.len() {
        table[i][0] = i;
    }

    for j in 0..=b.len() {
        table[0][j] = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = (a[i - 1] != b[j - 1]) as usize;

            let mut d = (table[i - 1][j] + 1)
                .min(table[i][j - 1] + 1)
                .min(table[i - 1][j - 1] + cost);

            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                d = d.min(table[i - 2][j - 2] + 1);
            }

            table[i][j] = d;
        }
    }

    table[a.len()][b.len()]
}

// lowercase, `_` and `-` removed
fn preprocess(s: &[u8]) -> Vec<u8> {
    s.iter().map(
        |c| c.to_ascii_lowercase()
    ).filter(
        |c| *c != b'_' && *c != b'-'
    ).collect()
}

/// How far `sub` is from `s`, or from the closest substring of `s` when `sub` is
/// noticeably shorter. `--dump` is close to `--dump-ast`, for example.
pub fn substr_edit_distance(sub: &[u8], s: &[u8]) -> usize {
    let sub = &preprocess(sub);
    let s = &preprocess(s);

    if sub == s {
        0
    }

    else if sub.len() >= s.len() || s.len() < 4 || sub.len() * 2 <= s.len() {
        edit_distance(sub, s)
    }

    else {
        let mut result = edit_distance(sub, s);

        for start in 0..s.len() {
            for end in (start + 1)..=s.len() {
                result = result.min(edit_distance(sub, &s[start..end]));
            }
        }

        result
    }
}
