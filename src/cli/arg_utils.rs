// arg_utils.rs — low-level string helpers used by the scanners and the
// command compiler.

/// Characters the legacy long-option syntax treats as surrounding blanks.
const BLANKS: &[char] = &[' ', '\t'];

/// Trims spaces and tabs (only) from both ends of `s`.
pub fn trim_blanks(s: &str) -> &str {
    s.trim_matches(BLANKS)
}

/// Trims spaces and tabs from the start of `s`.
pub fn trim_blanks_start(s: &str) -> &str {
    s.trim_start_matches(BLANKS)
}

/// Parses a leading decimal integer the way C `atoi` does: optional leading
/// whitespace, optional sign, then as many digits as are present.  Returns 0
/// when no digits follow.  Overflow wraps instead of being undefined.
pub fn atoi(s: &str) -> i32 {
    let bytes = s.trim_start().as_bytes();
    let mut i = 0usize;
    let mut negative = false;

    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        negative = bytes[i] == b'-';
        i += 1;
    }

    let mut result: i32 = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        result = result.wrapping_mul(10).wrapping_add((bytes[i] - b'0') as i32);
        i += 1;
    }

    if negative {
        result.wrapping_neg()
    } else {
        result
    }
}

/// Splits `path` at its last `.` into `(base, Some(extension))`, or returns
/// `(path, None)` when there is no dot at all.
///
/// The search runs over the whole string, directory components included:
/// `"dir.d/file"` splits into `("dir", Some("d/file"))`.  Legacy scripts
/// rely on that behaviour, so it is not "fixed" here.
pub fn split_extension(path: &str) -> (&str, Option<&str>) {
    match path.rfind('.') {
        Some(pos) => (&path[..pos], Some(&path[pos + 1..])),
        None => (path, None),
    }
}

/// Returns `true` when `input` abbreviates `keyword`: `input` must be a
/// case-insensitive prefix of `keyword` and at least `min_len` bytes long.
pub fn abbreviates(keyword: &str, input: &str, min_len: usize) -> bool {
    input.len() >= min_len
        && input.len() <= keyword.len()
        && keyword.as_bytes()[..input.len()].eq_ignore_ascii_case(input.as_bytes())
}

/// Renders an argument vector as a single space-separated line for display.
pub fn join_command_line<S: AsRef<str>>(argv: &[S]) -> String {
    argv.iter()
        .map(|s| s.as_ref())
        .collect::<Vec<_>>()
        .join(" ")
}
