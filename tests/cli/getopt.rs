// Integration tests for cli/getopt.rs — the bundled single-letter scanner

use pgpgpg::cli::getopt::{Scan, Scanner};
use pgpgpg::cli::options::{FORMAT_DECRYPT, FORMAT_INITIAL, FORMAT_KEY};

fn args(a: &[&str]) -> Vec<String> {
    a.iter().map(|s| s.to_string()).collect()
}

#[test]
fn scans_a_full_legacy_command_line() {
    let argv = args(&["-ea", "letter.txt", "bob", "-o", "out.asc"]);
    let mut s = Scanner::new(&argv);
    assert_eq!(s.next(FORMAT_INITIAL), Scan::Flag('e'));
    assert_eq!(s.next(FORMAT_INITIAL), Scan::Flag('a'));
    assert_eq!(s.next(FORMAT_INITIAL), Scan::Positional("letter.txt"));
    assert_eq!(s.next(FORMAT_INITIAL), Scan::Positional("bob"));
    assert_eq!(s.next(FORMAT_INITIAL), Scan::FlagWithValue('o', "out.asc"));
    assert_eq!(s.next(FORMAT_INITIAL), Scan::End);
    assert_eq!(s.index(), argv.len());
}

#[test]
fn end_is_sticky() {
    let argv = args(&[]);
    let mut s = Scanner::new(&argv);
    assert_eq!(s.next(FORMAT_INITIAL), Scan::End);
    assert_eq!(s.next(FORMAT_INITIAL), Scan::End);
}

#[test]
fn key_format_rejects_output_letter() {
    let argv = args(&["-kvo", "x"]);
    let mut s = Scanner::new(&argv);
    assert_eq!(s.next(FORMAT_INITIAL), Scan::Flag('k'));
    assert_eq!(s.next(FORMAT_KEY), Scan::Flag('v'));
    assert_eq!(s.next(FORMAT_KEY), Scan::Unknown('o'));
    assert_eq!(s.failed_option(), Some('o'));
}

#[test]
fn decrypt_format_takes_passphrase_value() {
    let argv = args(&["-dzsecret"]);
    let mut s = Scanner::new(&argv);
    assert_eq!(s.next(FORMAT_INITIAL), Scan::Flag('d'));
    assert_eq!(s.next(FORMAT_DECRYPT), Scan::FlagWithValue('z', "secret"));
    assert_eq!(s.value(), Some("secret"));
}

#[test]
fn value_of_last_call_is_cleared() {
    let argv = args(&["-z", "pw", "-a"]);
    let mut s = Scanner::new(&argv);
    s.next(FORMAT_INITIAL);
    assert_eq!(s.value(), Some("pw"));
    assert_eq!(s.next(FORMAT_INITIAL), Scan::Flag('a'));
    assert_eq!(s.value(), None);
}
