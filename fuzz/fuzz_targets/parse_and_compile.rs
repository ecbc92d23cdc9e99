#![no_main]
use libfuzzer_sys::fuzz_target;

use pgpgpg::defaultkey::KeyLookupError;
use pgpgpg::{compile, parse_args_from, KeyResolver};

struct NoKeys;

impl KeyResolver for NoKeys {
    fn default_key(&self) -> Result<String, KeyLookupError> {
        Err(KeyLookupError::NoSecretKey)
    }
}

fuzz_target!(|data: &[u8]| {
    // NUL separates arguments, as it would in a real argv.
    let text = String::from_utf8_lossy(data);
    let args: Vec<String> = text.split('\0').map(str::to_owned).collect();

    let Ok(opts) = parse_args_from(&args) else {
        return;
    };
    if let Ok(invocation) = compile(&opts, "gpg", &NoKeys) {
        let argv = invocation.argv.to_vec();
        assert_eq!(argv.first().map(String::as_str), Some("gpg"));
    }
});
