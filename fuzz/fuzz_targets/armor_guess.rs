#![no_main]
use libfuzzer_sys::fuzz_target;

use pgpgpg::armor::{guess_armor_type_from, ArmorType};

fuzz_target!(|data: &[u8]| {
    let kind = guess_armor_type_from(data);

    // Once a header line has been classified, nothing after it matters.
    if kind != ArmorType::Error && data.ends_with(b"\n") {
        let mut extended = data.to_vec();
        extended.extend_from_slice(b"-----END PGP MESSAGE-----\n\xff\xfe trailing\n");
        assert_eq!(guess_armor_type_from(&extended[..]), kind);
    }
});
