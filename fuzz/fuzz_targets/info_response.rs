#![no_main]

use libfuzzer_sys::fuzz_target;
use wire::{decode_info_with_flags, encode_info_to_vec};

fuzz_target!(|data: &[u8]| {
    // Decoding arbitrary bytes must never panic.
    let Ok((info, flags)) = decode_info_with_flags(data) else {
        return;
    };

    // Anything that decodes must survive an encode/decode round trip.
    // Lossy UTF-8 replacement keeps text free of zero bytes, so encoding succeeds.
    let bytes = encode_info_to_vec(&info, flags).expect("decoded text has no zero bytes");
    let (again, again_flags) = decode_info_with_flags(&bytes).expect("re-encoded response decodes");
    assert_eq!(again, info);
    assert_eq!(again_flags, flags);
});
