#![no_main]

use cursor::ByteReader;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut reader = ByteReader::new(data);
    let mut idx = 0usize;

    // Use input bytes to drive a bounded sequence of operations.
    while idx < data.len() && idx < 1024 {
        let op = data[idx] % 7;
        idx += 1;

        let before = reader.position();
        let ok = match op {
            0 => reader.read_u8().is_ok(),
            1 => reader.read_u16().is_ok(),
            2 => reader.read_u32().is_ok(),
            3 => reader.read_u64().is_ok(),
            4 => reader.read_bool().is_ok(),
            5 => reader.read_cstring().is_ok(),
            _ => reader
                .read_bytes(usize::from(data[idx - 1] >> 3))
                .is_ok(),
        };
        assert!(reader.position() <= data.len());
        if !ok {
            assert_eq!(reader.position(), before);
        }
    }
});
