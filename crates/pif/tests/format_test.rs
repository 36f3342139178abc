//! Byte-level checks of the PIF container layout

use pif::{
    build_tree, canonical_codes, consts, count_frequencies, encode_to_vec, initial_codes,
    lengths_from_codes, pack_rgb, Channel, PifImage,
};
use pif_headers::PifHeader;

#[test]
fn test_two_identical_pixels_exact_bytes() {
    let image = PifImage::new(2, 1, vec![pack_rgb(10, 10, 10), pack_rgb(10, 10, 10)]).unwrap();
    let bytes = encode_to_vec(&image).unwrap();

    let mut expected = vec![0x00, 0x02, 0x00, 0x01];
    for _ in 0..3 {
        let mut table = [0u8; 256];
        table[10] = 1;
        expected.extend_from_slice(&table);
    }
    // Six one-bit codes "000000" padded to a single zero byte
    expected.push(0x00);

    assert_eq!(bytes, expected);
}

#[test]
fn test_header_offsets() {
    let pixels = (0..12u32)
        .map(|i| pack_rgb(i as u8, 100, (i % 2) as u8 * 50))
        .collect();
    let image = PifImage::new(4, 3, pixels).unwrap();
    let bytes = encode_to_vec(&image).unwrap();

    assert_eq!(&bytes[0..4], &[0x00, 0x04, 0x00, 0x03]);

    let red = &bytes[4..260];
    let green = &bytes[260..516];
    let blue = &bytes[516..772];
    assert_eq!(red.iter().filter(|&&l| l > 0).count(), 12);
    assert!(red[12..].iter().all(|&l| l == 0));
    assert_eq!(green[100], 1);
    assert_eq!(green.iter().filter(|&&l| l > 0).count(), 1);
    assert_eq!((blue[0], blue[50]), (1, 1));

    // green and blue take one bit per pixel; red's 12 symbols take 3 or 4 bits each
    let red_bits: u64 = red.iter().map(|&l| l as u64).sum();
    let stream_bits = red_bits + 12 + 12;
    assert_eq!(
        bytes.len() as u64,
        consts::PIXEL_STREAM_OFFSET as u64 + stream_bits.div_ceil(8)
    );
}

#[test]
fn test_stored_tables_are_canonical_and_prefix_free() {
    let pixels = (0..4096u32)
        .map(|i| pack_rgb((i % 251) as u8, ((i * i) % 77) as u8, (i / 64) as u8))
        .collect();
    let image = PifImage::new(64, 64, pixels).unwrap();
    let bytes = encode_to_vec(&image).unwrap();
    let header = PifHeader::read(&mut &bytes[..]).unwrap();

    for channel in Channel::ALL {
        let table = canonical_codes(header.lengths(channel)).unwrap();
        let codes: Vec<_> = table.iter().collect();
        for a in &codes {
            assert!(a.length >= 1);
            for b in &codes {
                if a.symbol == b.symbol {
                    continue;
                }
                assert!(!b.to_string().starts_with(&a.to_string()));
                if a.length == b.length {
                    assert_eq!(a.symbol < b.symbol, a.value() < b.value());
                }
            }
        }
    }
}

#[test]
fn test_stored_lengths_match_tree_lengths() {
    let pixels: Vec<u32> = (0..900u32).map(|i| pack_rgb((i % 9) as u8, (i % 4) as u8, 3)).collect();
    let image = PifImage::new(30, 30, pixels).unwrap();
    let bytes = encode_to_vec(&image).unwrap();
    let header = PifHeader::read(&mut &bytes[..]).unwrap();

    for channel in Channel::ALL {
        let samples = image.channel_samples(channel);
        let root = build_tree(&count_frequencies(samples)).unwrap();
        let lengths = lengths_from_codes(&initial_codes(&root)).unwrap();
        assert_eq!(header.lengths(channel), &lengths);
    }
}
