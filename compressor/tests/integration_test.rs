use rand::Rng;

use compressor::{
    Compressor,
    CompressorError,
    lzw::{Decoder, Encoder, LZW},
};

#[test]
fn decompress_compress_same_value() {
    let mut rng = rand::thread_rng();

    let lzw = LZW::new();

    for _ in 0..100 {
        let length = rng.gen_range(100..2000);
        let uncompressed1: Vec<u8> = (0..length).map(|_| rng.gen_range(0..255)).collect();

        let compressed = lzw.compress(&uncompressed1).unwrap();
        let uncompressed2 = lzw.decompress(&compressed).unwrap();

        assert_eq!(uncompressed1, uncompressed2);
    }
}

#[test]
fn small_alphabet_same_value() {
    let mut rng = rand::thread_rng();

    let lzw = LZW::new();
    let alphabet = ['A', 'B', 'C', 'a', ' ', '\n', '\u{e9}'];

    for _ in 0..100 {
        let length = rng.gen_range(0..3000);
        let text: String = (0..length)
            .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
            .collect();

        let compressed = lzw.compress_text(&text).unwrap();
        assert!(compressed.len() <= text.chars().count());

        let decompressed = lzw.decompress_text(&compressed).unwrap();
        assert_eq!(text, decompressed);
    }
}

#[test]
fn free_functions_match_lzw() {
    let text = "TGATGATGAAGACATCAGCATTGAAGGGCTGATGGAACACATCCCGGGGCCGGAC";

    let codes = compressor::encode(text).unwrap();
    assert_eq!(codes, LZW::new().compress_text(text).unwrap());
    assert_eq!(codes, compressor::encode_bytes(text.as_bytes()).unwrap());

    assert_eq!(compressor::decode(&codes).unwrap(), text);
    assert_eq!(compressor::decode_bytes(&codes).unwrap(), text.as_bytes());
}

#[test]
fn utf8_text_round_trips_as_bytes() {
    let text = "appears frequently in computer science and in many other ﬁelds.";

    assert!(compressor::encode(text).is_err());

    let codes = compressor::encode_bytes(text.as_bytes()).unwrap();
    let bytes = compressor::decode_bytes(&codes).unwrap();

    assert_eq!(String::from_utf8(bytes).unwrap(), text);
}

#[test]
fn counters_in_lock_step_for_random_input() {
    let mut rng = rand::thread_rng();

    for _ in 0..50 {
        let length = rng.gen_range(0..1000);
        let src: Vec<u8> = (0..length).map(|_| rng.gen_range(b'a'..b'e')).collect();

        let encoded = Encoder::new().encode(&src).unwrap();
        let decoded = Decoder::<u8>::new().decode(&encoded.codes).unwrap();

        assert_eq!(encoded.next_code, decoded.next_code);
        assert_eq!(decoded.symbols, src);
    }
}

#[test]
fn shared_compressor() {
    let compressor: std::sync::Arc<dyn Compressor> = std::sync::Arc::new(LZW::new());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let compressor = compressor.clone();
            std::thread::spawn(move || {
                let text = "ABC".repeat(10 + i);
                let codes = compressor.compress_text(&text).unwrap();
                compressor.decompress_text(&codes).unwrap() == text
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

#[test]
fn rejects_unseeded_byte() {
    let r = compressor::encode_bytes(&[0xff]);
    assert_eq!(r.unwrap_err(), CompressorError::UnsupportedSymbol { symbol: 255, position: 0 });
}
