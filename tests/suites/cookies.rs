use proptest::prelude::*;
use safecookie::cookie::{
    Cookie, CookieError, MAX_COOKIE_SIZE, decode_value, encode_value, read_bytes, write_bytes,
};
use safecookie::{Request, Response};

const PROPTEST_CASES: u32 = 256;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(PROPTEST_CASES))]

    #[test]
    fn encoded_values_decode_to_original(value in prop::collection::vec(any::<u8>(), 0..512)) {
        prop_assert_eq!(decode_value(&encode_value(&value)).unwrap(), value);
    }

    #[test]
    fn written_cookie_reads_back(value in prop::collection::vec(any::<u8>(), 0..512)) {
        let mut response = Response::new(200);
        write_bytes(&mut response, Cookie::new("c", ""), &value).unwrap();

        let line = response.header("Set-Cookie").unwrap();
        let request = Request::new("GET", "/").with_header("Cookie", line);
        prop_assert_eq!(read_bytes(&request, "c").unwrap(), value);
    }

    #[test]
    fn encoded_values_use_url_safe_alphabet(value in prop::collection::vec(any::<u8>(), 0..256)) {
        let encoded = encode_value(&value);
        prop_assert_eq!(encoded.len() % 4, 0);
        prop_assert!(encoded
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_' || b == b'='));
    }
}

#[test]
fn test_writer_checks_full_line_not_just_value() {
    // The value alone fits; the attributes push the line over the limit.
    let raw = vec![b'v'; 3000];
    let mut cookie = Cookie::new("c", "");
    cookie.path = format!("/{}", "p".repeat(MAX_COOKIE_SIZE - 4000));

    let mut response = Response::new(200);
    let err = write_bytes(&mut response, cookie, &raw).unwrap_err();

    assert!(matches!(err, CookieError::ValueTooLong { len } if len > MAX_COOKIE_SIZE));
    assert!(response.header("Set-Cookie").is_none());
}

#[test]
fn test_oversized_value_rejected() {
    let mut response = Response::new(200);
    let err = write_bytes(&mut response, Cookie::new("c", ""), &[0u8; 4096]).unwrap_err();
    assert!(matches!(err, CookieError::ValueTooLong { .. }));
}
