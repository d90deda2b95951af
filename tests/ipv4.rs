use ipvalue::{Address, InvalidAddress, Ipv4Address, Ipv6Address};

fn v4(text: &str) -> Ipv4Address {
    text.parse()
        .unwrap_or_else(|e| panic!("{text:?} should parse: {e}"))
}

fn expect_error(result: Result<Ipv4Address, InvalidAddress>, message: &str) {
    match result {
        Ok(addr) => panic!("expected error {message:?}, got address {addr}"),
        Err(e) => assert_eq!(e.to_string(), message),
    }
}

// -------------------------------------------------------
// CONSTRUCTION
// -------------------------------------------------------

#[test]
fn from_array_matches_literal_octets() {
    let addr = Ipv4Address::from_array(&[127, 0, 0, 1]).unwrap();

    assert_eq!(addr, Ipv4Address::new(127, 0, 0, 1));
    assert_eq!(addr, Ipv4Address::LOCALHOST);
}

#[test]
fn from_array_accepts_any_integer_type() {
    let wide: [i64; 4] = [10, 20, 30, 40];
    let narrow: [u8; 4] = [10, 20, 30, 40];

    assert_eq!(
        Ipv4Address::from_array(&wide).unwrap(),
        Ipv4Address::from_array(&narrow).unwrap()
    );
}

#[test]
fn from_array_accepts_usize_and_u128() {
    let indices: Vec<usize> = vec![198, 51, 100, 7];
    let wide: [u128; 4] = [198, 51, 100, 7];

    assert_eq!(Ipv4Address::from_array(&indices[..]).unwrap(), v4("198.51.100.7"));
    assert_eq!(Ipv4Address::from_array(&wide).unwrap(), v4("198.51.100.7"));

    expect_error(
        Ipv4Address::from_array(&[1usize, 2, 3, 256]),
        "Byte must be between 0 and 255, got 256.",
    );
    expect_error(
        Ipv4Address::from_array(&[u128::MAX, 0, 0, 0]),
        "Byte must be between 0 and 255, got 340282366920938463463374607431768211455.",
    );
}

#[test]
fn from_array_rejects_wrong_count() {
    expect_error(
        Ipv4Address::from_array(&[1, 2, 3]),
        "Invalid array element count, expected 4 got 3.",
    );
    expect_error(
        Ipv4Address::from_array(&[1, 2, 3, 4, 5]),
        "Invalid array element count, expected 4 got 5.",
    );
    expect_error(
        Ipv4Address::from_array::<i32>(&[]),
        "Invalid array element count, expected 4 got 0.",
    );
}

#[test]
fn from_array_rejects_out_of_range_octets() {
    expect_error(
        Ipv4Address::from_array(&[1, 256, 3, 4]),
        "Byte must be between 0 and 255, got 256.",
    );
    expect_error(
        Ipv4Address::from_array(&[-1, 0, 0, 0]),
        "Byte must be between 0 and 255, got -1.",
    );
}

#[test]
fn from_values_reports_non_integers() {
    let values = serde_json::json!([192, "168", 0, 1]);

    expect_error(
        Ipv4Address::from_values(values.as_array().unwrap()),
        "Byte must be a valid integer, got string.",
    );

    let values = serde_json::json!([192, 168, 0, 1]);
    assert_eq!(
        Ipv4Address::from_values(values.as_array().unwrap()).unwrap(),
        Ipv4Address::new(192, 168, 0, 1)
    );
}

#[test]
fn from_binary_requires_four_bytes() {
    assert_eq!(
        Ipv4Address::from_binary(&[192, 0, 2, 1]).unwrap(),
        Ipv4Address::new(192, 0, 2, 1)
    );
    expect_error(
        Ipv4Address::from_binary(&[192, 0, 2]),
        "Invalid byte count, expected 4 or 16 got 3.",
    );
    expect_error(
        Ipv4Address::from_binary(&[0; 16]),
        "Invalid byte count, expected 4 or 16 got 16.",
    );
}

#[test]
fn from_integer_and_decimal() {
    assert_eq!(Ipv4Address::from_integer(2130706433).unwrap(), Ipv4Address::LOCALHOST);
    assert_eq!(Ipv4Address::from(0xffff_ffffu32), Ipv4Address::BROADCAST);
    assert_eq!(Ipv4Address::from_decimal("3221225985").unwrap(), v4("192.0.2.1"));

    expect_error(
        Ipv4Address::from_integer(4294967296),
        "Unrecognized address '4294967296'.",
    );
    expect_error(
        Ipv4Address::from_decimal("4294967296"),
        "Unrecognized address '4294967296'.",
    );
    expect_error(Ipv4Address::from_decimal("-1"), "Unrecognized address '-1'.");
}

#[test]
fn from_string_is_strict() {
    assert_eq!(v4("0.0.0.0"), Ipv4Address::UNSPECIFIED);
    assert_eq!(v4("255.255.255.255"), Ipv4Address::BROADCAST);

    for bad in ["", "1.2.3", "1.2.3.256", "01.2.3.4", "::1", "1.2.3.4 ", "localhost"] {
        expect_error(
            Ipv4Address::from_string(bad),
            &format!("Unrecognized address '{bad}'."),
        );
    }
}

// -------------------------------------------------------
// RENDERING
// -------------------------------------------------------

#[test]
fn renders_dotted_decimal_and_json() {
    let addr = Ipv4Address::new(192, 168, 10, 1);

    assert_eq!(addr.to_string(), "192.168.10.1");
    assert_eq!(addr.to_json(), "\"192.168.10.1\"");
    assert_eq!(serde_json::to_string(&addr).unwrap(), "\"192.168.10.1\"");
    assert_eq!(
        serde_json::from_str::<Ipv4Address>("\"192.168.10.1\"").unwrap(),
        addr
    );
    assert!(serde_json::from_str::<Ipv4Address>("\"192.168.10\"").is_err());
}

#[test]
fn integer_matches_network_to_integer_conversion() {
    let addr = v4("127.0.0.1");

    assert_eq!(addr.to_u32(), 2130706433);
    assert_eq!(addr.to_integer(), 2130706433);
    assert_eq!(addr.to_decimal(), "2130706433");
    assert_eq!(u32::from(addr), u32::from(std::net::Ipv4Addr::LOCALHOST));

    // Values above i32::MAX stay unsigned.
    assert_eq!(Ipv4Address::BROADCAST.to_decimal(), "4294967295");
}

#[test]
fn integer_form_agrees_with_codec() {
    for text in ["0.0.0.0", "10.1.2.3", "192.0.2.1", "255.255.255.255"] {
        let addr = v4(text);
        let expected = ipvalue::codec::be_bytes_to_integer(&addr.octets());

        assert_eq!(addr.to_integer(), expected, "{text}");
        assert_eq!(addr.to_u32() as u128, expected, "{text}");
        assert_eq!(Ipv4Address::from_integer(expected).unwrap(), addr, "{text}");
        assert_eq!(addr.to_binary(), ipvalue::codec::flat_bytes_from_groups(&addr.octets()));
    }
}

#[test]
fn binary_and_iteration_are_network_order() {
    let addr = Ipv4Address::new(1, 2, 3, 4);

    assert_eq!(addr.to_binary(), vec![1, 2, 3, 4]);
    assert_eq!(addr.bytes().collect::<Vec<_>>(), vec![1, 2, 3, 4]);

    // Iteration is restartable.
    let first: Vec<u8> = (&addr).into_iter().collect();
    let second: Vec<u8> = (&addr).into_iter().collect();
    assert_eq!(first, second);
}

// -------------------------------------------------------
// CLASSIFICATION
// -------------------------------------------------------

#[test]
fn broadcast() {
    assert!(Ipv4Address::new(255, 255, 255, 255).is_broadcast());
    assert!(!Ipv4Address::new(255, 255, 255, 254).is_broadcast());
}

#[test]
fn documentation_ranges() {
    for text in ["192.0.2.0", "192.0.2.255", "198.51.100.7", "203.0.113.200"] {
        assert!(v4(text).is_documentation(), "{text}");
        assert!(!v4(text).is_global(), "{text}");
    }

    assert!(!v4("192.0.3.1").is_documentation());
}

#[test]
fn link_local() {
    assert!(v4("192.254.0.1").is_link_local());
    assert!(!v4("192.253.0.1").is_link_local());
}

#[test]
fn loopback() {
    assert!(v4("127.0.0.1").is_loopback());
    assert!(v4("127.255.255.255").is_loopback());
    assert!(!v4("128.0.0.1").is_loopback());
}

#[test]
fn private_ranges() {
    assert!(Ipv4Address::new(10, 0, 0, 0).is_private());
    assert!(Ipv4Address::new(10, 255, 255, 255).is_private());
    assert!(v4("172.16.0.0").is_private());
    assert!(v4("172.31.255.255").is_private());
    assert!(v4("192.168.1.1").is_private());

    assert!(!v4("172.15.255.255").is_private());
    assert!(!v4("172.32.0.0").is_private());
    assert!(!v4("192.169.0.0").is_private());
}

#[test]
fn unspecified() {
    assert!(Ipv4Address::UNSPECIFIED.is_unspecified());
    assert!(!v4("0.0.0.1").is_unspecified());
}

#[test]
fn global() {
    assert!(Ipv4Address::new(64, 233, 160, 0).is_global());
    assert!(v4("8.8.8.8").is_global());

    for text in ["255.255.255.255", "10.1.2.3", "127.0.0.1", "0.0.0.0", "192.254.1.1"] {
        assert!(!v4(text).is_global(), "{text}");
    }
}

// -------------------------------------------------------
// IPV6 EMBEDDING
// -------------------------------------------------------

#[test]
fn ipv6_compatible_and_mapped() {
    let addr = v4("192.0.2.33");

    assert_eq!(
        addr.to_ipv6_compatible(),
        Ipv6Address::new(0, 0, 0, 0, 0, 0, 0xc000, 0x0221)
    );
    assert_eq!(
        addr.to_ipv6_mapped(),
        Ipv6Address::new(0, 0, 0, 0, 0, 0xffff, 0xc000, 0x0221)
    );
    assert_eq!(addr.to_ipv6_mapped().to_ipv4_address(), Some(addr));
    assert_eq!(addr.to_ipv6_compatible().to_ipv4_address(), Some(addr));
}

#[test]
fn std_interop() {
    let std_addr = std::net::Ipv4Addr::new(203, 0, 113, 9);
    let addr = Ipv4Address::from(std_addr);

    assert_eq!(addr.to_string(), std_addr.to_string());
    assert_eq!(std::net::Ipv4Addr::from(addr), std_addr);
}
