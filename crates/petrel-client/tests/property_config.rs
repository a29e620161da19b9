//! End-to-end tests for the configuration property surface: exact buffer
//! semantics, sentinel validation, and the two-channel failure contract.

use petrel_client::{
    codes,
    consts::{actions, buflen, properties},
    ClientContext, MessageScope,
};

#[track_caller]
fn check_last_message(ctx: &ClientContext, code: u32, fragment: &str) {
    let diag = ctx.sink().current().expect("a diagnostic should be recorded");
    assert_eq!(diag.scope, MessageScope::CoreServices);
    assert_eq!(diag.code, code);
    assert!(
        diag.text.contains(fragment),
        "message {:?} should contain {:?}",
        diag.text,
        fragment
    );
}

#[test]
fn test_set_stores_no_terminator() {
    let ctx = ClientContext::new();
    let mut src = *b"test";
    ctx.config(actions::SET, properties::USERDATA, &mut src, buflen::NULLTERM, None)
        .unwrap();

    // pre-seeded destination bytes past the stored length must survive
    let mut out_buf = *b"123456\0\0";
    ctx.config(actions::GET, properties::USERDATA, &mut out_buf, 8, None)
        .unwrap();
    assert_eq!(&out_buf[..6], b"test56");
}

#[test]
fn test_set_with_explicit_length_stores_prefix() {
    let ctx = ClientContext::new();
    let mut src = *b"test123";
    ctx.config(actions::SET, properties::USERDATA, &mut src, 4, None)
        .unwrap();

    let mut out_buf = *b"123456\0\0";
    ctx.config(actions::GET, properties::USERDATA, &mut out_buf, 8, None)
        .unwrap();
    assert_eq!(&out_buf[..6], b"test56");
}

#[test]
fn test_invalid_buflen_sentinels_for_set() {
    let ctx = ClientContext::new();
    let mut src = *b"test";
    ctx.config(actions::SET, properties::USERDATA, &mut src, 4, None)
        .unwrap();

    let invalid = [-1, -5, -200, buflen::WILDCARD, buflen::NO_LIMIT, buflen::UNUSED];
    for bad in invalid {
        ctx.sink().reset();
        let mut attempt = *b"junk";
        let err = ctx
            .config(actions::SET, properties::USERDATA, &mut attempt, bad, None)
            .unwrap_err();
        assert_eq!(err.code(), codes::CONFIG_ILLEGAL_PARAM);
        check_last_message(&ctx, codes::CONFIG_ILLEGAL_PARAM, "buflen");
    }

    // idempotent failure: the stored value never changed
    let mut out_buf = [0u8; 4];
    ctx.config(actions::GET, properties::USERDATA, &mut out_buf, 4, None)
        .unwrap();
    assert_eq!(&out_buf, b"test");
}

#[test]
fn test_invalid_action_and_property() {
    let ctx = ClientContext::new();

    ctx.sink().reset();
    let mut src = *b"test";
    ctx.config(1000, properties::USERDATA, &mut src, 4, None)
        .unwrap_err();
    check_last_message(&ctx, codes::CONFIG_ILLEGAL_PARAM, "action");

    // property is validated before buflen
    ctx.sink().reset();
    ctx.config(actions::SET, 100_000, &mut [], buflen::UNUSED, None)
        .unwrap_err();
    check_last_message(&ctx, codes::CONFIG_ILLEGAL_PARAM, "property");
}

#[test]
fn test_get_with_exact_capacity() {
    let ctx = ClientContext::new();
    let mut src = *b"test";
    ctx.config(actions::SET, properties::USERDATA, &mut src, 4, None)
        .unwrap();

    let mut out_buf = [0u8; 4];
    ctx.config(actions::GET, properties::USERDATA, &mut out_buf, 4, None)
        .unwrap();
    assert_eq!(&out_buf, b"test");
}

#[test]
fn test_get_with_nullterm_leaves_outlen_unmodified() {
    let ctx = ClientContext::new();
    let mut src = *b"test";
    ctx.config(actions::SET, properties::USERDATA, &mut src, 4, None)
        .unwrap();

    ctx.sink().reset();
    let mut out_buf = [0u8; 8];
    let mut out_len = -123i32;
    let err = ctx
        .config(
            actions::GET,
            properties::USERDATA,
            &mut out_buf,
            buflen::NULLTERM,
            Some(&mut out_len),
        )
        .unwrap_err();
    assert_eq!(err.code(), codes::CONFIG_ILLEGAL_PARAM);
    check_last_message(&ctx, codes::CONFIG_ILLEGAL_PARAM, "buflen");
    assert_eq!(out_len, -123, "outlen untouched on this failure class");
}

#[test]
fn test_get_into_short_buffer() {
    let ctx = ClientContext::new();
    let mut src = *b"test";
    ctx.config(actions::SET, properties::USERDATA, &mut src, 4, None)
        .unwrap();

    ctx.sink().reset();
    let mut out_buf = *b"123456";
    let mut out_len = -123i32;
    let err = ctx
        .config(
            actions::GET,
            properties::USERDATA,
            &mut out_buf,
            2,
            Some(&mut out_len),
        )
        .unwrap_err();
    assert_eq!(err.code(), codes::CONFIG_BUFFER_TOO_SMALL);
    check_last_message(&ctx, codes::CONFIG_BUFFER_TOO_SMALL, " 2 bytes");
    assert_eq!(out_len, 4, "outlen reports the stored length");
    assert_eq!(&out_buf, b"123456", "destination completely unmodified");
}

#[test]
fn test_clear_then_get_reads_empty() {
    let ctx = ClientContext::new();
    let mut src = *b"test";
    ctx.config(actions::SET, properties::USERDATA, &mut src, 4, None)
        .unwrap();
    ctx.config(actions::CLEAR, properties::USERDATA, &mut [], buflen::UNUSED, None)
        .unwrap();

    let mut out_buf = *b"xy";
    let mut out_len = -1i32;
    ctx.config(
        actions::GET,
        properties::USERDATA,
        &mut out_buf,
        2,
        Some(&mut out_len),
    )
    .unwrap();
    assert_eq!(out_len, 0);
    assert_eq!(&out_buf, b"xy");
}
