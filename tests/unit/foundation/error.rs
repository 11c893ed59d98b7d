use super::*;

#[test]
fn constructors_tag_messages() {
    let e = ScrollfilmError::validation("bad percent");
    assert_eq!(e.to_string(), "validation error: bad percent");

    let e = ScrollfilmError::compile("selector matched nothing");
    assert_eq!(e.to_string(), "compile error: selector matched nothing");

    let e = ScrollfilmError::host("viewport unavailable");
    assert_eq!(e.to_string(), "host error: viewport unavailable");
}

#[test]
fn anyhow_errors_pass_through() {
    let e: ScrollfilmError = anyhow::anyhow!("lower-level failure").into();
    assert_eq!(e.to_string(), "lower-level failure");
}
