use tuidom::text::{char_width, display_width};

// ============================================================================
// Width
// ============================================================================

#[test]
fn test_ascii_width() {
    assert_eq!(display_width("Contact Form"), 12);
    assert_eq!(display_width(""), 0);
}

#[test]
fn test_cjk_width() {
    assert_eq!(display_width("日本語"), 6);
    assert_eq!(char_width('日'), 2);
}

#[test]
fn test_mixed_width() {
    assert_eq!(display_width("a日b"), 4);
}
