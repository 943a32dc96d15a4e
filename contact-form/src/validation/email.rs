use std::sync::LazyLock;

use email_address::{EmailAddress, Options};
use regex::Regex;

/// Dot-atom local part: no quoting, no spaces.
static LOCAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*$")
        .expect("local part pattern is valid")
});

/// Dotted host name ending in an alphabetic TLD, or a bracketed IPv4 literal.
static DOMAIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\[[0-9]{1,3}(?:\.[0-9]{1,3}){3}\]|(?:[A-Za-z0-9-]+\.)+[A-Za-z]{2,})$")
        .expect("domain pattern is valid")
});

/// True for a bare address a person would type into an email field: RFC 5322
/// syntax without a display name, a dot-atom local part and a routable-looking
/// domain. `user@domain` (no TLD) and `Name <user@domain.com>` are rejected.
pub fn is_valid_email(value: &str) -> bool {
    let options = Options::default().without_display_text();
    let Ok(address) = EmailAddress::parse_with_options(value, options) else {
        return false;
    };
    LOCAL.is_match(address.local_part()) && DOMAIN.is_match(address.domain())
}
