//! Post-action navigation targets

/// Destination reached after a successful flow
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Redirect {
    Home,
    Otp,
    CheckoutSuccess,
}

impl Redirect {
    pub fn path(&self) -> &'static str {
        match self {
            Redirect::Home => "/",
            Redirect::Otp => "/otp",
            Redirect::CheckoutSuccess => "/checkout/success",
        }
    }

    /// Path with a single query parameter appended
    pub fn with_query(&self, key: &str, value: &str) -> String {
        format!("{}?{}={}", self.path(), key, encode_query_value(value))
    }
}

/// Percent-encode a query value, leaving unreserved characters and `@` as is
pub fn encode_query_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' | b'@' => {
                out.push(char::from(byte))
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(Redirect::Home.path(), "/");
        assert_eq!(Redirect::Otp.path(), "/otp");
        assert_eq!(Redirect::CheckoutSuccess.path(), "/checkout/success");
    }

    #[test]
    fn test_with_query_encodes_value() {
        assert_eq!(
            Redirect::Otp.with_query("email", "ana+test@saby.io"),
            "/otp?email=ana%2Btest@saby.io"
        );
        assert_eq!(
            Redirect::CheckoutSuccess.with_query("ref", "SBY-PRO-00005"),
            "/checkout/success?ref=SBY-PRO-00005"
        );
    }

    #[test]
    fn test_encode_query_value_multibyte() {
        assert_eq!(encode_query_value("a b"), "a%20b");
        assert_eq!(encode_query_value("é"), "%C3%A9");
    }
}
