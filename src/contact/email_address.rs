use std::{fmt::Display, str::FromStr};

use thiserror::Error;

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Error, Debug, Eq, PartialEq)]
#[error("invalid email address {address:?}")]
pub struct InvalidEmailAddressError {
    address: String,
}

impl FromStr for EmailAddress {
    type Err = InvalidEmailAddressError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let address = value.trim();
        let valid = address
            .split_once('@')
            .is_some_and(|(local_part, domain)| {
                !local_part.is_empty() && !domain.is_empty() && !domain.contains('@')
            });
        if valid && !address.contains(char::is_whitespace) {
            Ok(Self(address.to_string()))
        } else {
            Err(Self::Err {
                address: value.to_string(),
            })
        }
    }
}

impl Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use assertables::*;
    use rstest::*;

    use super::*;

    #[rstest]
    fn test_parse_trims_surrounding_whitespace() {
        let address = assert_ok!(EmailAddress::from_str("  alice@example.org\n"));
        assert_eq!("alice@example.org", address.as_str());
        assert_eq!("alice@example.org", address.to_string());
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("alice")]
    #[case("@example.org")]
    #[case("alice@")]
    #[case("alice@@example.org")]
    #[case("alice@exa@mple.org")]
    #[case("al ice@example.org")]
    fn test_parse_rejects_malformed_addresses(#[case] value: &str) {
        assert_err!(EmailAddress::from_str(value));
    }
}
