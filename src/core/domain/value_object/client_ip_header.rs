use crate::core::domain::error::ValidationError;
use std::{fmt, str::FromStr};

/// Response header used to pass the client IP to the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClientIpHeader {
    #[default]
    CdnSrcIp,
    XForwardedFor,
}

impl ClientIpHeader {
    pub const ALL: [ClientIpHeader; 2] = [ClientIpHeader::CdnSrcIp, ClientIpHeader::XForwardedFor];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientIpHeader::CdnSrcIp => "Cdn-Src-Ip",
            ClientIpHeader::XForwardedFor => "X-Forwarded-For",
        }
    }
}

impl fmt::Display for ClientIpHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClientIpHeader {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|header| header.as_str() == s)
            .ok_or_else(|| {
                ValidationError::ConstraintViolation(format!(
                    "Invalid client IP header '{}'. Allowed values are: {}",
                    s,
                    Self::ALL.map(|h| h.as_str()).join(", ")
                ))
            })
    }
}
