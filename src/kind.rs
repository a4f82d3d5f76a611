use crate::error::RegistryError;
use std::fmt;
use std::str::FromStr;

/// HTTP error kinds with a published response schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ErrorKind {
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    UnprocessableEntity,
    InternalServerError,
    GatewayError,
}

impl ErrorKind {
    /// All kinds, in declaration order
    pub const ALL: [ErrorKind; 7] = [
        Self::BadRequest,
        Self::Unauthorized,
        Self::Forbidden,
        Self::NotFound,
        Self::UnprocessableEntity,
        Self::InternalServerError,
        Self::GatewayError,
    ];

    /// Symbolic name used to look the kind up
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BadRequest => "badRequest",
            Self::Unauthorized => "unauthorized",
            Self::Forbidden => "forbidden",
            Self::NotFound => "notFound",
            Self::UnprocessableEntity => "unprocessableEntity",
            Self::InternalServerError => "internalServerError",
            Self::GatewayError => "gatewayError",
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::Unauthorized => 401,
            Self::Forbidden => 403,
            Self::NotFound => 404,
            Self::UnprocessableEntity => 422,
            Self::InternalServerError => 500,
            Self::GatewayError => 502,
        }
    }

    /// The `error` title pinned in the response body
    pub fn title(&self) -> &'static str {
        match self {
            Self::BadRequest => "Bad Request",
            Self::Unauthorized => "Unauthorized",
            Self::Forbidden => "Forbidden",
            Self::NotFound => "Not Found",
            Self::UnprocessableEntity => "Unprocessable Entity",
            Self::InternalServerError => "Internal Server Error",
            Self::GatewayError => "Bad Gateway",
        }
    }

    /// Cross-reference id used by documentation tooling, e.g. `errors/404`
    pub fn reference_id(&self) -> String {
        format!("errors/{}", self.status_code())
    }

    pub fn from_status_code(status_code: u16) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.status_code() == status_code)
    }

    /// Position of the kind in `ALL`
    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorKind {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "badRequest" => Ok(Self::BadRequest),
            "unauthorized" => Ok(Self::Unauthorized),
            "forbidden" => Ok(Self::Forbidden),
            "notFound" => Ok(Self::NotFound),
            "unprocessableEntity" => Ok(Self::UnprocessableEntity),
            "internalServerError" => Ok(Self::InternalServerError),
            "gatewayError" => Ok(Self::GatewayError),
            _ => Err(RegistryError::UnknownErrorKind(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_parse_back_to_the_same_kind() {
        for kind in ErrorKind::ALL {
            assert_eq!(kind.as_str().parse::<ErrorKind>().unwrap(), kind);
        }
    }

    #[test]
    fn names_are_case_sensitive() {
        assert!(matches!(
            "BadRequest".parse::<ErrorKind>(),
            Err(RegistryError::UnknownErrorKind(name)) if name == "BadRequest"
        ));
    }

    #[test]
    fn index_follows_declaration_order() {
        for (position, kind) in ErrorKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), position);
        }
    }

    #[test]
    fn status_code_lookup() {
        assert_eq!(ErrorKind::from_status_code(502), Some(ErrorKind::GatewayError));
        assert_eq!(ErrorKind::from_status_code(418), None);
    }
}
