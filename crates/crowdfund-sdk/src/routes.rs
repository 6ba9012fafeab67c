/*!
# Navigation Routes

The three screens of the product and their paths:

| Path | Screen |
|---|---|
| `/` | Landing (enter a campaign address) |
| `/deploy` | Deployment form |
| `/campaign/{address}` | Campaign detail and actions |

The campaign address is carried verbatim. A malformed address is not rejected
here; it surfaces later as a read failure on the campaign screen.
*/

use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("Unknown route: {0}")]
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Landing,
    Deploy,
    Campaign(String),
}

impl Route {
    /// The landing page's address field: blank input goes nowhere.
    pub fn from_landing_input(input: &str) -> Option<Route> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Route::Campaign(trimmed.to_string()))
        }
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let trimmed = path.trim();
        let normalized = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };

        match normalized {
            "" | "/" => Ok(Route::Landing),
            "/deploy" => Ok(Route::Deploy),
            other => match other.strip_prefix("/campaign/") {
                Some(address) if !address.is_empty() && !address.contains('/') => {
                    Ok(Route::Campaign(address.to_string()))
                }
                _ => Err(RouteError::Unknown(path.to_string())),
            },
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Landing => write!(f, "/"),
            Route::Deploy => write!(f, "/deploy"),
            Route::Campaign(address) => write!(f, "/campaign/{}", address),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_routes() {
        assert_eq!("/".parse(), Ok(Route::Landing));
        assert_eq!("/deploy".parse(), Ok(Route::Deploy));
        assert_eq!("/deploy/".parse(), Ok(Route::Deploy));
        assert_eq!(
            "/campaign/0xABC".parse(),
            Ok(Route::Campaign("0xABC".to_string()))
        );
    }

    #[test]
    fn test_campaign_address_is_verbatim() {
        let route: Route = "/campaign/not-an-address".parse().unwrap();
        assert_eq!(route, Route::Campaign("not-an-address".to_string()));
        assert_eq!(route.to_string(), "/campaign/not-an-address");
    }

    #[test]
    fn test_unknown_routes() {
        assert!("/campaign/".parse::<Route>().is_err());
        assert!("/campaign/a/b".parse::<Route>().is_err());
        assert!("/settings".parse::<Route>().is_err());
    }

    #[test]
    fn test_landing_input() {
        assert_eq!(Route::from_landing_input("   "), None);
        assert_eq!(
            Route::from_landing_input(" 0x1234 "),
            Some(Route::Campaign("0x1234".to_string()))
        );
    }
}
