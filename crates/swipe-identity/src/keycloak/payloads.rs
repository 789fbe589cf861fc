//! Keycloak request and response bodies.

use serde::{Deserialize, Serialize};

/// OpenID Connect token endpoint response
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Token introspection response
#[derive(Debug, Clone, Deserialize)]
pub struct IntrospectionResponse {
    pub active: bool,
    #[serde(default)]
    pub sub: Option<String>,
}

/// Admin API user representation
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser<'a> {
    pub username: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<&'a str>,
    pub enabled: bool,
}

/// Admin API credential representation
#[derive(Debug, Clone, Serialize)]
pub struct Credential<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub value: &'a str,
    pub temporary: bool,
}

impl<'a> Credential<'a> {
    pub fn password(value: &'a str) -> Self {
        Self {
            kind: "password",
            value,
            temporary: false,
        }
    }
}

/// Extract the new user's id from the `Location` header of a create response
pub fn id_from_location(location: &str) -> Option<&str> {
    location
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_from_location() {
        let location =
            "http://keycloak:8080/admin/realms/master/users/5f0c2a8e-7d9f-4a57-9d0a-8f1b2c3d4e5f";
        assert_eq!(
            id_from_location(location),
            Some("5f0c2a8e-7d9f-4a57-9d0a-8f1b2c3d4e5f")
        );
        assert_eq!(id_from_location("http://kc/users/abc/"), Some("abc"));
        assert_eq!(id_from_location(""), None);
    }

    #[test]
    fn test_credential_serialization() {
        let json = serde_json::to_value(Credential::password("Secret123")).unwrap();
        assert_eq!(json["type"], "password");
        assert_eq!(json["value"], "Secret123");
        assert_eq!(json["temporary"], false);
    }

    #[test]
    fn test_new_user_omits_missing_email() {
        let json = serde_json::to_value(NewUser {
            username: "alice",
            email: None,
            enabled: true,
        })
        .unwrap();
        assert!(json.get("email").is_none());
        assert_eq!(json["enabled"], true);
    }

    #[test]
    fn test_introspection_inactive_has_no_subject() {
        let parsed: IntrospectionResponse = serde_json::from_str(r#"{"active":false}"#).unwrap();
        assert!(!parsed.active);
        assert!(parsed.sub.is_none());
    }
}
