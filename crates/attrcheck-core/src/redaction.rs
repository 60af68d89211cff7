/// Connection string safe to log, plus the parts worth logging separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedactedConnection {
    pub host: Option<String>,
    pub database: Option<String>,
    pub redacted: String,
}

/// Mask the password and secret-bearing query parameters of a connection URI.
///
/// Strings without a `scheme://` prefix are passed through with only their
/// query parameters masked.
pub fn redact_connection_string(conn: &str) -> RedactedConnection {
    let (base, query) = match conn.split_once('?') {
        Some((base, query)) => (base, Some(query)),
        None => (conn, None),
    };

    let mut host = None;
    let mut database = None;
    let mut redacted = base.to_string();

    if let Some((scheme, rest)) = base.split_once("://") {
        let (userinfo, location) = match rest.rsplit_once('@') {
            Some((userinfo, location)) => (Some(userinfo), location),
            None => (None, rest),
        };
        let (authority, path) = location.split_once('/').unwrap_or((location, ""));

        let authority_host = match authority.rsplit_once(':') {
            Some((name, port)) if port.chars().all(|c| c.is_ascii_digit()) => name,
            _ => authority,
        };
        if !authority_host.is_empty() {
            host = Some(authority_host.to_string());
        }
        if !path.is_empty() {
            database = Some(path.to_string());
        }

        redacted = match userinfo {
            Some(userinfo) => {
                let user = userinfo.split_once(':').map_or(userinfo, |(user, _)| user);
                let secret = if userinfo.contains(':') { ":***" } else { "" };
                format!("{scheme}://{user}{secret}@{location}")
            }
            None => base.to_string(),
        };
    }

    if let Some(query) = query {
        let params: Vec<String> = query
            .split('&')
            .map(|pair| match pair.split_once('=') {
                Some((key, _)) if is_sensitive_key(key) => format!("{key}=***"),
                _ => pair.to_string(),
            })
            .collect();
        redacted = format!("{redacted}?{}", params.join("&"));
    }

    RedactedConnection {
        host,
        database,
        redacted,
    }
}

fn is_sensitive_key(key: &str) -> bool {
    matches!(
        key.to_ascii_lowercase().as_str(),
        "password" | "pass" | "passfile" | "sslpassword" | "token"
    )
}
