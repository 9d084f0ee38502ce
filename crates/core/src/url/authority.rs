use serde::{Deserialize, Serialize};

/// Userinfo and host/port pieces of an authority component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Authority {
    pub username: Option<String>,
    pub password: Option<String>,
    pub hostname: Option<String>,
    pub port: Option<u16>,
}

/// Split an authority (`user:pass@host:port`) into its parts.
///
/// Userinfo ends at the last `@`. A host starting with `[` runs to the
/// matching `]` and is copied verbatim, so IPv6 literals keep their colons.
/// Any other host is split from the port at its last `:`. Port digits that
/// are not a base-10 number in `0..=65535` leave `port` empty. Never fails.
pub fn parse_authority(authority: &str) -> Authority {
    let (userinfo, host_port) = match authority.rfind('@') {
        Some(at) => (Some(&authority[..at]), &authority[at + 1..]),
        None => (None, authority),
    };

    let (username, password) = match userinfo {
        Some(userinfo) => match userinfo.split_once(':') {
            Some((user, pass)) => (Some(user.to_string()), Some(pass.to_string())),
            None => (Some(userinfo.to_string()), None),
        },
        None => (None, None),
    };

    let (hostname, port) = split_host_port(host_port);

    Authority {
        username,
        password,
        hostname: Some(hostname).filter(|h| !h.is_empty()).map(str::to_string),
        port: port.and_then(parse_port),
    }
}

fn split_host_port(host_port: &str) -> (&str, Option<&str>) {
    if let Some(bracketed) = host_port.strip_prefix('[') {
        if let Some(close) = bracketed.find(']') {
            let port = bracketed[close + 1..].strip_prefix(':');
            return (&bracketed[..close], port);
        }
    }

    match host_port.rsplit_once(':') {
        Some((host, port)) => (host, Some(port)),
        None => (host_port, None),
    }
}

/// Parse port digits. Signs, whitespace and out-of-range values are rejected.
fn parse_port(digits: &str) -> Option<u16> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    digits.parse::<u16>().ok()
}
