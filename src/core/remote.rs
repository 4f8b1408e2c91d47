//! Parse a git remote URL into (namespace, host, API base).
//!
//! Remote URLs come in two grammars that git accepts interchangeably:
//!
//!   ssh://git@gitlab.example.com:1234/team/sub/project.git   (network URL)
//!   git@gitlab.example.com:1234/team/sub/project.git         (scp shorthand)
//!   git@gitlab.example.com:team/sub/project.git              (scp, no port)
//!
//! The port moves position between forms and the `.git` suffix is optional,
//! so this is a hand-rolled split rather than a URL library call. Everything
//! here is pure string work; no I/O.

use crate::core::errors::Error;

/// The three values every downstream API call needs, plus the original URL
/// kept around for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteUrl {
    /// Slash-separated project path, no leading slash, no trailing `.git`.
    pub namespace: String,
    /// Bare hostname: no `user@`, no scheme, no port.
    pub host: String,
    /// Always `https://{host}`, whatever the remote's own scheme was.
    pub api_base: String,
    /// The unmodified input string.
    pub url: String,
}

/// Parse a remote URL in any recognized form.
///
/// Fails with [`Error::MalformedRemoteUrl`] when no form matches or when a
/// form matches but yields an empty host or namespace — never a silently
/// wrong result.
pub fn parse(url: &str) -> Result<RemoteUrl, Error> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Err(Error::MalformedRemoteUrl(url.to_string()));
    }

    let (host, namespace) = if has_scheme(trimmed) {
        parse_network_url(trimmed)
    } else {
        parse_scp_shorthand(trimmed)
    }
    .ok_or_else(|| Error::MalformedRemoteUrl(url.to_string()))?;

    if host.is_empty() || namespace.is_empty() {
        return Err(Error::MalformedRemoteUrl(url.to_string()));
    }

    Ok(RemoteUrl {
        api_base: format!("https://{}", host),
        host,
        namespace,
        url: url.to_string(),
    })
}

fn has_scheme(url: &str) -> bool {
    url.starts_with("ssh://") || url.starts_with("http://") || url.starts_with("https://")
}

/// Network URL form: `scheme://[user@]host[:port]/seg/seg...`.
/// Splitting on `/` puts the authority at index 2 and the path at 3...
fn parse_network_url(url: &str) -> Option<(String, String)> {
    let parts: Vec<&str> = url.split('/').collect();
    let authority = parts.get(2)?;

    let host = strip_port(strip_user(authority)).to_string();
    let namespace = strip_git_suffix(&parts.get(3..)?.join("/")).to_string();

    Some((host, namespace))
}

/// Scp-like shorthand: `[user@]host:path` or, with no colon at all,
/// `[user@]host/path`. When the path after the colon starts with a digit run
/// followed by `/` it is a port (`host:1234/team/proj.git`) and is dropped.
fn parse_scp_shorthand(url: &str) -> Option<(String, String)> {
    match url.split_once(':') {
        Some((left, right)) => {
            let host = strip_user(left).to_string();
            let path = strip_leading_port(right);
            let namespace = strip_git_suffix(path).to_string();
            Some((host, namespace))
        }
        None => {
            // host/path with no colon at all; a bare word has no `/` either
            // and falls out as an empty namespace.
            let (first, rest) = url.split_once('/')?;
            let host = strip_user(first).to_string();
            let namespace = strip_git_suffix(rest).to_string();
            Some((host, namespace))
        }
    }
}

/// Drop a `user@` prefix. The user identity is never retained.
fn strip_user(authority: &str) -> &str {
    match authority.split_once('@') {
        Some((_, host)) => host,
        None => authority,
    }
}

/// Drop a `:port` suffix from a network-URL authority.
fn strip_port(host: &str) -> &str {
    match host.split_once(':') {
        Some((bare, _)) => bare,
        None => host,
    }
}

/// Drop a leading `digits/` run from an scp path (`1234/team/proj` → `team/proj`).
fn strip_leading_port(path: &str) -> &str {
    let digits = path.chars().take_while(char::is_ascii_digit).count();
    if digits > 0 && path[digits..].starts_with('/') {
        &path[digits + 1..]
    } else {
        path
    }
}

/// Drop exactly one trailing `.git`; `project.git.git` becomes `project.git`.
fn strip_git_suffix(namespace: &str) -> &str {
    namespace.strip_suffix(".git").unwrap_or(namespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(url: &str) -> RemoteUrl {
        parse(url).unwrap_or_else(|e| panic!("expected '{}' to parse: {}", url, e))
    }

    #[test]
    fn network_url_with_port() {
        for scheme in ["ssh", "http", "https"] {
            let url = format!("{}://git@abc.gitlab.com:1234/some/namespace/path.git", scheme);
            let r = parsed(&url);
            assert_eq!(r.namespace, "some/namespace/path");
            assert_eq!(r.host, "abc.gitlab.com");
            assert_eq!(r.api_base, "https://abc.gitlab.com");
            assert_eq!(r.url, url);
        }
    }

    #[test]
    fn network_url_without_port() {
        for scheme in ["ssh", "http", "https"] {
            let url = format!("{}://git@abc.gitlab.com/some/namespace/path.git", scheme);
            let r = parsed(&url);
            assert_eq!(r.namespace, "some/namespace/path");
            assert_eq!(r.host, "abc.gitlab.com");
            assert_eq!(r.api_base, "https://abc.gitlab.com");
        }
    }

    #[test]
    fn network_url_without_user() {
        let r = parsed("https://gitlab.com/group/project.git");
        assert_eq!(r.namespace, "group/project");
        assert_eq!(r.host, "gitlab.com");
    }

    #[test]
    fn scp_shorthand_with_port() {
        let r = parsed("git@abc.gitlab.com:1234/some/namespace/path.git");
        assert_eq!(r.namespace, "some/namespace/path");
        assert_eq!(r.host, "abc.gitlab.com");
        assert_eq!(r.api_base, "https://abc.gitlab.com");
    }

    #[test]
    fn scp_shorthand_without_port() {
        let r = parsed("git@abc.gitlab.com:some/namespace/path.git");
        assert_eq!(r.namespace, "some/namespace/path");
        assert_eq!(r.host, "abc.gitlab.com");
        assert_eq!(r.api_base, "https://abc.gitlab.com");
    }

    #[test]
    fn all_forms_agree() {
        // The same project reached four different ways must parse identically.
        let urls = [
            "git@gitlab.example.com:1234/team/sub/project.git",
            "git@gitlab.example.com:team/sub/project.git",
            "https://git@gitlab.example.com:1234/team/sub/project.git",
            "ssh://git@gitlab.example.com/team/sub/project.git",
        ];
        for url in urls {
            let r = parsed(url);
            assert_eq!(r.namespace, "team/sub/project", "url: {}", url);
            assert_eq!(r.host, "gitlab.example.com", "url: {}", url);
            assert_eq!(r.api_base, "https://gitlab.example.com", "url: {}", url);
        }
    }

    #[test]
    fn slash_form_without_colon() {
        let r = parsed("git@gitlab.com/group/project.git");
        assert_eq!(r.namespace, "group/project");
        assert_eq!(r.host, "gitlab.com");
    }

    #[test]
    fn shallow_namespace() {
        let r = parsed("git@gitlab.com:project.git");
        assert_eq!(r.namespace, "project");
    }

    #[test]
    fn deep_namespace_preserved_in_order() {
        let r = parsed("git@gitlab.com:a/b/c/d/e.git");
        assert_eq!(r.namespace, "a/b/c/d/e");
    }

    #[test]
    fn git_suffix_stripped_exactly_once() {
        let r = parsed("git@gitlab.com:group/project.git.git");
        assert_eq!(r.namespace, "group/project.git");
    }

    #[test]
    fn git_suffix_optional() {
        let r = parsed("git@gitlab.com:group/project");
        assert_eq!(r.namespace, "group/project");
    }

    #[test]
    fn git_in_the_middle_is_kept() {
        // `.git` is only stripped as a trailing suffix, never inside the path.
        let r = parsed("https://gitlab.com/group/my.gitops/project.git");
        assert_eq!(r.namespace, "group/my.gitops/project");
    }

    #[test]
    fn port_in_path_needs_the_slash() {
        // Digits not followed by `/` are a project name, not a port.
        let r = parsed("git@gitlab.com:1234.git");
        assert_eq!(r.namespace, "1234");
        let r = parsed("git@gitlab.com:2024/roadmap.git");
        assert_eq!(r.namespace, "roadmap");
    }

    #[test]
    fn api_base_is_https_even_for_ssh_and_http() {
        assert_eq!(
            parsed("ssh://git@gitlab.com/g/p.git").api_base,
            "https://gitlab.com"
        );
        assert_eq!(
            parsed("http://gitlab.com/g/p.git").api_base,
            "https://gitlab.com"
        );
    }

    #[test]
    fn strip_git_suffix_is_idempotent() {
        assert_eq!(strip_git_suffix("group/project"), "group/project");
        assert_eq!(strip_git_suffix(strip_git_suffix("group/project.git")), "group/project");
    }

    #[test]
    fn parse_is_deterministic() {
        let url = "git@gitlab.example.com:1234/team/sub/project.git";
        assert_eq!(parsed(url), parsed(url));
    }

    #[test]
    fn empty_input_is_malformed() {
        assert!(matches!(parse(""), Err(Error::MalformedRemoteUrl(_))));
        assert!(matches!(parse("   "), Err(Error::MalformedRemoteUrl(_))));
    }

    #[test]
    fn bare_word_is_malformed() {
        // No scheme, no colon, no slash: nothing to extract.
        assert!(matches!(parse("gitlab"), Err(Error::MalformedRemoteUrl(_))));
    }

    #[test]
    fn network_url_without_path_is_malformed() {
        assert!(matches!(
            parse("https://gitlab.com"),
            Err(Error::MalformedRemoteUrl(_))
        ));
        assert!(matches!(
            parse("https://gitlab.com/"),
            Err(Error::MalformedRemoteUrl(_))
        ));
    }

    #[test]
    fn scp_with_empty_path_is_malformed() {
        assert!(matches!(
            parse("git@gitlab.com:"),
            Err(Error::MalformedRemoteUrl(_))
        ));
    }

    #[test]
    fn malformed_error_carries_the_input() {
        let err = parse("gitlab").unwrap_err();
        assert!(err.to_string().contains("'gitlab'"));
    }
}
