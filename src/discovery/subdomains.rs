//! Well-known subdomain labels probed on every run.

/// Labels commonly delegated or aliased under a domain.
///
/// Each one becomes an `A` query for `<label>.<domain>` once the root-level
/// queries of a run have completed.
pub const WELL_KNOWN_SUBDOMAINS: &[&str] = &[
    "www",
    "mail",
    "email",
    "webmail",
    "smtp",
    "imap",
    "pop",
    "pop3",
    "mx",
    "mx1",
    "mx2",
    "ns",
    "ns1",
    "ns2",
    "ns3",
    "dns",
    "ftp",
    "sftp",
    "vpn",
    "remote",
    "api",
    "app",
    "apps",
    "m",
    "mobile",
    "blog",
    "shop",
    "store",
    "dev",
    "test",
    "staging",
    "stage",
    "beta",
    "demo",
    "admin",
    "portal",
    "secure",
    "login",
    "auth",
    "sso",
    "id",
    "account",
    "accounts",
    "cdn",
    "static",
    "assets",
    "img",
    "images",
    "media",
    "files",
    "docs",
    "help",
    "support",
    "status",
    "git",
    "gitlab",
    "jenkins",
    "ci",
    "intranet",
    "internal",
    "autodiscover",
    "autoconfig",
    "calendar",
    "chat",
    "forum",
    "news",
    "wiki",
    "web",
    "server",
    "host",
    "cloud",
    "proxy",
    "gateway",
    "db",
    "mysql",
    "search",
    "video",
    "meet",
    "lyncdiscover",
    "sip",
];
