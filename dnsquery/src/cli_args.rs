use std::net::SocketAddr;
use std::path::PathBuf;
use argh::FromArgs;

fn default_config_path() -> PathBuf {
    PathBuf::from("./dnsquery_config.toml")
}

#[derive(Debug, FromArgs)]
#[argh(description = "send a single DNS query over UDP and report the response code")]
pub struct CliArgs {
    #[argh(positional, description = "domain to look up, overrides query.domain")]
    pub domain: Option<String>,

    #[argh(
        option,
        description = "config file path, default: './dnsquery_config.toml'",
        default = "default_config_path()"
    )]
    pub config: PathBuf,

    #[argh(option, short = 's', description = "resolver address, e.g. 8.8.8.8:53")]
    pub server: Option<SocketAddr>,

    #[argh(option, short = 't', description = "round trip deadline in seconds")]
    pub timeout: Option<u64>,

    #[argh(option, short = 'q', description = "query type, e.g. A, AAAA, MX or TYPE65")]
    pub qtype: Option<String>,

    #[argh(option, description = "query id")]
    pub id: Option<u16>,

    #[argh(switch, description = "clear the recursion desired flag")]
    pub no_recursion: bool,
}
