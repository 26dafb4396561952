use std::error::Error;
use std::process::ExitCode;

use configuration::QueryConfiguration;
use dns::{Header, Message, QClass, QType, Question};
use tracing_subscriber::EnvFilter;

mod cli_args;
mod report;

use cli_args::CliArgs;

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args: CliArgs = argh::from_env();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("dns query failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: CliArgs) -> Result<(), Box<dyn Error>> {
    let mut config: QueryConfiguration = configuration::get_config(args.config.clone())?;
    apply_overrides(&mut config, args);
    tracing::debug!("effective configuration: {:?}", config);

    let message = build_message(&config)?;
    let encoded_query = dns::encode_message(&message)?;

    let server_addr = config.dns.server_address;
    let encoded_answer = transport::exchange(
        server_addr,
        &encoded_query,
        config.dns.timeout(),
        transport::MAX_RESPONSE_SIZE,
    )
    .await?;

    let response_code = dns::extract_response_code(&encoded_answer)?;

    print!(
        "{}",
        report::render(&config.query.domain, server_addr, response_code, &encoded_query, &encoded_answer)
    );

    Ok(())
}

fn apply_overrides(config: &mut QueryConfiguration, args: CliArgs) {
    if let Some(domain) = args.domain {
        config.query.domain = domain;
    }
    if let Some(server) = args.server {
        config.dns.server_address = server;
    }
    if let Some(timeout) = args.timeout {
        config.dns.set_timeout_secs(timeout);
    }
    if let Some(qtype) = args.qtype {
        config.query.qtype = qtype;
    }
    if let Some(id) = args.id {
        config.query.id = id;
    }
    if args.no_recursion {
        config.query.recursion_desired = false;
    }
}

fn build_message(config: &QueryConfiguration) -> Result<Message, Box<dyn Error>> {
    let query = &config.query;
    let qtype: QType = query.qtype.parse()?;
    let qclass: QClass = query.qclass.parse()?;

    let header = Header::new(query.id).with_recursion_desired(query.recursion_desired);
    let question = Question::new(&query.domain, qtype, qclass);

    Ok(Message::new(header, vec![question]))
}
