// Deliberately small stand-in for the out-of-scope plugin transport
// (real deployments speak gRPC over `go-plugin`; this speaks one
// length-prefixed JSON request/response pair per connection so the
// crate is runnable and demonstrable end-to-end).

use anyhow::{Context, Result};
use aws_public_pricing::config::PluginConfig;
use aws_public_pricing::engines::shared::models::{CostResponse, ResourceDescriptor};
use aws_public_pricing::errors::PricingError;
use aws_public_pricing::service;
use serde::Serialize;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum WireResponse {
    Ok {
        #[serde(flatten)]
        response: CostResponse,
    },
    Err {
        #[serde(flatten)]
        error: PricingError,
    },
}

fn read_frame(stream: &mut TcpStream) -> Result<Option<Vec<u8>>> {
    let mut len_bytes = [0u8; 4];
    match stream.read_exact(&mut len_bytes) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => return Ok(None),
        Err(e) => return Err(e).context("reading frame length"),
    }
    let len = u32::from_be_bytes(len_bytes) as usize;
    let mut body = vec![0u8; len];
    stream.read_exact(&mut body).context("reading frame body")?;
    Ok(Some(body))
}

fn write_frame(stream: &mut TcpStream, body: &[u8]) -> Result<()> {
    let len = (body.len() as u32).to_be_bytes();
    stream.write_all(&len).context("writing frame length")?;
    stream.write_all(body).context("writing frame body")?;
    Ok(())
}

fn handle_connection(mut stream: TcpStream) -> Result<()> {
    let peer = stream.peer_addr().ok();
    loop {
        let Some(body) = read_frame(&mut stream)? else {
            break;
        };
        let descriptor: ResourceDescriptor = match serde_json::from_slice(&body) {
            Ok(descriptor) => descriptor,
            Err(e) => {
                tracing::warn!(?peer, error = %e, "malformed request frame");
                let wire = WireResponse::Err {
                    error: PricingError::invalid_resource(format!("malformed request: {e}")),
                };
                write_frame(&mut stream, &serde_json::to_vec(&wire)?)?;
                continue;
            }
        };

        let wire = match service::get_projected_cost(&descriptor) {
            Ok(response) => WireResponse::Ok { response },
            Err(error) => {
                tracing::warn!(?peer, error = %error, "request failed");
                WireResponse::Err { error }
            }
        };
        write_frame(&mut stream, &serde_json::to_vec(&wire)?)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = PluginConfig::global();
    tracing::info!(component = "aws-public-pricing", ?config, "starting transport stand-in");

    let listener = TcpListener::bind("127.0.0.1:0").context("binding loopback listener")?;
    let port = listener.local_addr().context("reading bound address")?.port();

    println!("PORT={port}");
    std::io::stdout().flush().context("flushing startup line")?;

    for incoming in listener.incoming() {
        match incoming {
            Ok(stream) => {
                std::thread::spawn(move || {
                    if let Err(e) = handle_connection(stream) {
                        tracing::error!(error = %e, "connection handler failed");
                    }
                });
            }
            Err(e) => tracing::error!(error = %e, "failed to accept connection"),
        }
    }

    Ok(())
}
