use std::env::var;
use std::net::{SocketAddr, ToSocketAddrs};

use custom_error::custom_error;

use crate::protocol::socket::DEFAULT_RELAY_PORT;

pub const DEFAULT_CANVAS_WIDTH: usize = 1000;
pub const DEFAULT_CANVAS_HEIGHT: usize = 850;
pub const DEFAULT_CLIENT_PORT: u16 = 55000;
pub const MAX_CANVAS_SIDE: usize = 8192;
const RELAY_ADDRESS_VARIABLE: &str = "MINIPAINT_RELAY";

custom_error! {pub ConfigError
    UnknownRole {role: String} = "Unknown mode \"{role}\", valid ones are \"relay\" or \"client\"",
    MissingArgument {name: String} = "Please specify --{name}",
    InvalidArgument {name: String, description: String} = "Invalid --{name}: {description}",
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Relay,
    Client,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub role: Role,
    pub username: String,
    pub port: u16,
    pub relay: SocketAddr,
    pub width: usize,
    pub height: usize,
    pub history_limit: Option<usize>,
    pub packets_per_tick: usize,
}

impl Config {

    pub fn from_args(args: &[String]) -> Result<Self, ConfigError> {
        let role = match args.first().map(|v| v.as_str()) {
            Some("relay") | Some("server") => Role::Relay,
            Some("client") => Role::Client,
            Some(other) => return Err(ConfigError::UnknownRole { role: other.to_string() }),
            None => return Err(ConfigError::MissingArgument { name: "mode".to_string() }),
        };
        let options = &args[1..];

        let default_port = match role {
            Role::Relay => DEFAULT_RELAY_PORT,
            Role::Client => DEFAULT_CLIENT_PORT,
        };

        let relay = match argument_value(options, "relay").or_else(|| var(RELAY_ADDRESS_VARIABLE).ok()) {
            Some(v) => parse_address("relay", &v)?,
            None => SocketAddr::from(([127, 0, 0, 1], DEFAULT_RELAY_PORT)),
        };

        Ok(Config {
            role,
            username: argument_value(options, "username").unwrap_or_else(|| match role {
                Role::Relay => "relay".to_string(),
                Role::Client => "client".to_string(),
            }),
            port: parse_or(options, "port", default_port)?,
            relay,
            width: canvas_side(options, "width", DEFAULT_CANVAS_WIDTH)?,
            height: canvas_side(options, "height", DEFAULT_CANVAS_HEIGHT)?,
            history_limit: match argument_value(options, "history-limit") {
                Some(v) => Some(positive("history-limit", parse("history-limit", &v)?)?),
                None => None,
            },
            packets_per_tick: parse_or(options, "packets-per-tick", 1)?,
        })
    }
}

fn argument_value(args: &[String], argument_name: &str) -> Option<String> {
    let prefix = format!("--{}=", argument_name);
    args.iter()
        .find(|s| s.starts_with(&prefix))
        .map(|s| s[prefix.len()..].to_string())
}

fn parse_or<T>(args: &[String], name: &str, default: T) -> Result<T, ConfigError>
    where T: std::str::FromStr, T::Err: std::fmt::Display {
    match argument_value(args, name) {
        Some(v) => parse(name, &v),
        None => Ok(default),
    }
}

fn parse<T>(name: &str, value: &str) -> Result<T, ConfigError>
    where T: std::str::FromStr, T::Err: std::fmt::Display {
    value.trim().parse().map_err(|err: T::Err| ConfigError::InvalidArgument {
        name: name.to_string(),
        description: format!("\"{}\": {}", value, err),
    })
}

fn canvas_side(args: &[String], name: &str, default: usize) -> Result<usize, ConfigError> {
    let side = positive(name, parse_or(args, name, default)?)?;

    if side > MAX_CANVAS_SIDE {
        return Err(ConfigError::InvalidArgument {
            name: name.to_string(),
            description: format!("{} is larger than {}", side, MAX_CANVAS_SIDE),
        });
    }

    Ok(side)
}

fn positive(name: &str, value: usize) -> Result<usize, ConfigError> {
    if value == 0 {
        return Err(ConfigError::InvalidArgument {
            name: name.to_string(),
            description: "must be at least 1".to_string(),
        });
    }

    Ok(value)
}

fn parse_address(name: &str, value: &str) -> Result<SocketAddr, ConfigError> {
    value.to_socket_addrs()
        .map_err(|err| ConfigError::InvalidArgument {
            name: name.to_string(),
            description: format!("\"{}\": {}", value, err),
        })?
        .next()
        .ok_or_else(|| ConfigError::InvalidArgument {
            name: name.to_string(),
            description: format!("\"{}\" does not resolve to an address", value),
        })
}
