use serde::Deserialize;
use std::{env, fs, io, net::SocketAddr, path::Path, time::Duration};
use url::Url;

// Runtime settings for the products front end.
// Sources, lowest priority first: defaults, the TOML file named by
// PRODUCTS_CLIENT_CONFIG, environment variables (a local .env included).

const DEFAULT_API_URL: &str = "https://localhost:7163";
const DEFAULT_API_TIMEOUT_MS: u64 = 5000;
const DEFAULT_PORT: u16 = 3000;

// Keys accepted in the optional config file; each may be omitted.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileSettings {
    pub api_url: Option<String>,
    pub api_timeout_ms: Option<u64>,
    pub accept_invalid_certs: Option<bool>,
    pub port: Option<u16>,
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub api_url: Url,
    pub api_timeout: Duration,
    // Needed for a local backend serving a self-signed development certificate.
    pub accept_invalid_certs: bool,
    pub port: u16,
}

impl Settings {
    pub fn load() -> io::Result<Self> {
        let file = match env::var("PRODUCTS_CLIENT_CONFIG") {
            Ok(path) => read_file_settings(Path::new(&path))?,
            Err(_) => FileSettings::default(),
        };
        Self::resolve(file, |key| env::var(key).ok())
    }

    // Merge file values with variables returned by `lookup`; variables win.
    // Unparsable numeric or flag variables fall back to the next source.
    pub fn resolve(
        file: FileSettings,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> io::Result<Self> {
        let api_url = lookup("PRODUCTS_API_URL")
            .or(file.api_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_timeout_ms = lookup("PRODUCTS_API_TIMEOUT_MS")
            .and_then(|value| value.parse::<u64>().ok())
            .or(file.api_timeout_ms)
            .unwrap_or(DEFAULT_API_TIMEOUT_MS);
        let accept_invalid_certs = lookup("PRODUCTS_API_ACCEPT_INVALID_CERTS")
            .and_then(|value| parse_flag(&value))
            .or(file.accept_invalid_certs)
            .unwrap_or(false);
        let port = lookup("PRODUCTS_CLIENT_PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .or(file.port)
            .unwrap_or(DEFAULT_PORT);

        Ok(Self {
            api_url: parse_api_url(&api_url)?,
            api_timeout: Duration::from_millis(api_timeout_ms),
            accept_invalid_certs,
            port,
        })
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([127, 0, 0, 1], self.port))
    }
}

pub fn read_file_settings(path: &Path) -> io::Result<FileSettings> {
    let contents = fs::read_to_string(path)?;
    parse_file_settings(&contents)
}

pub fn parse_file_settings(contents: &str) -> io::Result<FileSettings> {
    toml::from_str(contents).map_err(|e| {
        io::Error::new(io::ErrorKind::InvalidData, format!("invalid config file: {e}"))
    })
}

fn parse_api_url(raw: &str) -> io::Result<Url> {
    let url = Url::parse(raw.trim()).map_err(|e| {
        io::Error::new(io::ErrorKind::InvalidInput, format!("invalid api url {raw:?}: {e}"))
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("api url must use http or https, got {scheme}"),
        )),
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
