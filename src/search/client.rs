// src/search/client.rs

use std::error::Error;

use crate::config::ApiConfig;
use crate::core::{net, url};

pub use crate::core::net::HttpResponse;

/// Seam between the controller and the wire. Tests drop in a recording fake.
pub trait PropertyClient {
    fn fetch(&self, address: &str) -> Result<HttpResponse, Box<dyn Error>>;
}

/// Request path for one lookup, relative to the API host.
pub fn request_path(prefix: &str, address: &str) -> String {
    format!("{}/property?address={}", prefix, url::encode(address))
}

pub struct HttpPropertyClient {
    config: ApiConfig,
}

impl HttpPropertyClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

impl PropertyClient for HttpPropertyClient {
    fn fetch(&self, address: &str) -> Result<HttpResponse, Box<dyn Error>> {
        let path = request_path(&self.config.prefix, address);
        logd!("Net: GET {}:{}{}", self.config.host, self.config.port, path);
        net::http_get(&self.config.host, self.config.port, &path)
    }
}
