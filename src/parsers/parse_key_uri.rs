use std::borrow::Cow;
use tracing::warn;
use url::Url;

use crate::{
    config::Config,
    error::{Error, Result},
    types::{split_label, KeyUri},
};

/// Decodes a onepass key URI.
///
/// `period` (or its older name `duration`) and `algorithm` are lenient: a
/// missing, unparsable or unknown value falls back to the defaults in
/// `config`. Only a string that is not an
/// absolute URI with a host fails.
pub fn parse_key_uri(uri: &str, config: &Config) -> Result<KeyUri> {
    let url = Url::parse(uri).map_err(|err| Error::MalformedUri(format!("{}: {}", uri, err)))?;

    let version = url
        .host_str()
        .filter(|host| !host.is_empty())
        .ok_or_else(|| Error::MalformedUri(format!("{}: missing version", uri)))?
        .to_owned();

    let path = url.path();
    let label = decode_component(path.strip_prefix('/').unwrap_or(path))?.into_owned();
    let (provider, account) = split_label(&label);
    let (provider, account) = (provider.map(str::to_owned), account.to_owned());

    let mut secret = None;
    let mut period = None;
    let mut duration = None;
    let mut algorithm = None;
    let mut issuer = None;

    // first occurrence of a key wins; `+` is literal, not a space
    for pair in url.query().unwrap_or_default().split('&') {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let slot = match key {
            "secret" => &mut secret,
            "period" => &mut period,
            "duration" => &mut duration,
            "algorithm" => &mut algorithm,
            "issuer" => &mut issuer,
            _ => continue,
        };
        if slot.is_none() {
            *slot = Some(decode_component(value)?.into_owned());
        }
    }

    // older ziotauth tokens carry the period as `duration`
    let period = match period.or(duration) {
        Some(raw) => raw.parse::<u64>().unwrap_or_else(|_| {
            warn!(period = raw.as_str(), "unparsable period, using default");
            config.default_period
        }),
        None => config.default_period,
    };

    let algorithm = match algorithm {
        Some(tag) => tag.parse().unwrap_or_else(|_| {
            warn!(algorithm = tag.as_str(), "unknown algorithm, using default");
            config.default_algorithm
        }),
        None => config.default_algorithm,
    };

    Ok(KeyUri {
        url: url.as_str().to_owned(),
        scheme: url.scheme().to_owned(),
        version,
        label,
        provider,
        account,
        secret: secret.unwrap_or_default(),
        period,
        algorithm,
        issuer,
    })
}

fn decode_component(raw: &str) -> Result<Cow<'_, str>> {
    urlencoding::decode(raw).map_err(|err| Error::MalformedUri(format!("{}: {}", raw, err)))
}
