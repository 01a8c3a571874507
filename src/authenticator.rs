//! Token generation and verification.

use tracing::debug;

use crate::{
    codec::encode,
    config::Config,
    enums::HashAlgorithm,
    error::Result,
    mac::{compute_mac, signing_key},
    parsers::parse_key_uri,
    time_slice::{seconds_remaining_at, time_slice_at, Clock, SystemClock},
    types::{KeyUri, Label, Secret, Token, TokenOptions},
};

/// Generates and verifies onepass tokens.
///
/// Holds no per-token state: a token is returned from [`generate`] and handed
/// back to [`verify`] by the caller. Expiry comes only from the time slice, so
/// a token verifies while both sides read a clock in the same slice.
///
/// [`generate`]: Authenticator::generate
/// [`verify`]: Authenticator::verify
#[derive(Debug, Clone, Default)]
pub struct Authenticator<C = SystemClock> {
    config: Config,
    clock: C,
}

impl Authenticator {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            clock: SystemClock,
        }
    }
}

impl<C: Clock> Authenticator<C> {
    pub fn with_clock(config: Config, clock: C) -> Self {
        Self { config, clock }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn generate_secret(&self) -> Secret {
        Secret::generate_at(self.clock.now_millis())
    }

    /// Derives the token for `label` in the current time slice.
    pub fn generate(&self, secret: &Secret, label: &str, options: &TokenOptions) -> Result<Token> {
        let label = Label::parse(label)?;
        let (algorithm, period) = self.resolve(options);
        let mac = self.mac(secret, &label, algorithm, period)?;

        debug!(label = label.as_str(), period, %algorithm, "generated token");

        Ok(encode(
            &self.config.scheme,
            &self.config.version,
            label.as_str(),
            &mac,
            period,
            algorithm,
            label.provider(),
        ))
    }

    /// Regenerates `token` from its own label, algorithm and period under
    /// `secret` and compares the full URIs.
    pub fn verify(&self, token: &Token, secret: &Secret) -> Result<bool> {
        let key_uri = self.decode(token.as_str())?;
        let options = TokenOptions::new()
            .with_algorithm(key_uri.algorithm())
            .with_period(key_uri.period());
        let created = self.generate(secret, key_uri.label(), &options)?;

        debug!(
            received = token.as_str(),
            created = created.as_str(),
            "verifying token"
        );

        Ok(created == *token)
    }

    /// Checks a bare MAC, as carried in a token's `secret` parameter, against
    /// the caller's own label and options.
    pub fn verify_mac(
        &self,
        mac: &str,
        label: &str,
        secret: &Secret,
        options: &TokenOptions,
    ) -> Result<bool> {
        let label = Label::parse(label)?;
        let (algorithm, period) = self.resolve(options);
        Ok(self.mac(secret, &label, algorithm, period)? == mac)
    }

    pub fn decode(&self, uri: &str) -> Result<KeyUri> {
        parse_key_uri(uri, &self.config)
    }

    /// Seconds before tokens for `period` roll over.
    pub fn seconds_remaining(&self, period: u64) -> Result<u64> {
        seconds_remaining_at(self.clock.now_millis(), period)
    }

    fn resolve(&self, options: &TokenOptions) -> (HashAlgorithm, u64) {
        (
            options.algorithm.unwrap_or(self.config.default_algorithm),
            options.period.unwrap_or(self.config.default_period),
        )
    }

    fn mac(
        &self,
        secret: &Secret,
        label: &Label,
        algorithm: HashAlgorithm,
        period: u64,
    ) -> Result<String> {
        let slice = time_slice_at(self.clock.now_millis(), period)?;
        let key = signing_key(
            secret.as_str(),
            algorithm,
            self.config.key_wrapping,
            self.config.sanitize,
        )?;
        compute_mac(
            &format!("{}{}", label.as_str(), slice),
            &key,
            algorithm,
            self.config.sanitize,
        )
    }
}
