use crate::{Connection, Error, Result};

use serde::{Deserialize, Serialize};
use url::Url;

/// Opens connections based on the scheme of a connection URL.
///
/// Supported schemes are `mysql` and `sqlite`, each behind the cargo feature
/// of the same name.
#[derive(Debug)]
pub struct Connect {
    url: Url,
}

impl Connect {
    pub fn new(url: &str) -> Result<Self> {
        let url = Url::parse(url).map_err(|err| {
            Error::driver(err).context(Error::invalid_connection_url("failed to parse URL"))
        })?;
        Ok(Self { url })
    }

    pub fn from_options(options: &ConnectOptions) -> Result<Self> {
        Ok(Self {
            url: options.to_url()?,
        })
    }

    pub async fn connect(&self) -> Result<Box<dyn Connection>> {
        match self.url.scheme() {
            "mysql" => connect_mysql(&self.url).await,
            "sqlite" => connect_sqlite(&self.url).await,
            scheme => Err(Error::invalid_connection_url(format!(
                "unsupported database; scheme={scheme}"
            ))),
        }
    }
}

#[cfg(feature = "mysql")]
async fn connect_mysql(url: &Url) -> Result<Box<dyn Connection>> {
    use crate::Driver;

    let driver = tabula_driver_mysql::MySQL::new(url.as_str())?;
    driver.connect().await
}

#[cfg(not(feature = "mysql"))]
async fn connect_mysql(_url: &Url) -> Result<Box<dyn Connection>> {
    Err(Error::unsupported_feature("`mysql` feature not enabled"))
}

#[cfg(feature = "sqlite")]
async fn connect_sqlite(url: &Url) -> Result<Box<dyn Connection>> {
    use crate::Driver;

    let driver = tabula_driver_sqlite::Sqlite::new(url.as_str())?;
    driver.connect().await
}

#[cfg(not(feature = "sqlite"))]
async fn connect_sqlite(_url: &Url) -> Result<Box<dyn Connection>> {
    Err(Error::unsupported_feature("`sqlite` feature not enabled"))
}

/// MySQL login details as collected by a login form.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectOptions {
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    pub user: String,

    #[serde(default)]
    pub password: String,

    pub database: String,
}

fn default_port() -> u16 {
    3306
}

impl ConnectOptions {
    pub fn new(
        host: impl Into<String>,
        user: impl Into<String>,
        database: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port: default_port(),
            user: user.into(),
            password: String::new(),
            database: database.into(),
        }
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Builds a `mysql://` URL. Credentials are percent-encoded.
    pub fn to_url(&self) -> Result<Url> {
        let host = self.host.trim();
        let database = self.database.trim();

        if host.is_empty() {
            return Err(Error::invalid_connection_url("host is empty"));
        }

        if database.is_empty() {
            return Err(Error::invalid_connection_url("database is empty"));
        }

        let mut url = Url::parse("mysql://localhost").map_err(Error::driver)?;

        url.set_host(Some(host)).map_err(|err| {
            Error::driver(err).context(Error::invalid_connection_url(format!(
                "invalid host `{host}`"
            )))
        })?;
        url.set_port(Some(self.port))
            .map_err(|_| Error::invalid_connection_url("cannot set port"))?;
        url.set_username(self.user.trim())
            .map_err(|_| Error::invalid_connection_url("cannot set user"))?;
        if !self.password.is_empty() {
            url.set_password(Some(&self.password))
                .map_err(|_| Error::invalid_connection_url("cannot set password"))?;
        }
        url.set_path(database);

        Ok(url)
    }
}

impl std::fmt::Debug for ConnectOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectOptions")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"***")
            .field("database", &self.database)
            .finish()
    }
}
