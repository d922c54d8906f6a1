//! Download URL construction

use indexmap::IndexMap;

use crate::endpoint::types::{Channel, PackageFormat, PackageId};

/// Download location of one package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub package: PackageId,
    pub url: String,
}

/// Endpoints keyed by package, in [`PackageId::ALL`] order
pub type EndpointTable = IndexMap<PackageId, Endpoint>;

/// Build the download URL of `package` on `host`.
///
/// `weekly` is used for packages on the weekly channel, `stable` for the
/// stable channel.
pub fn download_url(package: PackageId, weekly: &str, stable: &str, host: &str) -> String {
    let version = match package.channel {
        Channel::Weekly => weekly,
        Channel::Stable => stable,
    };
    let dir = package.as_str();

    match package.format {
        PackageFormat::Debian => format!("https://{host}/{dir}/jenkins_{version}_all.deb"),
        PackageFormat::RedHat => format!("https://{host}/{dir}/jenkins-{version}-1.1.noarch.rpm"),
        PackageFormat::OpenSuse => {
            format!("https://{host}/{dir}/jenkins-{version}-1.2.noarch.rpm")
        }
        PackageFormat::Windows => format!("https://{host}/{dir}/{version}/jenkins.msi"),
        PackageFormat::War => format!("https://{host}/{dir}/{version}/jenkins.war"),
    }
}

/// Build the endpoint table for every supported package
pub fn build_endpoints(weekly: &str, stable: &str, host: &str) -> EndpointTable {
    PackageId::ALL
        .into_iter()
        .map(|package| {
            let url = download_url(package, weekly, stable, host);
            (package, Endpoint { package, url })
        })
        .collect()
}
