//! Package identifiers: packaging format × release channel

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Packaging format published on the download host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageFormat {
    /// Debian archive (.deb)
    Debian,
    /// RPM for Red Hat based distributions
    RedHat,
    /// RPM for openSUSE
    OpenSuse,
    /// Windows installer (.msi)
    Windows,
    /// Portable web archive (.war)
    War,
}

/// Release channel a package is published on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Rolling weekly release line
    Weekly,
    /// Long-term-support release line
    Stable,
}

/// One of the ten monitored packages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PackageId {
    pub format: PackageFormat,
    pub channel: Channel,
}

impl PackageId {
    /// Every supported package, in report order
    pub const ALL: [PackageId; 10] = [
        PackageId::new(PackageFormat::Debian, Channel::Weekly),
        PackageId::new(PackageFormat::RedHat, Channel::Weekly),
        PackageId::new(PackageFormat::OpenSuse, Channel::Weekly),
        PackageId::new(PackageFormat::Windows, Channel::Weekly),
        PackageId::new(PackageFormat::War, Channel::Weekly),
        PackageId::new(PackageFormat::Debian, Channel::Stable),
        PackageId::new(PackageFormat::RedHat, Channel::Stable),
        PackageId::new(PackageFormat::Windows, Channel::Stable),
        PackageId::new(PackageFormat::OpenSuse, Channel::Stable),
        PackageId::new(PackageFormat::War, Channel::Stable),
    ];

    pub const fn new(format: PackageFormat, channel: Channel) -> Self {
        Self { format, channel }
    }

    /// Returns the identifier used in configuration and metric tags.
    /// It is also the top-level directory of the package on the download host.
    pub fn as_str(&self) -> &'static str {
        match (self.format, self.channel) {
            (PackageFormat::Debian, Channel::Weekly) => "debian",
            (PackageFormat::RedHat, Channel::Weekly) => "redhat",
            (PackageFormat::OpenSuse, Channel::Weekly) => "opensuse",
            (PackageFormat::Windows, Channel::Weekly) => "windows",
            (PackageFormat::War, Channel::Weekly) => "war",
            (PackageFormat::Debian, Channel::Stable) => "debian-stable",
            (PackageFormat::RedHat, Channel::Stable) => "redhat-stable",
            (PackageFormat::OpenSuse, Channel::Stable) => "opensuse-stable",
            (PackageFormat::Windows, Channel::Stable) => "windows-stable",
            (PackageFormat::War, Channel::Stable) => "war-stable",
        }
    }
}

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a package identifier is not one of [`PackageId::ALL`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Package {0} is not supported")]
pub struct UnsupportedPackage(pub String);

impl FromStr for PackageId {
    type Err = UnsupportedPackage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PackageId::ALL
            .into_iter()
            .find(|package| package.as_str() == s)
            .ok_or_else(|| UnsupportedPackage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("debian", PackageFormat::Debian, Channel::Weekly)]
    #[case("redhat", PackageFormat::RedHat, Channel::Weekly)]
    #[case("opensuse", PackageFormat::OpenSuse, Channel::Weekly)]
    #[case("windows", PackageFormat::Windows, Channel::Weekly)]
    #[case("war", PackageFormat::War, Channel::Weekly)]
    #[case("debian-stable", PackageFormat::Debian, Channel::Stable)]
    #[case("redhat-stable", PackageFormat::RedHat, Channel::Stable)]
    #[case("opensuse-stable", PackageFormat::OpenSuse, Channel::Stable)]
    #[case("windows-stable", PackageFormat::Windows, Channel::Stable)]
    #[case("war-stable", PackageFormat::War, Channel::Stable)]
    fn from_str_parses_supported_identifiers(
        #[case] id: &str,
        #[case] format: PackageFormat,
        #[case] channel: Channel,
    ) {
        let package: PackageId = id.parse().unwrap();

        assert_eq!(package, PackageId::new(format, channel));
        assert_eq!(package.to_string(), id);
    }

    #[rstest]
    #[case("docker")]
    #[case("war-weekly")]
    #[case("WAR")]
    #[case("")]
    fn from_str_rejects_unknown_identifiers(#[case] id: &str) {
        assert_eq!(
            id.parse::<PackageId>(),
            Err(UnsupportedPackage(id.to_string()))
        );
    }

    #[test]
    fn all_lists_every_identifier_once() {
        let ids: Vec<&str> = PackageId::ALL.iter().map(|p| p.as_str()).collect();

        assert_eq!(
            ids,
            vec![
                "debian",
                "redhat",
                "opensuse",
                "windows",
                "war",
                "debian-stable",
                "redhat-stable",
                "windows-stable",
                "opensuse-stable",
                "war-stable",
            ]
        );
    }
}
