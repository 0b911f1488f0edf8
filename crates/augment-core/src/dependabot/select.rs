//! Decides which update entries are missing from a dependabot config

use std::collections::BTreeSet;
use tracing::debug;

use super::model::{DependabotConfig, UpdateKey};
use crate::wire::Ecosystem;

/// Compute the ecosystems to add, sorted by (ecosystem, directory).
///
/// An ecosystem is missing unless an update with the same ecosystem and
/// directory already exists; the same ecosystem in another directory is a
/// different entry. Repeated requests are staged once.
pub fn select(config: &DependabotConfig, ecosystems: &[Ecosystem]) -> Vec<Ecosystem> {
    let present: BTreeSet<UpdateKey> = config.updates().iter().map(|u| u.key()).collect();

    let (_, mut staged) = ecosystems.iter().fold(
        (present, Vec::new()),
        |(present, mut staged), ecosystem| {
            let key = ecosystem.key();
            if present.contains(&key) {
                debug!(update = %key, "Update already declared");
                return (present, staged);
            }
            debug!(update = %key, interval = %ecosystem.interval, "Staging update");
            let mut next = present;
            next.insert(key);
            staged.push(ecosystem.clone());
            (next, staged)
        },
    );

    staged.sort_by_key(Ecosystem::key);
    staged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_request_is_staged_once() {
        let npm = Ecosystem::new("npm", "/", "daily");
        let staged = select(&DependabotConfig::default(), &[npm.clone(), npm.clone()]);
        assert_eq!(staged, vec![npm]);
    }

    #[test]
    fn same_ecosystem_other_directory_is_distinct() {
        let config = DependabotConfig::parse(
            "version: 2\nupdates:\n  - package-ecosystem: npm\n    directory: /app\n",
        )
        .unwrap();
        let staged = select(
            &config,
            &[
                Ecosystem::new("npm", "/app", "daily"),
                Ecosystem::new("npm", "/sample", "daily"),
            ],
        );
        assert_eq!(staged, vec![Ecosystem::new("npm", "/sample", "daily")]);
    }
}
