//! Change requests grouped by domain

use std::collections::HashMap;

use super::ChangeRequest;

/// Validated change requests keyed by normalized domain name.
///
/// Domains iterate in the order they were first seen; requests keep their
/// insertion order within a domain.
#[derive(Debug, Clone, Default)]
pub struct DomainGroup {
    entries: Vec<(String, Vec<ChangeRequest>)>,
    positions: HashMap<String, usize>,
}

impl DomainGroup {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `request` to its domain's sequence.
    ///
    /// Callers insert only validated requests.
    pub(crate) fn push(&mut self, request: ChangeRequest) {
        let domain = request.domain_name();
        if let Some(&pos) = self.positions.get(domain) {
            self.entries[pos].1.push(request);
        } else {
            let domain = domain.to_string();
            self.positions.insert(domain.clone(), self.entries.len());
            self.entries.push((domain, vec![request]));
        }
    }

    /// Requests for `domain`, in input order.
    pub fn get(&self, domain: &str) -> Option<&[ChangeRequest]> {
        self.positions
            .get(domain)
            .map(|&pos| self.entries[pos].1.as_slice())
    }

    /// Domains in first-seen order.
    pub fn domains(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(domain, _)| domain.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ChangeRequest])> {
        self.entries
            .iter()
            .map(|(domain, requests)| (domain.as_str(), requests.as_slice()))
    }

    /// Number of domains.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of requests across all domains.
    pub fn request_count(&self) -> usize {
        self.entries.iter().map(|(_, requests)| requests.len()).sum()
    }
}
