use super::endpoints::Endpoint;
use crate::document::HttpMethod;

/// Operation count per method, in order of first occurrence.
pub type MethodStats = Vec<(HttpMethod, usize)>;

/// Operation count per tag, most used first.
pub type TagStats = Vec<(String, usize)>;

/// Count operations per method. The result is an ordered association list:
/// a method appears at the position where it was first seen.
pub fn method_stats(endpoints: &[Endpoint]) -> MethodStats {
    let mut stats: MethodStats = Vec::new();
    for ep in endpoints {
        match stats.iter_mut().find(|(m, _)| *m == ep.method) {
            Some((_, count)) => *count += 1,
            None => stats.push((ep.method, 1)),
        }
    }
    stats
}

/// Count operations per tag, sorted by count descending. Tags with equal
/// counts stay in the order they were first encountered.
pub fn tag_stats(endpoints: &[Endpoint]) -> TagStats {
    let mut stats: TagStats = Vec::new();
    for tag in endpoints.iter().flat_map(|ep| ep.tags.iter()) {
        match stats.iter_mut().find(|(t, _)| t == tag) {
            Some((_, count)) => *count += 1,
            None => stats.push((tag.clone(), 1)),
        }
    }
    stats.sort_by(|a, b| b.1.cmp(&a.1));
    stats
}
