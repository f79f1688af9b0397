use crate::contrib::types::{Contribution, ContributionKind};

/// Ordered mapping kind -> contributions. Group order is first-occurrence
/// order of each kind in the input; record order within a group is input
/// order. No sorting anywhere.
#[derive(Debug, Clone, Default)]
pub struct Grouped {
    groups: Vec<(ContributionKind, Vec<Contribution>)>,
}

/// Appends each record to the list keyed by its own kind, creating the
/// list lazily on first encounter. Empty input yields an empty grouping.
pub fn group_by_kind(records: Vec<Contribution>) -> Grouped {
    let mut grouped = Grouped::default();
    for record in records {
        grouped.push(record);
    }
    grouped
}

impl Grouped {
    fn push(&mut self, record: Contribution) {
        match self.groups.iter_mut().find(|(kind, _)| *kind == record.kind) {
            Some((_, list)) => list.push(record),
            None => self.groups.push((record.kind, vec![record])),
        }
    }

    pub fn get(&self, kind: ContributionKind) -> &[Contribution] {
        self.groups
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, list)| list.as_slice())
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContributionKind, &[Contribution])> {
        self.groups.iter().map(|(kind, list)| (*kind, list.as_slice()))
    }

    pub fn total(&self) -> usize {
        self.groups.iter().map(|(_, list)| list.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Group-concatenated record list, group order then input order.
    pub fn flatten(&self) -> Vec<Contribution> {
        self.groups
            .iter()
            .flat_map(|(_, list)| list.iter().cloned())
            .collect()
    }
}
