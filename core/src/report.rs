use std::fmt;

use indexmap::IndexMap;
use itertools::Itertools;

use crate::ExtractedComponent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    /// Distinct names with their counts, ascending by name.
    pub variants: IndexMap<String, usize>,
}

pub fn report(components: &[ExtractedComponent]) -> Summary {
    let variants = components
        .iter()
        .map(|c| c.name.as_str())
        .counts()
        .into_iter()
        .sorted()
        .map(|(name, count)| (name.to_string(), count))
        .collect();
    Summary {
        total: components.len(),
        variants,
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Variants found ({}):", self.variants.len())?;
        for (name, count) in &self.variants {
            write!(f, "\n   - {name} ({count} instances)")?;
        }
        Ok(())
    }
}
