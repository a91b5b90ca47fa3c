use std::rc::Rc;

/// Immutable, append-only sequence of move labels shared between frontier
/// entries.
///
/// Extending a trail allocates one link and shares the rest with the
/// parent, so sibling entries never copy their common prefix. The full
/// sequence is materialized once, when a goal is reached.
#[derive(Clone, Debug)]
pub struct Trail<L> {
    label: Option<L>,
    parent: Option<Rc<Self>>,
    len: usize,
}

impl<L> Default for Trail<L> {
    fn default() -> Self {
        Self {
            label: None,
            parent: None,
            len: 0,
        }
    }
}

impl<L> Trail<L>
where
    L: Copy,
{
    /// Creates the empty trail at the search root.
    pub fn root() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Creates a trail extending `parent` by one label.
    pub fn extend(parent: &Rc<Self>, label: L) -> Rc<Self> {
        Rc::new(Self {
            label: Some(label),
            parent: Some(parent.clone()),
            len: parent.len + 1,
        })
    }

    /// Returns the number of labels on the trail.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns whether the trail holds no labels.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the labels in root-to-tip order.
    pub fn labels(&self) -> Vec<L> {
        let mut labels = Vec::with_capacity(self.len);
        let mut current = self;

        while let Some(label) = current.label {
            labels.push(label);
            current = current.parent.as_ref().unwrap();
        }

        labels.reverse();

        labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_empty() {
        let root = Trail::<char>::root();

        assert!(root.is_empty());
        assert_eq!(root.len(), 0);
        assert_eq!(root.labels(), vec![]);
    }

    #[test]
    fn test_extend() {
        let root = Trail::root();
        let trail = Trail::extend(&root, 'R');
        let trail = Trail::extend(&trail, 'D');
        let trail = Trail::extend(&trail, 'L');

        assert_eq!(trail.len(), 3);
        assert!(!trail.is_empty());
        assert_eq!(trail.labels(), vec!['R', 'D', 'L']);
    }

    #[test]
    fn test_siblings_share_prefix() {
        let root = Trail::root();
        let prefix = Trail::extend(&root, 1);
        let left = Trail::extend(&prefix, 2);
        let right = Trail::extend(&prefix, 3);

        assert_eq!(left.labels(), vec![1, 2]);
        assert_eq!(right.labels(), vec![1, 3]);
    }
}
