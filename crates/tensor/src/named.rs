use {
    crate::TensorHandle,
    std::collections::{BTreeMap, btree_map},
};

/// Tensors keyed by their inference input/output name.
///
/// Iteration follows name order, which is the order used wherever "all
/// outputs" are emitted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NamedTensorSet {
    tensors: BTreeMap<String, TensorHandle>,
}

impl NamedTensorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name`, returning the tensor it replaced.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        tensor: TensorHandle,
    ) -> Option<TensorHandle> {
        self.tensors.insert(name.into(), tensor)
    }

    pub fn get(&self, name: &str) -> Option<&TensorHandle> {
        self.tensors.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<TensorHandle> {
        self.tensors.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tensors.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.tensors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tensors.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tensors.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, TensorHandle> {
        self.tensors.iter()
    }
}

impl IntoIterator for NamedTensorSet {
    type Item = (String, TensorHandle);
    type IntoIter = btree_map::IntoIter<String, TensorHandle>;

    fn into_iter(self) -> Self::IntoIter {
        self.tensors.into_iter()
    }
}

impl<'a> IntoIterator for &'a NamedTensorSet {
    type Item = (&'a String, &'a TensorHandle);
    type IntoIter = btree_map::Iter<'a, String, TensorHandle>;

    fn into_iter(self) -> Self::IntoIter {
        self.tensors.iter()
    }
}

impl<S: Into<String>> FromIterator<(S, TensorHandle)> for NamedTensorSet {
    fn from_iter<I: IntoIterator<Item = (S, TensorHandle)>>(iter: I) -> Self {
        Self {
            tensors: iter
                .into_iter()
                .map(|(name, tensor)| (name.into(), tensor))
                .collect(),
        }
    }
}
