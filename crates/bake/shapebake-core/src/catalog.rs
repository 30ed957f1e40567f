//! Name -> channel-index catalog for a mesh's blend-shape channels.
//!
//! Built once per mesh; lookups are O(1) amortized. `None` from `index_of`
//! is the "mesh has no channel of that name" sentinel.

use std::collections::HashMap;

use crate::mesh::Mesh;

#[derive(Clone, Debug, Default)]
pub struct ShapeKeyCatalog {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl ShapeKeyCatalog {
    pub fn for_mesh(mesh: &Mesh) -> Self {
        let names: Vec<String> = mesh.channels.iter().map(|c| c.name.clone()).collect();
        let index = names
            .iter()
            .enumerate()
            .map(|(i, n)| (n.clone(), i))
            .collect();
        Self { names, index }
    }

    /// Channel names in channel-index order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Ordinal of the named channel, or None when the mesh has no such channel.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
