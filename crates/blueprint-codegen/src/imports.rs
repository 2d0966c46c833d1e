//! Collects the primitives a tree needs to import.

use crate::mapper::{map_kind, Primitive};
use blueprint_core::{walk_forest, ComponentKind, ComponentNode};
use indexmap::IndexSet;

/// Module the entry file imports primitives from.
pub const PRIMITIVES_MODULE: &str = "./components/primitives";

/// Collect the importable primitives used anywhere in the tree.
///
/// Kinds are gathered in one pre-order pass, then mapped and deduplicated.
/// The first primitive seen is listed first, so identical trees always
/// produce identical import lists.
pub fn collect_imports(nodes: &[ComponentNode]) -> Vec<Primitive> {
    let mut kinds: IndexSet<&ComponentKind> = IndexSet::new();
    walk_forest(nodes, &mut |node| {
        kinds.insert(&node.kind);
    });

    let primitives: IndexSet<Primitive> = kinds
        .into_iter()
        .map(|kind| map_kind(kind).primitive)
        .filter(Primitive::is_importable)
        .collect();

    primitives.into_iter().collect()
}

/// Render the import statement, or `None` when nothing is imported.
pub fn import_statement(imports: &[Primitive]) -> Option<String> {
    if imports.is_empty() {
        return None;
    }
    let names: Vec<&str> = imports.iter().map(Primitive::name).collect();
    Some(format!(
        "import {{ {} }} from '{}';",
        names.join(", "),
        PRIMITIVES_MODULE
    ))
}
