use lopdf::content::Operation;

/// Capability for translating a vector-path mini-language into
/// path-construction operations.
///
/// The drawing primitives only depend on this trait, so the concrete path
/// syntax (and its parser) stays pluggable.
pub trait PathTranslator {
    /// Translates path-description text into a sequence of path-construction
    /// operations. Implementations are expected to be total: malformed input
    /// yields whatever prefix could be translated, possibly nothing.
    fn path_to_operations(&self, path: &str) -> Vec<Operation>;
}
