/// The layout algorithm and its options.
///
/// Computes positions for every node of a canonical tree, recursively and
/// without side effects.
pub mod engine;
/// Positioned nodes, points and connectors handed to renderers.
pub mod node;
