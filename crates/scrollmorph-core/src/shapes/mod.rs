/// Shape generators.
///
/// Contains the six authored point-cloud silhouettes, a dispatcher that selects
/// among them by [`ShapeKind`](dispatcher::ShapeKind), and the ordered
/// sequence the morph driver walks through.
pub mod primitives;
pub mod dispatcher;
pub mod sequence;
