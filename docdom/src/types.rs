/// Flow direction of a container's children.
///
/// Column containers stack their children vertically; row containers lay
/// them side by side (table rows, tab label strips).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Row,
    #[default]
    Column,
}
