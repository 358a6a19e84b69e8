//! Annotation groups issued by the renderer.

/// The kind of overlay a group of primitives draws.
///
/// Variants are declared in the order the renderer emits them for a single
/// picture, with [`Annotation::WallOutline`] drawn once before any picture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Annotation {
    /// Outline of the whole wall
    WallOutline,
    /// Picture frame
    Frame,
    /// Corner-to-corner centering guides
    Diagonals,
    /// Circles around the two wire attachment points
    SuspensionMarkers,
    /// Line from the wall's top edge down to the attachment line, with its label
    VerticalDimension,
    /// Line between the attachment points, with its labels
    HorizontalDimension,
}

impl Annotation {
    /// Annotations drawn for every picture, in emission order.
    pub const PER_PICTURE: [Self; 5] = [
        Self::Frame,
        Self::Diagonals,
        Self::SuspensionMarkers,
        Self::VerticalDimension,
        Self::HorizontalDimension,
    ];

    /// Returns a stable, human-readable name for this annotation.
    pub fn name(&self) -> &'static str {
        match self {
            Self::WallOutline => "wall-outline",
            Self::Frame => "frame",
            Self::Diagonals => "diagonals",
            Self::SuspensionMarkers => "suspension-markers",
            Self::VerticalDimension => "vertical-dimension",
            Self::HorizontalDimension => "horizontal-dimension",
        }
    }
}
