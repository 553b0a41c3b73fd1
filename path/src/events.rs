use crate::math::{Point, Transform};

/// Represents an event or edge of a path.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum PathEvent {
    Begin {
        at: Point,
    },
    Line {
        from: Point,
        to: Point,
    },
    Quadratic {
        from: Point,
        ctrl: Point,
        to: Point,
    },
    Cubic {
        from: Point,
        ctrl1: Point,
        ctrl2: Point,
        to: Point,
    },
    End {
        last: Point,
        first: Point,
        close: bool,
    },
}

impl PathEvent {
    /// Whether this event corresponds to an edge of the path.
    pub fn is_edge(&self) -> bool {
        match self {
            PathEvent::Line { .. }
            | PathEvent::Quadratic { .. }
            | PathEvent::Cubic { .. }
            | PathEvent::End { close: true, .. } => true,
            _ => false,
        }
    }

    pub fn from(&self) -> Point {
        match self {
            PathEvent::Line { from, .. }
            | PathEvent::Quadratic { from, .. }
            | PathEvent::Cubic { from, .. }
            | PathEvent::Begin { at: from }
            | PathEvent::End { last: from, .. } => *from,
        }
    }

    pub fn to(&self) -> Point {
        match self {
            PathEvent::Line { to, .. }
            | PathEvent::Quadratic { to, .. }
            | PathEvent::Cubic { to, .. }
            | PathEvent::Begin { at: to }
            | PathEvent::End { first: to, .. } => *to,
        }
    }

    pub fn transformed(&self, mat: &Transform) -> Self {
        match self {
            PathEvent::Line { from, to } => PathEvent::Line {
                from: mat.transform_point(*from),
                to: mat.transform_point(*to),
            },
            PathEvent::Quadratic { from, ctrl, to } => PathEvent::Quadratic {
                from: mat.transform_point(*from),
                ctrl: mat.transform_point(*ctrl),
                to: mat.transform_point(*to),
            },
            PathEvent::Cubic {
                from,
                ctrl1,
                ctrl2,
                to,
            } => PathEvent::Cubic {
                from: mat.transform_point(*from),
                ctrl1: mat.transform_point(*ctrl1),
                ctrl2: mat.transform_point(*ctrl2),
                to: mat.transform_point(*to),
            },
            PathEvent::Begin { at } => PathEvent::Begin {
                at: mat.transform_point(*at),
            },
            PathEvent::End { last, first, close } => PathEvent::End {
                last: mat.transform_point(*last),
                first: mat.transform_point(*first),
                close: *close,
            },
        }
    }
}
