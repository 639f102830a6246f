//! Electrical equivalence between breadboard positions.
//!
//! Models the physical bus structure: each row-half (five holes) is one
//! electrical node, the two halves of a row are never joined across the
//! center gap, and each power rail is a single node spanning the full board
//! length.

use crate::position::BreadboardPosition;

/// True iff two resolved positions sit on the same electrical node.
///
/// Invalid positions never connect. A rail connects only to itself, but does
/// so regardless of row; grid columns connect only within the same row-half
/// of the same row. Symmetric in its arguments.
pub fn are_connected(a: &BreadboardPosition, b: &BreadboardPosition) -> bool {
    let (Some(ca), Some(cb), Some(ra), Some(rb)) = (a.column, b.column, a.row, b.row) else {
        return false;
    };

    // A rail is one node over its full length; it joins nothing but itself.
    if ca.is_rail() || cb.is_rail() {
        return ca == cb;
    }

    if ra != rb {
        return false;
    }

    ca.half() == cb.half()
}
