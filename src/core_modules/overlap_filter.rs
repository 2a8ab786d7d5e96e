// THEORY:
// The overlap filter is the reduction layer. It takes every box the detector found
// and narrows it down to at most one answer:
//
// 1.  **Exclusion**: Any box that overlaps any other box is removed, regardless of
//     which of the two is larger. Both members of an overlapping pair are lost.
// 2.  **Selection**: Among the survivors, the largest area wins. The current best is
//     replaced only on a strictly greater area, so the earliest-discovered box keeps
//     the title on ties.
//
// The exclusion step compares every pair, which is quadratic in the number of
// clusters but independent of grid size.

use crate::core_modules::bounding_box::BoundingBox;

/// Keeps the boxes that overlap no other box, preserving input order.
pub fn non_overlapping(boxes: &[BoundingBox]) -> Vec<BoundingBox> {
    boxes
        .iter()
        .enumerate()
        .filter(|&(i, candidate)| {
            !boxes
                .iter()
                .enumerate()
                .any(|(j, other)| i != j && candidate.overlaps(other))
        })
        .map(|(_, b)| *b)
        .collect()
}

/// The box with the greatest area; the first one wins a tie.
pub fn largest(boxes: &[BoundingBox]) -> Option<BoundingBox> {
    let mut best: Option<BoundingBox> = None;
    for candidate in boxes {
        match best {
            Some(current) if candidate.area() <= current.area() => {}
            _ => best = Some(*candidate),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disjoint_boxes_all_survive() {
        let boxes = [BoundingBox::new(0, 0, 1, 1), BoundingBox::new(2, 4, 3, 5)];
        assert_eq!(non_overlapping(&boxes), boxes.to_vec());
    }

    #[test]
    fn both_members_of_an_overlap_are_dropped() {
        let boxes = [
            BoundingBox::new(0, 0, 2, 2),
            BoundingBox::new(1, 1, 3, 3),
            BoundingBox::new(5, 5, 5, 5),
        ];
        assert_eq!(non_overlapping(&boxes), vec![BoundingBox::new(5, 5, 5, 5)]);
    }

    #[test]
    fn nested_box_is_an_overlap() {
        let boxes = [BoundingBox::new(0, 0, 4, 4), BoundingBox::new(2, 2, 2, 2)];
        assert!(non_overlapping(&boxes).is_empty());
    }

    #[test]
    fn identical_boxes_overlap_each_other() {
        let b = BoundingBox::new(1, 1, 2, 2);
        assert!(non_overlapping(&[b, b]).is_empty());
    }

    #[test]
    fn largest_prefers_first_on_tie() {
        let first = BoundingBox::new(0, 0, 1, 1);
        let second = BoundingBox::new(2, 4, 3, 5);
        assert_eq!(largest(&[first, second]), Some(first));
    }

    #[test]
    fn largest_takes_strictly_bigger() {
        let small = BoundingBox::new(0, 0, 0, 0);
        let big = BoundingBox::new(3, 3, 5, 5);
        assert_eq!(largest(&[small, big]), Some(big));
    }

    #[test]
    fn largest_of_nothing() {
        assert_eq!(largest(&[]), None);
    }
}
